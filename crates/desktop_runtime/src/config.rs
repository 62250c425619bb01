//! Typed desktop layout configuration.
//!
//! The layout declares the windows present at load, the pills already on the taskbar, and the
//! window-manager tunables. It is authored as TOML; the bundled layout lives in
//! `crates/desktop_runtime/desktop.toml` and is schema-checked by the build script.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    focus::DEFAULT_BASE_Z_INDEX,
    geometry::DEFAULT_TASKBAR_HEIGHT_PX,
    focus::MAX_BASE_Z_INDEX,
    interaction::{DRAG_EDGE_MARGIN_PX, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    model::{FeatureTile, WindowControl, WindowGeometry, DESKTOP_LAYOUT_SCHEMA_VERSION},
};

const BUNDLED_LAYOUT: &str = include_str!("../desktop.toml");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading or validating a desktop layout.
pub enum ConfigError {
    /// The TOML document could not be deserialized.
    #[error("failed to parse desktop layout: {0}")]
    Parse(String),
    /// The layout was written for a different schema.
    #[error("unsupported desktop layout schema version {found}")]
    UnsupportedSchema {
        /// Schema version found in the document.
        found: u32,
    },
    /// Two windows share the same key.
    #[error("duplicate window key `{0}`")]
    DuplicateWindow(String),
    /// A pill targets a window key that is not declared.
    #[error("pill targets unknown window `{0}`")]
    UnknownWindow(String),
    /// More than one pill targets the same window.
    #[error("window `{0}` has more than one pill")]
    DuplicatePill(String),
    /// A window lists a control tag outside `min`/`max`/`close`.
    #[error("window `{window}` declares unknown control `{tag}`")]
    UnknownControl {
        /// Window declaring the control.
        window: String,
        /// Offending tag.
        tag: String,
    },
    /// Two tiles in one window share a key.
    #[error("window `{window}` declares tile `{tile}` twice")]
    DuplicateTile {
        /// Window declaring the tiles.
        window: String,
        /// Repeated tile key.
        tile: String,
    },
    /// `min_width`/`min_height` undercut the smallest window the desktop allows.
    #[error(
        "minimum window size {width}x{height} is below {}x{}",
        MIN_WINDOW_WIDTH,
        MIN_WINDOW_HEIGHT
    )]
    MinimumSizeTooSmall { width: i32, height: i32 },
    /// `drag_edge_margin` would let a window slide under the top-left edge.
    #[error("drag edge margin {0} is below {}", DRAG_EDGE_MARGIN_PX)]
    DragMarginTooSmall(i32),
    /// `base_z_index` leaves too little headroom for the focus counter.
    #[error("base z-index {0} exceeds {}", MAX_BASE_Z_INDEX)]
    BaseZIndexTooLarge(u32),
    /// `fallback_taskbar_height` is negative.
    #[error("fallback taskbar height {0} is negative")]
    NegativeTaskbarHeight(i32),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Window-manager tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    pub base_z_index: u32,
    pub drag_edge_margin: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub fallback_taskbar_height: i32,
    /// Reapply the pre-maximize geometry when a maximized window is minimized.
    pub minimize_restores_geometry: bool,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            base_z_index: DEFAULT_BASE_Z_INDEX,
            drag_edge_margin: DRAG_EDGE_MARGIN_PX,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            fallback_taskbar_height: DEFAULT_TASKBAR_HEIGHT_PX,
            minimize_restores_geometry: true,
        }
    }
}

impl WindowManagerConfig {
    /// Rejects tunables that would loosen the size, margin, or stacking guarantees.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width < MIN_WINDOW_WIDTH || self.min_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::MinimumSizeTooSmall {
                width: self.min_width,
                height: self.min_height,
            });
        }
        if self.drag_edge_margin < DRAG_EDGE_MARGIN_PX {
            return Err(ConfigError::DragMarginTooSmall(self.drag_edge_margin));
        }
        if self.base_z_index > MAX_BASE_Z_INDEX {
            return Err(ConfigError::BaseZIndexTooLarge(self.base_z_index));
        }
        if self.fallback_taskbar_height < 0 {
            return Err(ConfigError::NegativeTaskbarHeight(
                self.fallback_taskbar_height,
            ));
        }
        Ok(())
    }
}

fn default_controls() -> Vec<String> {
    WindowControl::ALL
        .iter()
        .map(|control| control.tag().to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub tiles: Vec<FeatureTile>,
    #[serde(default = "default_controls")]
    pub controls: Vec<String>,
    #[serde(default = "default_true")]
    pub resizable: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub geometry: WindowGeometry,
}

impl WindowSpec {
    pub fn parsed_controls(&self) -> Result<Vec<WindowControl>, ConfigError> {
        self.controls
            .iter()
            .map(|tag| {
                WindowControl::from_tag(tag).ok_or_else(|| ConfigError::UnknownControl {
                    window: self.key.clone(),
                    tag: tag.clone(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillSpec {
    pub window: String,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub manager: WindowManagerConfig,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
    #[serde(default)]
    pub pills: Vec<PillSpec>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            schema_version: DESKTOP_LAYOUT_SCHEMA_VERSION,
            manager: WindowManagerConfig::default(),
            windows: Vec::new(),
            pills: Vec::new(),
        }
    }
}

impl DesktopConfig {
    /// Parses and validates a TOML layout.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the layout bundled with the crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED_LAYOUT)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != DESKTOP_LAYOUT_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedSchema {
                found: self.schema_version,
            });
        }
        self.manager.validate()?;

        let mut keys = BTreeSet::new();
        for window in &self.windows {
            if !keys.insert(window.key.as_str()) {
                return Err(ConfigError::DuplicateWindow(window.key.clone()));
            }
            window.parsed_controls()?;
            let mut tiles = BTreeSet::new();
            for tile in &window.tiles {
                if !tiles.insert(tile.key.as_str()) {
                    return Err(ConfigError::DuplicateTile {
                        window: window.key.clone(),
                        tile: tile.key.clone(),
                    });
                }
            }
        }

        let mut pill_targets = BTreeSet::new();
        for pill in &self.pills {
            if !keys.contains(pill.window.as_str()) {
                return Err(ConfigError::UnknownWindow(pill.window.clone()));
            }
            if !pill_targets.insert(pill.window.as_str()) {
                return Err(ConfigError::DuplicatePill(pill.window.clone()));
            }
        }

        Ok(())
    }
}
