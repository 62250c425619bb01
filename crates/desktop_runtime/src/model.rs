use std::fmt;

use serde::{Deserialize, Serialize};

pub const DESKTOP_LAYOUT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Titlebar controls a window can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WindowControl {
    Minimize,
    Maximize,
    Close,
}

impl WindowControl {
    pub const ALL: [Self; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// Parses the layout tag used for a control (`min`, `max`, `close`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "min" => Some(Self::Minimize),
            "max" => Some(Self::Maximize),
            "close" => Some(Self::Close),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Minimize => "min",
            Self::Maximize => "max",
            Self::Close => "close",
        }
    }

    pub fn aria_label(self, maximized: bool) -> &'static str {
        match self {
            Self::Minimize => "Minimize window",
            Self::Maximize if maximized => "Restore window",
            Self::Maximize => "Maximize window",
            Self::Close => "Close window",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl PositionMode {
    pub fn css(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}

/// A typed inline style value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssValue {
    Px(i32),
    Vw(u16),
    Percent(u16),
    /// `calc(100vh - Npx)`
    ViewportHeightMinusPx(i32),
    Auto,
    None,
    Raw(String),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // unitless zero keeps parity with how the page writes offsets
            Self::Px(0) => f.write_str("0"),
            Self::Px(px) => write!(f, "{px}px"),
            Self::Vw(vw) => write!(f, "{vw}vw"),
            Self::Percent(pct) => write!(f, "{pct}%"),
            Self::ViewportHeightMinusPx(px) => write!(f, "calc(100vh - {px}px)"),
            Self::Auto => f.write_str("auto"),
            Self::None => f.write_str("none"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Inline layout fields of a window. `None` is an unset field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WindowGeometry {
    pub position: Option<PositionMode>,
    pub left: Option<CssValue>,
    pub top: Option<CssValue>,
    pub right: Option<CssValue>,
    pub bottom: Option<CssValue>,
    pub width: Option<CssValue>,
    pub height: Option<CssValue>,
    pub transform: Option<CssValue>,
    pub margin: Option<CssValue>,
    pub max_width: Option<CssValue>,
    pub max_height: Option<CssValue>,
}

impl WindowGeometry {
    /// Returns `(property, value)` pairs in declaration order, with unset fields as `""`.
    pub fn css_fields(&self) -> [(&'static str, String); 11] {
        let value = |v: &Option<CssValue>| v.as_ref().map(ToString::to_string).unwrap_or_default();
        [
            (
                "position",
                self.position.map(|p| p.css().to_string()).unwrap_or_default(),
            ),
            ("left", value(&self.left)),
            ("top", value(&self.top)),
            ("right", value(&self.right)),
            ("bottom", value(&self.bottom)),
            ("width", value(&self.width)),
            ("height", value(&self.height)),
            ("transform", value(&self.transform)),
            ("margin", value(&self.margin)),
            ("max-width", value(&self.max_width)),
            ("max-height", value(&self.max_height)),
        ]
    }

    /// Renders the set fields as an inline `style` declaration list.
    pub fn to_style(&self) -> String {
        self.css_fields()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{name}:{value};"))
            .collect()
    }
}

/// Chip and panel pair shown in a window's feature strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTile {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub body: Vec<String>,
}

impl FeatureTile {
    /// DOM id of the tile panel.
    pub fn panel_id(&self) -> String {
        format!("tile-{}", self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    /// DOM id of the rendered window element.
    pub key: String,
    pub title: String,
    /// Paragraphs rendered in the window body.
    pub body: Vec<String>,
    pub tiles: Vec<FeatureTile>,
    pub controls: Vec<WindowControl>,
    pub resizable: bool,
    pub hidden: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub closed: bool,
    pub geometry: WindowGeometry,
    pub saved_geometry: Option<WindowGeometry>,
    pub z_index: u64,
}

impl WindowRecord {
    pub fn has_control(&self, control: WindowControl) -> bool {
        self.controls.contains(&control)
    }

    /// Whether the window accepts further lifecycle transitions.
    pub fn is_live(&self) -> bool {
        !self.closed
    }

    pub fn class_name(&self) -> String {
        let mut class = String::from("window");
        for (flag, name) in [
            (self.hidden, " is-hidden"),
            (self.minimized, " minimized"),
            (self.maximized, " maximized"),
            (self.closed, " closed"),
        ] {
            if flag {
                class.push_str(name);
            }
        }
        class
    }

    pub fn style(&self) -> String {
        let mut style = self.geometry.to_style();
        if self.z_index > 0 {
            style.push_str(&format!("z-index:{};", self.z_index));
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub window_id: WindowId,
    pub label: String,
    pub icon: String,
    pub active: bool,
    pub min_indicator: bool,
}

impl Pill {
    pub fn new(window_id: WindowId, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            window_id,
            label: label.into(),
            icon: icon.into(),
            active: false,
            min_indicator: false,
        }
    }

    pub fn mark_active(&mut self) {
        self.active = true;
        self.min_indicator = false;
    }

    pub fn mark_minimized(&mut self) {
        self.active = false;
        self.min_indicator = true;
    }

    pub fn class_name(&self) -> String {
        let mut class = String::from("task-btn");
        if self.active {
            class.push_str(" is-active");
        }
        if self.min_indicator {
            class.push_str(" is-min");
        }
        class
    }
}

/// Shared layout values published by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutMetrics {
    pub taskbar_height: Option<i32>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn control_tags_parse_and_round_trip() {
        for control in WindowControl::ALL {
            assert_eq!(WindowControl::from_tag(control.tag()), Some(control));
        }
        assert_eq!(WindowControl::from_tag("shade"), None);
    }

    #[test]
    fn geometry_style_skips_unset_fields() {
        let geometry = WindowGeometry {
            position: Some(PositionMode::Fixed),
            left: Some(CssValue::Px(0)),
            bottom: Some(CssValue::Px(84)),
            height: Some(CssValue::ViewportHeightMinusPx(84)),
            transform: Some(CssValue::None),
            ..WindowGeometry::default()
        };
        assert_eq!(
            geometry.to_style(),
            "position:fixed;left:0;bottom:84px;height:calc(100vh - 84px);transform:none;"
        );
    }

    #[test]
    fn pill_flags_stay_exclusive() {
        let mut pill = Pill::new(WindowId(1), "Home", "home.svg");
        pill.mark_active();
        assert_eq!(pill.class_name(), "task-btn is-active");
        pill.mark_minimized();
        assert_eq!(pill.class_name(), "task-btn is-min");
        assert!(!(pill.active && pill.min_indicator));
    }
}
