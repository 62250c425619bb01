//! Window-manager facade: owns the window set, taskbar pills, focus counter, and pointer sessions.
//!
//! Every operation resolves its window defensively. A missing or closed window turns the call into
//! a silent no-op reported through the return value, never an error, because the same layout code
//! runs against pages where only some windows exist.

use crate::{
    config::{ConfigError, DesktopConfig, WindowManagerConfig},
    focus::FocusCounter,
    geometry::{maximized_geometry, restored_geometry},
    interaction::{DragSession, InteractionState, ResizeSession},
    model::{LayoutMetrics, Pill, PointerPosition, WindowId, WindowRecord, WindowRect},
    pills::{PillRegistry, PillSource},
};

/// Counts of sessions torn down by a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleasedSessions {
    pub drags: usize,
    pub resizes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManager {
    config: WindowManagerConfig,
    windows: Vec<WindowRecord>,
    pills: PillRegistry,
    focus: FocusCounter,
    interaction: InteractionState,
    layout: LayoutMetrics,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowManagerConfig::default())
    }
}

impl WindowManager {
    /// Creates a manager with no windows.
    pub fn new(config: WindowManagerConfig) -> Self {
        Self {
            focus: FocusCounter::starting_at(config.base_z_index),
            config,
            windows: Vec::new(),
            pills: PillRegistry::default(),
            interaction: InteractionState::default(),
            layout: LayoutMetrics::default(),
        }
    }

    /// Builds the window set and static pills declared by a layout.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found while validating `config`.
    pub fn from_config(config: &DesktopConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut manager = Self::new(config.manager.clone());

        for spec in &config.windows {
            let id = WindowId(manager.windows.len() as u64 + 1);
            manager.windows.push(WindowRecord {
                id,
                key: spec.key.clone(),
                title: spec.title.clone(),
                body: spec.body.clone(),
                tiles: spec.tiles.clone(),
                controls: spec.parsed_controls()?,
                resizable: spec.resizable,
                hidden: spec.hidden,
                minimized: false,
                maximized: false,
                closed: false,
                geometry: spec.geometry.clone(),
                saved_geometry: None,
                z_index: 0,
            });
        }

        for spec in &config.pills {
            let Some(window_id) = manager.window_id(&spec.window) else {
                return Err(ConfigError::UnknownWindow(spec.window.clone()));
            };
            let mut pill = Pill::new(window_id, spec.label.clone(), spec.icon.clone());
            if spec.active {
                pill.mark_active();
            } else if spec.minimized {
                pill.mark_minimized();
            }
            manager.pills.register(window_id, pill);
        }

        Ok(manager)
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Looks up a window by its DOM key.
    pub fn window_id(&self, key: &str) -> Option<WindowId> {
        self.windows.iter().find(|w| w.key == key).map(|w| w.id)
    }

    pub fn pills(&self) -> &PillRegistry {
        &self.pills
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn layout(&self) -> LayoutMetrics {
        self.layout
    }

    /// Highest z-index issued so far.
    pub fn top_z_index(&self) -> u64 {
        self.focus.current()
    }

    /// Raises `window_id` above every other window and clears its minimized flag.
    ///
    /// Pills are left untouched; callers pair this with [`Self::set_active`].
    pub fn bring_to_front(&mut self, window_id: WindowId) -> bool {
        let Some(window) = live_window_mut(&mut self.windows, window_id) else {
            return false;
        };
        window.z_index = self.focus.issue();
        window.minimized = false;
        true
    }

    /// Projects the active/minimized pill state over every registered pill, then forces the
    /// target's pill (resolved through the structural fallback if needed) to active.
    pub fn set_active(&mut self, window_id: WindowId) -> bool {
        if self.live_window(window_id).is_none() {
            return false;
        }
        for pill in self.pills.registered_mut() {
            if pill.window_id == window_id {
                pill.mark_active();
            } else {
                pill.mark_minimized();
            }
        }
        if let Some(pill) = self.pills.resolve_mut(window_id) {
            pill.mark_active();
        }
        true
    }

    /// Minimizes `window_id`, leaving the maximized layout if it was in it.
    pub fn minimize(&mut self, window_id: WindowId) -> bool {
        let restore = self.config.minimize_restores_geometry;
        let Some(window) = live_window_mut(&mut self.windows, window_id) else {
            return false;
        };
        window.minimized = true;
        if window.maximized {
            window.maximized = false;
            let saved = window.saved_geometry.take();
            if restore {
                window.geometry = restored_geometry(saved);
            }
        }
        if let Some(pill) = self.pills.resolve_mut(window_id) {
            pill.mark_minimized();
        }
        true
    }

    /// Taskbar click: restore if minimized, minimize if its pill is active, focus otherwise.
    pub fn toggle_from_taskbar(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.live_window(window_id) else {
            return false;
        };

        if window.minimized {
            self.bring_to_front(window_id);
            self.set_active(window_id);
        } else if self
            .pills
            .resolve(window_id)
            .is_some_and(|(pill, _)| pill.active)
        {
            self.minimize(window_id);
        } else {
            self.bring_to_front(window_id);
            self.set_active(window_id);
        }
        true
    }

    /// Toggles the maximized layout.
    ///
    /// `measured_taskbar_height` is the live taskbar height when the host could measure it. The
    /// height actually used is published through [`Self::layout`] and returned so the host can
    /// expose it to stylesheets.
    pub fn toggle_max(
        &mut self,
        window_id: WindowId,
        measured_taskbar_height: Option<i32>,
    ) -> Option<i32> {
        let taskbar_height = measured_taskbar_height.unwrap_or(self.config.fallback_taskbar_height);
        let window = live_window_mut(&mut self.windows, window_id)?;

        if window.maximized {
            window.geometry = restored_geometry(window.saved_geometry.take());
            window.maximized = false;
        } else {
            let previous =
                std::mem::replace(&mut window.geometry, maximized_geometry(taskbar_height));
            window.saved_geometry = Some(previous);
            window.maximized = true;
        }

        self.layout.taskbar_height = Some(taskbar_height);
        Some(taskbar_height)
    }

    /// Closes `window_id` for good and removes its pill.
    pub fn close_win(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == window_id) else {
            return false;
        };
        window.closed = true;
        self.pills.remove(window_id);
        self.interaction.end_for_window(window_id);
        true
    }

    /// Registers `pill` as the taskbar control for `window_id`. Safe to repeat.
    pub fn register_pill(&mut self, window_id: WindowId, pill: Pill) -> bool {
        if self.live_window(window_id).is_none() {
            return false;
        }
        self.pills.register(window_id, pill);
        true
    }

    /// Places a pill on the taskbar without registering it.
    pub fn attach_unregistered_pill(&mut self, pill: Pill) -> bool {
        if self.live_window(pill.window_id).is_none() {
            return false;
        }
        self.pills.attach_unregistered(pill)
    }

    /// Resolves the pill for `window_id`: registry first, then a structural scan of the strip.
    pub fn get_pill(&self, window_id: WindowId) -> Option<(&Pill, PillSource)> {
        self.pills.resolve(window_id)
    }

    /// Reveals, focuses, and surfaces a window on the taskbar, creating its pill on first open.
    ///
    /// Closed windows stay closed; the call returns `false` for them.
    pub fn open_window(&mut self, window_id: WindowId, label: &str, icon: &str) -> bool {
        let Some(window) = live_window_mut(&mut self.windows, window_id) else {
            return false;
        };
        window.hidden = false;
        window.minimized = false;
        self.bring_to_front(window_id);

        if !self.pills.has_tagged(window_id) {
            let mut pill = Pill::new(window_id, label, icon);
            pill.mark_active();
            self.pills.register(window_id, pill);
        }
        self.set_active(window_id);
        true
    }

    /// Minimizes every open window and returns how many were minimized.
    pub fn minimize_all(&mut self) -> usize {
        let ids: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| w.is_live())
            .map(|w| w.id)
            .collect();
        ids.into_iter().filter(|id| self.minimize(*id)).count()
    }

    /// Starts a titlebar drag. Maximized windows are not draggable.
    ///
    /// `rendered` is the window's on-screen rectangle at pointer-down.
    pub fn begin_drag(
        &mut self,
        window_id: WindowId,
        pointer: PointerPosition,
        rendered: WindowRect,
    ) -> bool {
        let Some(window) = self.live_window(window_id) else {
            return false;
        };
        if window.maximized || window.hidden {
            return false;
        }
        self.interaction
            .dragging
            .insert(window_id, DragSession::begin(window_id, pointer, rendered));
        true
    }

    /// Starts a resize from the window's resize handle.
    ///
    /// Refused for windows without a handle and, like dragging, while maximized.
    pub fn begin_resize(
        &mut self,
        window_id: WindowId,
        pointer: PointerPosition,
        rendered: WindowRect,
    ) -> bool {
        let Some(window) = self.live_window(window_id) else {
            return false;
        };
        if !window.resizable || window.maximized || window.hidden {
            return false;
        }
        self.interaction
            .resizing
            .insert(window_id, ResizeSession::begin(window_id, pointer, rendered));
        true
    }

    /// Applies a pointer move to every live session. Returns `true` when any window changed.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) -> bool {
        let margin = self.config.drag_edge_margin;
        let min_size = (self.config.min_width, self.config.min_height);
        let mut applied = false;

        for session in self.interaction.dragging.values() {
            if let Some(window) = live_window_mut(&mut self.windows, session.window_id) {
                session.apply(pointer, margin, &mut window.geometry);
                applied = true;
            }
        }
        for session in self.interaction.resizing.values() {
            if let Some(window) = live_window_mut(&mut self.windows, session.window_id) {
                session.apply(pointer, min_size, &mut window.geometry);
                applied = true;
            }
        }
        applied
    }

    /// Ends every session. Each session is torn down exactly once.
    pub fn pointer_released(&mut self) -> ReleasedSessions {
        let released = ReleasedSessions {
            drags: self.interaction.dragging.len(),
            resizes: self.interaction.resizing.len(),
        };
        self.interaction.dragging.clear();
        self.interaction.resizing.clear();
        released
    }

    fn live_window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.window(window_id).filter(|w| w.is_live())
    }
}

fn live_window_mut(windows: &mut [WindowRecord], window_id: WindowId) -> Option<&mut WindowRecord> {
    windows
        .iter_mut()
        .find(|w| w.id == window_id && w.is_live())
}
