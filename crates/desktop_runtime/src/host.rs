//! Host-side runtime helpers for executing reducer effects and querying browser layout.
//!
//! Everything that touches the DOM directly lives behind this boundary. Browser calls are gated on
//! `target_arch = "wasm32"`; native builds get inert fallbacks so the runtime stays testable.

mod effects;
mod host_ui;

use crate::{model::WindowRect, reducer::RuntimeEffect};

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: i32 = 2_200;
/// DOM id of the rendered taskbar.
pub const TASKBAR_DOM_ID: &str = "taskbar";

#[derive(Clone, Debug)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    /// DOM id of the taskbar element measured for the maximized layout.
    taskbar_dom_id: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(TASKBAR_DOM_ID)
    }
}

impl DesktopHostContext {
    pub fn new(taskbar_dom_id: &'static str) -> Self {
        Self { taskbar_dom_id }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        effects::run_runtime_effect(self, effect);
    }

    /// Live taskbar height, or `None` when the taskbar is not rendered or has no height.
    pub fn measure_taskbar_height(&self) -> Option<i32> {
        host_ui::element_rect(self.taskbar_dom_id)
            .map(|rect| rect.h)
            .filter(|height| *height > 0)
    }

    /// Rendered rectangle of the element with DOM id `key`.
    pub fn element_rect(&self, key: &str) -> Option<WindowRect> {
        host_ui::element_rect(key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_host_cannot_measure_layout() {
        let host = DesktopHostContext::default();
        assert_eq!(host.measure_taskbar_height(), None);
        assert_eq!(host.element_rect("window-home"), None);
    }

    #[test]
    fn native_effects_are_inert() {
        let host = DesktopHostContext::default();
        host.run_runtime_effect(RuntimeEffect::PublishTaskbarHeight(84));
        host.run_runtime_effect(RuntimeEffect::Toast("hello".to_string()));
        host.run_runtime_effect(RuntimeEffect::ClearEffects);
    }

    #[test]
    fn taskbar_height_variable_name_matches_stylesheet() {
        assert_eq!(host_ui::TASKBAR_HEIGHT_VAR, "--taskbar-h");
    }
}
