//! Runtime-effect dispatch for the desktop host boundary.

use leptos::logging;

use crate::{
    host::{host_ui, DesktopHostContext, TOAST_DURATION_MS},
    reducer::RuntimeEffect,
};

pub(super) fn run_runtime_effect(_host: &DesktopHostContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::PublishTaskbarHeight(height) => host_ui::publish_taskbar_height(height),
        RuntimeEffect::SuppressTextSelection => host_ui::set_text_selection(false),
        RuntimeEffect::RestoreTextSelection => host_ui::set_text_selection(true),
        RuntimeEffect::Toast(message) => {
            logging::log!("toast: {message}");
            host_ui::show_toast(&message, TOAST_DURATION_MS);
        }
        RuntimeEffect::SetThemeAccent(accent) => host_ui::set_theme_accent(accent),
        RuntimeEffect::ClearEffects => host_ui::clear_effects(),
        RuntimeEffect::Fx(kind) => host_ui::flash_body_class(kind.css_class(), kind.duration_ms()),
    }
}
