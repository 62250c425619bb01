//! Desktop shell UI composition and interaction surfaces.

mod feature_tiles;
mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
use crate::{
    commands::OPENED_WINDOW_ICON,
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

/// Layout key of the window the Start button opens.
pub const HOME_WINDOW_KEY: &str = "window-home";
pub const HOME_WINDOW_LABEL: &str = "Portfolio Viewer";
pub const HOME_WINDOW_ICON: &str = "assets/mascot_head.svg";

#[component]
/// Renders the managed windows and the taskbar, and routes document-level pointer gestures.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let manager = runtime.manager;

    let window_ids = create_memo(move |_| {
        manager.with(|m| m.windows().iter().map(|w| w.id).collect::<Vec<WindowId>>())
    });

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if manager.with_untracked(|m| m.interaction().is_idle()) {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerMoved {
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        end_active_pointer_interaction(runtime)
    });
    on_cleanup(move || up_listener.remove());

    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        end_active_pointer_interaction(runtime)
    });
    on_cleanup(move || cancel_listener.remove());

    view! {
        <div id="desktop-shell-root" class="desktop-shell" tabindex="-1">
            <main class="desktop">
                <For each=move || window_ids.get() key=|id| id.0 let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </main>

            <Taskbar />
        </div>
    }
}

/// Opens the home window, recreating its pill if it was dismissed.
pub(crate) fn open_home_window(runtime: DesktopRuntimeContext) {
    runtime.dispatch_action(DesktopAction::OpenWindow {
        key: HOME_WINDOW_KEY.to_string(),
        label: HOME_WINDOW_LABEL.to_string(),
        icon: HOME_WINDOW_ICON.to_string(),
    });
}

/// Opens the window behind a layout key with the command-box pill icon.
pub(crate) fn open_window_by_key(runtime: DesktopRuntimeContext, key: &str, label: &str) {
    runtime.dispatch_action(DesktopAction::OpenWindow {
        key: key.to_string(),
        label: label.to_string(),
        icon: OPENED_WINDOW_ICON.to_string(),
    });
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime
        .manager
        .with_untracked(|m| !m.interaction().is_idle())
    {
        runtime.dispatch_action(DesktopAction::PointerReleased);
    }
}
