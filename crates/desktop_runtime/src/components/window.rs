use super::{feature_tiles::FeatureTiles, *};
use crate::model::WindowControl;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| runtime.manager.with(|m| m.window(window_id).cloned()));

    let Some(initial) = window.get_untracked() else {
        return ().into_view();
    };
    let key = store_value(initial.key.clone());
    let measured_taskbar = move || runtime.host.get_value().measure_taskbar_height();

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let Some(rect) = runtime.host.get_value().element_rect(&key.get_value()) else {
            return;
        };
        try_set_pointer_capture(&ev);
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            rect,
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let Some(rect) = runtime.host.get_value().element_rect(&key.get_value()) else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            rect,
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            taskbar_height: measured_taskbar(),
        });
    };

    let controls = initial
        .controls
        .iter()
        .copied()
        .map(move |control| {
            view! {
                <button
                    type="button"
                    class=format!("win-btn {}", control.tag())
                    data-action=control.tag()
                    aria-label=move || {
                        let maximized = window.get().is_some_and(|w| w.maximized);
                        control.aria_label(maximized)
                    }
                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                    on:dblclick=move |ev| stop_mouse_event(&ev)
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        let taskbar_height = if control == WindowControl::Maximize {
                            measured_taskbar()
                        } else {
                            None
                        };
                        runtime.dispatch_action(DesktopAction::WindowControl {
                            window_id,
                            control,
                            taskbar_height,
                        });
                    }
                />
            }
        })
        .collect_view();

    let body = initial
        .body
        .iter()
        .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
        .collect_view();

    let tiles = (!initial.tiles.is_empty()).then(|| {
        view! { <FeatureTiles tiles=initial.tiles.clone() /> }
    });

    view! {
        <section
            id=initial.key.clone()
            class=move || window.get().map(|w| w.class_name()).unwrap_or_default()
            style=move || window.get().map(|w| w.style()).unwrap_or_default()
            role="dialog"
            aria-label=initial.title.clone()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_drag
                on:dblclick=titlebar_double_click
            >
                <span class="title">{initial.title.clone()}</span>
                <div class="controls">{controls}</div>
            </header>
            <div class="window-body">{body}{tiles}</div>
            <Show
                when=move || window.get().is_some_and(|w| w.resizable && !w.maximized)
                fallback=|| ()
            >
                <div class="resizer" aria-hidden="true" on:pointerdown=begin_resize />
            </Show>
        </section>
    }
    .into_view()
}
