#[cfg(target_arch = "wasm32")]
use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{commands::ThemeAccent, model::WindowRect};

/// CSS custom property read by the maximized-window stylesheet.
pub(super) const TASKBAR_HEIGHT_VAR: &str = "--taskbar-h";
const TOAST_CLASS: &str = "fx-toast";
const OVERLAY_SELECTOR: &str = ".fx-layer,.fx-toast";

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(target_arch = "wasm32")]
fn after_timeout(ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        .is_err()
    {
        logging::warn!("failed to schedule host timeout");
    }
}

pub(super) fn element_rect(dom_id: &str) -> Option<WindowRect> {
    #[cfg(target_arch = "wasm32")]
    {
        let rect = document()?
            .get_element_by_id(dom_id)?
            .get_bounding_client_rect();
        return Some(WindowRect {
            x: rect.left().round() as i32,
            y: rect.top().round() as i32,
            w: rect.width().round() as i32,
            h: rect.height().round() as i32,
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dom_id;
        None
    }
}

pub(super) fn publish_taskbar_height(height: i32) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        if let Err(err) = root
            .style()
            .set_property(TASKBAR_HEIGHT_VAR, &format!("{height}px"))
        {
            logging::warn!("failed to publish {TASKBAR_HEIGHT_VAR}: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (height, TASKBAR_HEIGHT_VAR);
}

pub(super) fn set_text_selection(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|doc| doc.body()) else {
            return;
        };
        let style = body.style();
        let result = if enabled {
            style.remove_property("user-select").map(|_| ())
        } else {
            style.set_property("user-select", "none")
        };
        if let Err(err) = result {
            logging::warn!("failed to toggle text selection: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = enabled;
}

pub(super) fn show_toast(message: &str, duration_ms: i32) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(doc) = document() else {
            return;
        };
        let (Some(body), Ok(toast)) = (doc.body(), doc.create_element("div")) else {
            return;
        };
        toast.set_class_name(TOAST_CLASS);
        toast.set_text_content(Some(message));
        if body.append_child(&toast).is_err() {
            return;
        }
        after_timeout(duration_ms, move || toast.remove());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (message, duration_ms, TOAST_CLASS);
}

pub(super) fn set_theme_accent(accent: Option<ThemeAccent>) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = document().and_then(|doc| doc.document_element()) else {
            return;
        };
        let classes = root.class_list();
        for known in ThemeAccent::ALL {
            let _ = classes.remove_1(known.css_class());
        }
        if let Some(accent) = accent {
            let _ = classes.add_1(accent.css_class());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = accent;
}

pub(super) fn clear_effects() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(nodes) = document().and_then(|doc| doc.query_selector_all(OVERLAY_SELECTOR).ok())
        else {
            return;
        };
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                element.remove();
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = OVERLAY_SELECTOR;
}

/// Adds `class` to the body and removes it after `duration_ms`.
pub(super) fn flash_body_class(class: &'static str, duration_ms: i32) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|doc| doc.body()) else {
            return;
        };
        if body.class_list().add_1(class).is_err() {
            return;
        }
        after_timeout(duration_ms, move || {
            let _ = body.class_list().remove_1(class);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (class, duration_ms);
}
