use desktop_runtime::{
    commands::{COMMANDS_WINDOW_KEY, OPENED_WINDOW_ICON},
    components::{HOME_WINDOW_ICON, HOME_WINDOW_KEY, HOME_WINDOW_LABEL},
    use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell,
};
use leptos::*;
use leptos_meta::*;

/// Window a page load asks for through the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LaunchTarget {
    Home,
    Commands,
}

impl LaunchTarget {
    fn from_hash(hash: &str) -> Option<Self> {
        match hash.trim_start_matches('#') {
            "home" => Some(Self::Home),
            "help" => Some(Self::Commands),
            _ => None,
        }
    }

    fn open_action(self) -> DesktopAction {
        let (key, label, icon) = match self {
            Self::Home => (HOME_WINDOW_KEY, HOME_WINDOW_LABEL, HOME_WINDOW_ICON),
            Self::Commands => (COMMANDS_WINDOW_KEY, "Commands.txt", OPENED_WINDOW_ICON),
        };
        DesktopAction::OpenWindow {
            key: key.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// URL surface the launcher reads the fragment from and clears it on.
trait LaunchLocation {
    fn hash(&self) -> String;
    /// Replaces the current history entry with the bare path, dropping the fragment.
    fn clear_fragment(&self);
}

struct BrowserLocation;

impl LaunchLocation for BrowserLocation {
    fn hash(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.location().hash().ok())
                .unwrap_or_default();
        }

        #[cfg(not(target_arch = "wasm32"))]
        String::new()
    }

    fn clear_fragment(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(path) = window.location().pathname() else {
                return;
            };
            let replaced = window.history().and_then(|history| {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
            });
            if let Err(err) = replaced {
                logging::warn!("failed to clear launch fragment: {err:?}");
            }
        }
    }
}

/// Reads the launch target from `location` and clears the fragment once it is consumed, so a
/// reload does not reopen the window.
fn take_launch_target(location: &impl LaunchLocation) -> Option<LaunchTarget> {
    let target = LaunchTarget::from_hash(&location.hash())?;
    location.clear_fragment();
    Some(target)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Mango OS" />
        <Meta name="description" content="A desktop-style portfolio with draggable windows and a taskbar." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
            <LaunchFromHash />
        </DesktopProvider>
    }
}

#[component]
fn LaunchFromHash() -> impl IntoView {
    let runtime = use_desktop_runtime();
    if let Some(target) = take_launch_target(&BrowserLocation) {
        logging::log!("opening {target:?} from url fragment");
        runtime.dispatch_action(target.open_action());
    }
}
