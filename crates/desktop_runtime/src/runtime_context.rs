//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window manager signal, the runtime effect queue, and the host
//! bundle. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    config::{ConfigError, DesktopConfig},
    effect_executor,
    host::DesktopHostContext,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and layout queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive window-manager signal.
    pub manager: RwSignal<WindowManager>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// Builds the initial manager from `config`, falling back to an empty desktop on invalid layouts.
pub(crate) fn initial_manager(config: Result<DesktopConfig, ConfigError>) -> WindowManager {
    match config.and_then(|config| WindowManager::from_config(&config)) {
        Ok(manager) => manager,
        Err(err) => {
            logging::warn!("desktop layout rejected, starting empty: {err}");
            WindowManager::default()
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Layout to load instead of the bundled `desktop.toml`.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::default());
    let layout = config.map(Ok).unwrap_or_else(DesktopConfig::bundled);
    let manager = create_rw_signal(initial_manager(layout));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut next = manager.get_untracked();

        match reduce_desktop(&mut next, action) {
            Ok(new_effects) => {
                if manager.with_untracked(|current| *current != next) {
                    manager.set(next);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::debug_warn!("desktop action ignored: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        manager,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
