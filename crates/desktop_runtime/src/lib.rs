pub mod clock;
pub mod commands;
pub mod components;
pub mod config;
mod effect_executor;
pub mod focus;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod model;
pub mod pills;
pub mod reducer;
mod runtime_context;
pub mod tiles;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig, WindowManagerConfig};
pub use model::*;
pub use pills::PillSource;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::{ReleasedSessions, WindowManager};
