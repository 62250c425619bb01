//! Reducer actions, side-effect intents, and dispatch into the window manager.

use thiserror::Error;

use crate::{
    commands::{CommandError, DesktopCommand, FxKind, ThemeAccent, OPENED_WINDOW_ICON},
    model::{Pill, PointerPosition, WindowControl, WindowId, WindowRect},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to drive the [`WindowManager`].
pub enum DesktopAction {
    /// Raise a window above all others.
    BringToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Make a window's pill the single active pill.
    SetActive {
        /// Window whose pill becomes active.
        window_id: WindowId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Taskbar pill click (restore, minimize, or focus).
    ToggleTaskbar {
        /// Window associated with the pill.
        window_id: WindowId,
    },
    /// Enter or leave the maximized layout. Also sent on titlebar double-click.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Live taskbar height, when the host could measure it.
        taskbar_height: Option<i32>,
    },
    /// Close a window permanently.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Register a taskbar pill for a window.
    RegisterPill {
        /// Window the pill controls.
        window_id: WindowId,
        /// Pill to register.
        pill: Pill,
    },
    /// Reveal a window by layout key, creating its pill on first open.
    OpenWindow {
        /// Layout key (DOM id) of the window.
        key: String,
        /// Pill label used when a pill must be created.
        label: String,
        /// Pill icon used when a pill must be created.
        icon: String,
    },
    /// Titlebar button press.
    WindowControl {
        /// Window owning the titlebar.
        window_id: WindowId,
        /// Control that was pressed.
        control: WindowControl,
        /// Live taskbar height, used by the maximize control.
        taskbar_height: Option<i32>,
    },
    /// Begin dragging a window by its titlebar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Rendered window rectangle at drag start.
        rect: WindowRect,
    },
    /// Begin resizing a window from its resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
        /// Rendered window rectangle at resize start.
        rect: WindowRect,
    },
    /// Document-level pointer move.
    PointerMoved {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Document-level pointer release; ends every session.
    PointerReleased,
    /// Run one line typed into the taskbar command box.
    RunCommand(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Expose the taskbar height used by the maximized layout to stylesheets.
    PublishTaskbarHeight(i32),
    /// Disable document text selection while a window is dragged.
    SuppressTextSelection,
    /// Re-enable document text selection.
    RestoreTextSelection,
    /// Show a transient toast.
    Toast(String),
    /// Replace the document accent class; `None` removes it.
    SetThemeAccent(Option<ThemeAccent>),
    /// Remove transient overlays and toasts.
    ClearEffects,
    /// Play a decorative page effect.
    Fx(FxKind),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action left the desktop unchanged.
pub enum ReducerError {
    /// The target window is missing or already closed.
    #[error("window {0} not found or closed")]
    WindowNotFound(WindowId),
    /// No window is declared under the layout key.
    #[error("no window with key `{0}`")]
    UnknownWindowKey(String),
    /// The titlebar does not expose the pressed control.
    #[error("window {window_id} has no {control:?} control")]
    ControlUnavailable {
        /// Window owning the titlebar.
        window_id: WindowId,
        /// Control that was pressed.
        control: WindowControl,
    },
    /// The window cannot be dragged or resized in its current state.
    #[error("window {0} refused the pointer session")]
    SessionRefused(WindowId),
}

type ControlHandler = fn(
    &mut WindowManager,
    WindowId,
    Option<i32>,
    &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError>;

/// Titlebar controls and the transition each one triggers.
const CONTROL_HANDLERS: [(WindowControl, ControlHandler); 3] = [
    (WindowControl::Minimize, minimize_control),
    (WindowControl::Maximize, maximize_control),
    (WindowControl::Close, close_control),
];

/// Applies a [`DesktopAction`] to the window manager and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action was a no-op because its target is missing, closed,
/// or not in a state that accepts it. The manager is left untouched in that case.
pub fn reduce_desktop(
    manager: &mut WindowManager,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::BringToFront { window_id } => {
            found(manager.bring_to_front(window_id), window_id)?;
        }
        DesktopAction::SetActive { window_id } => {
            found(manager.set_active(window_id), window_id)?;
        }
        DesktopAction::Minimize { window_id } => {
            found(manager.minimize(window_id), window_id)?;
        }
        DesktopAction::ToggleTaskbar { window_id } => {
            found(manager.toggle_from_taskbar(window_id), window_id)?;
        }
        DesktopAction::ToggleMaximize {
            window_id,
            taskbar_height,
        } => {
            maximize_control(manager, window_id, taskbar_height, &mut effects)?;
        }
        DesktopAction::Close { window_id } => {
            close_control(manager, window_id, None, &mut effects)?;
        }
        DesktopAction::RegisterPill { window_id, pill } => {
            found(manager.register_pill(window_id, pill), window_id)?;
        }
        DesktopAction::OpenWindow { key, label, icon } => {
            open_by_key(manager, &key, &label, &icon)?;
        }
        DesktopAction::WindowControl {
            window_id,
            control,
            taskbar_height,
        } => {
            let window = manager
                .window(window_id)
                .filter(|w| w.is_live())
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            if !window.has_control(control) {
                return Err(ReducerError::ControlUnavailable { window_id, control });
            }
            let handler = CONTROL_HANDLERS
                .iter()
                .find(|(entry, _)| *entry == control)
                .map(|(_, handler)| *handler)
                .ok_or(ReducerError::ControlUnavailable { window_id, control })?;
            handler(manager, window_id, taskbar_height, &mut effects)?;
        }
        DesktopAction::BeginDrag {
            window_id,
            pointer,
            rect,
        } => {
            if !manager.begin_drag(window_id, pointer, rect) {
                return Err(ReducerError::SessionRefused(window_id));
            }
            effects.push(RuntimeEffect::SuppressTextSelection);
        }
        DesktopAction::BeginResize {
            window_id,
            pointer,
            rect,
        } => {
            if !manager.begin_resize(window_id, pointer, rect) {
                return Err(ReducerError::SessionRefused(window_id));
            }
        }
        DesktopAction::PointerMoved { pointer } => {
            manager.pointer_moved(pointer);
        }
        DesktopAction::PointerReleased => {
            if manager.pointer_released().drags > 0 {
                effects.push(RuntimeEffect::RestoreTextSelection);
            }
        }
        DesktopAction::RunCommand(line) => run_command(manager, &line, &mut effects)?,
    }

    Ok(effects)
}

fn found(applied: bool, window_id: WindowId) -> Result<(), ReducerError> {
    if applied {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id))
    }
}

fn minimize_control(
    manager: &mut WindowManager,
    window_id: WindowId,
    _taskbar_height: Option<i32>,
    _effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    found(manager.minimize(window_id), window_id)
}

fn maximize_control(
    manager: &mut WindowManager,
    window_id: WindowId,
    taskbar_height: Option<i32>,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let published = manager
        .toggle_max(window_id, taskbar_height)
        .ok_or(ReducerError::WindowNotFound(window_id))?;
    effects.push(RuntimeEffect::PublishTaskbarHeight(published));
    Ok(())
}

fn close_control(
    manager: &mut WindowManager,
    window_id: WindowId,
    _taskbar_height: Option<i32>,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let was_dragging = manager.interaction().is_dragging(window_id);
    found(manager.close_win(window_id), window_id)?;
    if was_dragging && manager.interaction().dragging.is_empty() {
        effects.push(RuntimeEffect::RestoreTextSelection);
    }
    Ok(())
}

fn open_by_key(
    manager: &mut WindowManager,
    key: &str,
    label: &str,
    icon: &str,
) -> Result<(), ReducerError> {
    let window_id = manager
        .window_id(key)
        .ok_or_else(|| ReducerError::UnknownWindowKey(key.to_string()))?;
    found(manager.open_window(window_id, label, icon), window_id)
}

fn run_command(
    manager: &mut WindowManager,
    line: &str,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    match DesktopCommand::parse(line) {
        Ok(DesktopCommand::OpenWindow { key, label }) => {
            open_by_key(manager, key, label, OPENED_WINDOW_ICON)?;
        }
        Ok(DesktopCommand::Clear) => effects.push(RuntimeEffect::ClearEffects),
        Ok(DesktopCommand::Fx(kind)) => effects.push(RuntimeEffect::Fx(kind)),
        Ok(DesktopCommand::Toast(message)) => {
            effects.push(RuntimeEffect::Toast(message.to_string()));
        }
        Ok(DesktopCommand::MinimizeAll) => {
            manager.minimize_all();
        }
        Ok(DesktopCommand::SetAccent(accent)) => {
            effects.push(RuntimeEffect::SetThemeAccent(Some(accent)));
        }
        Err(err @ CommandError::ColorUsage) => {
            effects.push(RuntimeEffect::SetThemeAccent(None));
            effects.push(RuntimeEffect::Toast(err.to_string()));
        }
        Err(err) => effects.push(RuntimeEffect::Toast(err.to_string())),
    }
    Ok(())
}
