//! Maximize/restore geometry helpers.

use crate::model::{CssValue, PositionMode, WindowGeometry};

/// Taskbar height used when the live taskbar cannot be measured.
pub const DEFAULT_TASKBAR_HEIGHT_PX: i32 = 84;

/// Geometry occupying the full viewport above a taskbar of `taskbar_height` pixels.
pub fn maximized_geometry(taskbar_height: i32) -> WindowGeometry {
    WindowGeometry {
        position: Some(PositionMode::Fixed),
        left: Some(CssValue::Px(0)),
        top: Some(CssValue::Px(0)),
        right: Some(CssValue::Px(0)),
        bottom: Some(CssValue::Px(taskbar_height)),
        width: Some(CssValue::Vw(100)),
        height: Some(CssValue::ViewportHeightMinusPx(taskbar_height)),
        transform: Some(CssValue::None),
        margin: Some(CssValue::Px(0)),
        max_width: Some(CssValue::None),
        max_height: Some(CssValue::None),
    }
}

/// Geometry to reapply when leaving the maximized layout.
///
/// A missing snapshot restores to an otherwise empty geometry positioned `absolute`.
pub fn restored_geometry(saved: Option<WindowGeometry>) -> WindowGeometry {
    saved.unwrap_or_else(|| WindowGeometry {
        position: Some(PositionMode::Absolute),
        ..WindowGeometry::default()
    })
}
