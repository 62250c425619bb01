//! Pointer-driven drag and resize sessions.
//!
//! A session is created on pointer-down over a titlebar (drag) or resize handle (resize), applied
//! on every pointer move, and dropped on pointer-up. Sessions never live on the window record.

use std::collections::BTreeMap;

use crate::model::{CssValue, PointerPosition, WindowGeometry, WindowId, WindowRect};

/// Closest a dragged window's top-left corner may come to the viewport origin.
pub const DRAG_EDGE_MARGIN_PX: i32 = 8;
/// Minimum managed window width during a resize.
pub const MIN_WINDOW_WIDTH: i32 = 560;
/// Minimum managed window height during a resize.
pub const MIN_WINDOW_HEIGHT: i32 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

impl DragSession {
    pub fn begin(window_id: WindowId, pointer: PointerPosition, rendered: WindowRect) -> Self {
        Self {
            window_id,
            pointer_start: pointer,
            rect_start: rendered,
        }
    }

    /// Pointer position relative to the window's top-left corner at session start.
    pub fn offset(&self) -> PointerPosition {
        PointerPosition {
            x: self.pointer_start.x - self.rect_start.x,
            y: self.pointer_start.y - self.rect_start.y,
        }
    }

    pub fn apply(&self, pointer: PointerPosition, margin: i32, geometry: &mut WindowGeometry) {
        let offset = self.offset();
        geometry.transform = Some(CssValue::None);
        geometry.left = Some(CssValue::Px((pointer.x - offset.x).max(margin)));
        geometry.top = Some(CssValue::Px((pointer.y - offset.y).max(margin)));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

impl ResizeSession {
    pub fn begin(window_id: WindowId, pointer: PointerPosition, rendered: WindowRect) -> Self {
        Self {
            window_id,
            pointer_start: pointer,
            rect_start: rendered,
        }
    }

    pub fn apply(
        &self,
        pointer: PointerPosition,
        min_size: (i32, i32),
        geometry: &mut WindowGeometry,
    ) {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        geometry.width = Some(CssValue::Px((self.rect_start.w + dx).max(min_size.0)));
        geometry.height = Some(CssValue::Px((self.rect_start.h + dy).max(min_size.1)));
    }
}

/// Active sessions keyed by window. Presence in a map means the session is live.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: BTreeMap<WindowId, DragSession>,
    pub resizing: BTreeMap<WindowId, ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_empty() && self.resizing.is_empty()
    }

    pub fn is_dragging(&self, window_id: WindowId) -> bool {
        self.dragging.contains_key(&window_id)
    }

    /// Drops every session attached to `window_id`.
    pub fn end_for_window(&mut self, window_id: WindowId) {
        self.dragging.remove(&window_id);
        self.resizing.remove(&window_id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RECT: WindowRect = WindowRect {
        x: 100,
        y: 80,
        w: 640,
        h: 420,
    };

    #[test]
    fn drag_keeps_pointer_offset_and_clears_transform() {
        let session = DragSession::begin(WindowId(1), PointerPosition { x: 130, y: 90 }, RECT);
        let mut geometry = WindowGeometry {
            transform: Some(CssValue::Raw("translate(-50%, -50%)".to_string())),
            ..WindowGeometry::default()
        };

        session.apply(PointerPosition { x: 230, y: 190 }, 8, &mut geometry);

        assert_eq!(geometry.left, Some(CssValue::Px(200)));
        assert_eq!(geometry.top, Some(CssValue::Px(180)));
        assert_eq!(geometry.transform, Some(CssValue::None));
    }

    #[test]
    fn drag_clamps_top_left_to_margin() {
        let session = DragSession::begin(WindowId(1), PointerPosition { x: 130, y: 90 }, RECT);
        let mut geometry = WindowGeometry::default();

        session.apply(PointerPosition { x: -500, y: 2 }, 8, &mut geometry);

        assert_eq!(geometry.left, Some(CssValue::Px(8)));
        assert_eq!(geometry.top, Some(CssValue::Px(8)));
    }

    #[test]
    fn resize_never_drops_below_minimum() {
        let session = ResizeSession::begin(WindowId(1), PointerPosition { x: 740, y: 500 }, RECT);
        let mut geometry = WindowGeometry::default();

        session.apply(PointerPosition { x: 0, y: 0 }, (560, 360), &mut geometry);
        assert_eq!(geometry.width, Some(CssValue::Px(560)));
        assert_eq!(geometry.height, Some(CssValue::Px(360)));

        session.apply(PointerPosition { x: 1040, y: 700 }, (560, 360), &mut geometry);
        assert_eq!(geometry.width, Some(CssValue::Px(940)));
        assert_eq!(geometry.height, Some(CssValue::Px(620)));
    }
}
