//! Pointer state handed to raycasters.

use glam::Vec2;

/// Snapshot of one pointer (mouse or touch) for a single raycast pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEventData {
    /// Identifies the pointer; mice and touches use distinct ids.
    pub pointer_id: i32,
    /// Pixel position from the top-left corner of the viewport.
    pub position: Vec2,
}

impl PointerEventData {
    /// Create pointer data for `pointer_id` at `position`.
    pub fn new(pointer_id: i32, position: Vec2) -> Self {
        Self {
            pointer_id,
            position,
        }
    }
}
