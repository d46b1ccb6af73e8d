//! Axis-aligned bounding boxes and the overlap test used by every collision
//! phase of the simulation step.

/// A rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle centred on `(cx, cy)` extending `half_w` / `half_h` each way.
    pub fn centered(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            x: cx - half_w,
            y: cy - half_h,
            w: half_w * 2.0,
            h: half_h * 2.0,
        }
    }
}

/// True iff `a` and `b` overlap on both axes.
///
/// All four comparisons are strict, so rectangles that only share an edge
/// do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
