//! World-space to screen-space projection.
//!
//! Two modes share one contract: world point in, pixel coordinates out,
//! with the window origin at the top-left. The precise mode runs a point
//! through the camera's view-projection matrix and is what anchor tracking
//! uses every frame. The approximate mode is a fixed-axis pinhole model for
//! overlay tiles that never need the full matrix; it trades accuracy for a
//! cheap closed form and also reports depth so hosts can stack cards.

use glam::{Mat4, Vec3};

/// Divisor turning a pinhole scale factor into an overlay card scale.
const CARD_SCALE_DIVISOR: f32 = 200.0;

/// Window size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Build a viewport from pixel dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is degenerate. Projections are skipped
    /// while the host window is zero-sized or not yet measured.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Width over height, used for the camera's perspective matrix.
    #[must_use]
    pub fn aspect(self) -> f32 {
        if self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }
}

/// A point in window pixels, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPosition {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
}

/// Result of the approximate pinhole projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxProjection {
    /// Projected window position.
    pub pixel: PixelPosition,
    /// Raw world-space depth of the input point, for card stacking.
    pub depth: f32,
    /// Pinhole scale factor applied to world units.
    pub scale: f32,
    /// Normalized scale for overlay cards, clamped to be non-negative.
    pub card_scale: f32,
}

/// Project a world point through a view-projection matrix into window
/// pixels.
///
/// Returns `None` when the viewport is degenerate or the point sits at or
/// behind the camera plane (non-positive clip w), so callers keep their
/// previous anchor rather than snapping to a garbage position.
#[must_use]
pub fn project_precise(
    world: Vec3,
    view_proj: &Mat4,
    viewport: Viewport,
) -> Option<PixelPosition> {
    if viewport.is_empty() {
        return None;
    }
    let clip = *view_proj * world.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Some(PixelPosition {
        x: (ndc_x * 0.5 + 0.5) * viewport.width,
        y: (1.0 - (ndc_y * 0.5 + 0.5)) * viewport.height,
    })
}

/// Project a world point with a fixed pinhole model: camera on the +Z axis
/// at `camera_distance`, looking at the origin.
///
/// The scale factor is `focal_length / (camera_distance - depth)` and is
/// clamped to zero when the point reaches or passes the camera plane, so
/// the result is always finite.
#[must_use]
pub fn project_approximate(
    world: Vec3,
    camera_distance: f32,
    focal_length: f32,
    viewport: Viewport,
) -> ApproxProjection {
    let dist = camera_distance - world.z;
    let scale = if dist > 0.0 { focal_length / dist } else { 0.0 };
    ApproxProjection {
        pixel: PixelPosition {
            x: world.x * scale + viewport.width / 2.0,
            y: viewport.height / 2.0 - world.y * scale,
        },
        depth: world.z,
        scale,
        card_scale: (scale / CARD_SCALE_DIVISOR).max(0.0),
    }
}
