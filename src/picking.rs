//! Pointer picking against the helix lattice.
//!
//! A pointer position in window pixels is unprojected into a world-space
//! ray, intersected against every atom's hitbox sphere under the current
//! pose, and the nearest hit is resolved through the hotspot table to a
//! content section. Hitboxes are much larger than the rendered atoms so
//! hotspots are comfortable pointer targets.

use glam::{Mat4, Vec3};

use crate::helix::hotspot::HotspotTable;
use crate::helix::lattice::{HelixLattice, HITBOX_RADIUS};
use crate::helix::pose::HelixPose;
use crate::projection::{PixelPosition, Viewport};

/// World-space ray through a window pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    /// Ray origin on the near plane.
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

/// Nearest atom hit by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Flat instance index of the hit atom.
    pub instance: usize,
    /// Base pair owning the hit atom.
    pub unit: usize,
    /// Ray parameter at the hit, for nearest-hit ordering.
    pub distance: f32,
}

/// Unproject a window pixel into a world-space ray.
///
/// Returns `None` for a degenerate viewport or a non-invertible matrix so
/// pointer handling silently skips the event instead of picking against
/// garbage.
#[must_use]
pub fn pick_ray(
    pixel: PixelPosition,
    view_proj: &Mat4,
    viewport: Viewport,
) -> Option<PickRay> {
    if viewport.is_empty() {
        return None;
    }
    let inverse = view_proj.inverse();
    if !inverse.is_finite() {
        return None;
    }
    let ndc_x = pixel.x / viewport.width * 2.0 - 1.0;
    let ndc_y = 1.0 - pixel.y / viewport.height * 2.0;
    // Depth 0 is the near plane, 1 the far plane ([0,1] depth range).
    let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
    let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    let direction = (far - near).try_normalize()?;
    Some(PickRay {
        origin: near,
        direction,
    })
}

/// Nearest non-negative ray parameter where the ray enters a sphere.
#[must_use]
pub fn ray_sphere_intersection(
    ray: &PickRay,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let entry = -b - sqrt_d;
    if entry >= 0.0 {
        return Some(entry);
    }
    // A ray starting inside the sphere still counts, at the exit point.
    let exit = -b + sqrt_d;
    (exit >= 0.0).then_some(exit)
}

/// Intersect a pick ray against every atom hitbox under the current pose
/// and return the nearest hit.
#[must_use]
pub fn pick_atom(
    ray: &PickRay,
    lattice: &HelixLattice,
    pose: HelixPose,
) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (instance, atom) in lattice.atoms().iter().enumerate() {
        let center = pose.apply(atom.position);
        let radius = HITBOX_RADIUS * atom.scale;
        if let Some(distance) = ray_sphere_intersection(ray, center, radius)
        {
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(PickHit {
                    instance,
                    unit: atom.unit,
                    distance,
                });
            }
        }
    }
    best
}

/// Resolve a hit to the content section whose hotspot contains it, if any.
#[must_use]
pub fn resolve_section(
    hit: Option<&PickHit>,
    hotspots: &HotspotTable,
) -> Option<usize> {
    hit.and_then(|h| hotspots.section_for_unit(h.unit))
}
