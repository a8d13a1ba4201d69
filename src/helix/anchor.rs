use glam::Vec3;

use super::hotspot::HotspotTable;
use super::lattice::{HelixLattice, ATOMS_PER_UNIT};
use super::pose::HelixPose;
use crate::config::HelixOptions;

/// World-space point the overlay anchor card tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    /// World position of the tracked strand atom under the current pose.
    pub position: Vec3,
    /// Render scale of the tracked atom (enlarged inside hotspots). The
    /// tracked point itself does not move with the scale; callers sizing
    /// a marker around it apply this multiplier.
    pub scale: f32,
}

/// Base pair the overlay should track right now.
///
/// The active tile's anchor wins when one is configured for it, then the
/// active section's target, then pair 0. Both tables may be shorter than
/// the tile or section lists; missing entries simply fall through.
#[must_use]
pub fn tracked_unit(
    active_tile: Option<usize>,
    active_section: usize,
    helix: &HelixOptions,
) -> usize {
    active_tile
        .and_then(|tile| helix.tile_anchors.get(tile).copied())
        .or_else(|| helix.target_indices.get(active_section).copied())
        .unwrap_or(0)
}

/// Resolve a base pair to the world-space point its strand atom occupies
/// under the current pose.
///
/// Out-of-range units resolve to pair 0 rather than failing; the anchor
/// must produce a position every frame.
#[must_use]
pub fn resolve_anchor(
    lattice: &HelixLattice,
    hotspots: &HotspotTable,
    unit: usize,
    pose: HelixPose,
) -> AnchorPoint {
    let unit = if unit < lattice.unit_count() { unit } else { 0 };
    let local = lattice
        .atom(unit * ATOMS_PER_UNIT)
        .map_or(Vec3::ZERO, |atom| atom.position);
    AnchorPoint {
        position: pose.apply(local),
        scale: hotspots.classify(unit).scale(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helix::hotspot::HOTSPOT_SCALE;

    const EPSILON: f32 = 1e-5;

    fn fixture() -> (HelixLattice, HotspotTable, HelixOptions) {
        let helix = HelixOptions::default();
        let lattice = HelixLattice::build(&helix);
        let hotspots = HotspotTable::derive(helix.pair_count, 5).unwrap();
        (lattice, hotspots, helix)
    }

    #[test]
    fn tile_anchor_wins_over_section_target() {
        let helix = HelixOptions::default();
        // Tile 2 is anchored at pair 40; section 0 targets pair 15.
        assert_eq!(tracked_unit(Some(2), 0, &helix), 40);
        // Without a tile the section target applies.
        assert_eq!(tracked_unit(None, 0, &helix), 15);
        assert_eq!(tracked_unit(None, 3, &helix), 90);
    }

    #[test]
    fn missing_table_entries_fall_through() {
        let helix = HelixOptions::default();
        // Tile index past the anchor table falls back to the section.
        assert_eq!(tracked_unit(Some(99), 1, &helix), 40);
        // Section index past the target table falls back to pair 0.
        assert_eq!(tracked_unit(Some(99), 4, &helix), 0);
        assert_eq!(tracked_unit(None, 99, &helix), 0);
    }

    #[test]
    fn anchor_tracks_the_strand_atom() {
        let (lattice, hotspots, _) = fixture();
        let pose = HelixPose::default();
        let anchor = resolve_anchor(&lattice, &hotspots, 15, pose);
        let expected = lattice.atom(15 * ATOMS_PER_UNIT).unwrap().position;
        assert!((anchor.position - expected).length() < EPSILON);
        assert_eq!(anchor.scale, 1.0);
    }

    #[test]
    fn anchor_follows_the_pose() {
        let (lattice, hotspots, _) = fixture();
        let pose = HelixPose {
            rotation_y: std::f32::consts::PI,
            position_y: -12.0,
        };
        let local = lattice.atom(0).unwrap().position;
        let anchor = resolve_anchor(&lattice, &hotspots, 0, pose);
        // Half a turn mirrors X and Z; the vertical travel shifts Y.
        assert!((anchor.position.x + local.x).abs() < EPSILON);
        assert!((anchor.position.y - (local.y - 12.0)).abs() < EPSILON);
        assert!((anchor.position.z + local.z).abs() < EPSILON);
    }

    #[test]
    fn hotspot_units_report_enlarged_scale() {
        let (lattice, hotspots, _) = fixture();
        let pose = HelixPose::default();
        let anchor = resolve_anchor(&lattice, &hotspots, 40, pose);
        assert_eq!(anchor.scale, HOTSPOT_SCALE);
        // The reported position stays at the atom center regardless.
        let expected = lattice.atom(40 * ATOMS_PER_UNIT).unwrap().position;
        assert!((anchor.position - expected).length() < EPSILON);
    }

    #[test]
    fn out_of_range_unit_resolves_to_pair_zero() {
        let (lattice, hotspots, _) = fixture();
        let pose = HelixPose::default();
        let anchor = resolve_anchor(&lattice, &hotspots, 500, pose);
        let expected = lattice.atom(0).unwrap().position;
        assert!((anchor.position - expected).length() < EPSILON);
    }

    #[test]
    fn resolution_is_deterministic() {
        let (lattice, hotspots, _) = fixture();
        let pose = HelixPose {
            rotation_y: 1.234,
            position_y: 5.678,
        };
        let a = resolve_anchor(&lattice, &hotspots, 65, pose);
        let b = resolve_anchor(&lattice, &hotspots, 65, pose);
        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        assert_eq!(a.position.z.to_bits(), b.position.z.to_bits());
    }
}
