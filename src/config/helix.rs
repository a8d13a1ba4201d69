use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HelikaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
/// Helix geometry, scroll mapping, and anchor index tables.
pub struct HelixOptions {
    /// Strand radius from the helix axis.
    #[schemars(title = "Radius", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub radius: f32,
    /// Vertical rise per base pair.
    #[schemars(title = "Rise", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rise_per_pair: f32,
    /// Twist per base pair in radians.
    #[schemars(title = "Twist", range(min = 0.05, max = 1.5), extend("step" = 0.01))]
    pub twist_per_pair: f32,
    /// Number of base pairs in the lattice.
    #[schemars(title = "Base Pairs", range(min = 10, max = 400))]
    pub pair_count: usize,
    /// Full rotations swept across the scroll range.
    #[schemars(title = "Scroll Turns", range(min = 0.5, max = 8.0), extend("step" = 0.5))]
    pub scroll_turns: f32,
    /// Base pair tracked for each content section, indexed by section.
    #[schemars(skip)]
    pub target_indices: Vec<usize>,
    /// Base pair tracked for each overlay tile, indexed by tile.
    #[schemars(skip)]
    pub tile_anchors: Vec<usize>,
}

impl Default for HelixOptions {
    fn default() -> Self {
        Self {
            radius: 2.5,
            rise_per_pair: 0.8,
            twist_per_pair: std::f32::consts::FRAC_PI_8,
            pair_count: 150,
            scroll_turns: 3.0,
            target_indices: vec![15, 40, 65, 90],
            tile_anchors: vec![10, 30, 40, 60, 70, 85, 95],
        }
    }
}

impl HelixOptions {
    /// Total height of the lattice, centered on the origin when built.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.pair_count as f32 * self.rise_per_pair
    }

    /// Reject geometry the lattice and anchor math cannot handle.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::InvalidConfig`] for a zero pair count,
    /// non-positive dimensions, or an anchor index past the pair count.
    pub fn validate(&self) -> Result<(), HelikaError> {
        if self.pair_count == 0 {
            return Err(HelikaError::InvalidConfig(
                "helix.pair_count must be at least 1".to_owned(),
            ));
        }
        if self.radius <= 0.0 || self.rise_per_pair <= 0.0 {
            return Err(HelikaError::InvalidConfig(format!(
                "helix radius ({}) and rise ({}) must be positive",
                self.radius, self.rise_per_pair
            )));
        }
        for &index in &self.target_indices {
            if index >= self.pair_count {
                return Err(HelikaError::InvalidConfig(format!(
                    "helix.target_indices entry {index} exceeds pair count {}",
                    self.pair_count
                )));
            }
        }
        for &index in &self.tile_anchors {
            if index >= self.pair_count {
                return Err(HelikaError::InvalidConfig(format!(
                    "helix.tile_anchors entry {index} exceeds pair count {}",
                    self.pair_count
                )));
            }
        }
        Ok(())
    }
}
