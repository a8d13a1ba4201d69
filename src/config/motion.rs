use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Ambient motion and hotspot pulse parameters.
pub struct MotionOptions {
    /// Idle rotation speed in radians per second before exploring starts.
    #[schemars(title = "Idle Spin", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub idle_spin_rate: f32,
    /// Slow rotation drift layered on top of scroll-driven rotation.
    #[schemars(title = "Ambient Drift", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient_drift_rate: f32,
    /// Per-frame fraction of remaining travel when settling back to rest.
    #[schemars(title = "Settle", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub settle_smoothing: f32,
    /// Fraction of total lattice height swept by the vertical travel.
    #[schemars(title = "Travel", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub travel_factor: f32,
    /// Baseline emissive intensity for hotspot atoms.
    #[schemars(title = "Pulse Base", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub pulse_base: f32,
    /// Hotspot pulse frequency in radians per second.
    #[schemars(title = "Pulse Rate", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub pulse_rate: f32,
    /// Hotspot pulse modulation depth around the baseline.
    #[schemars(title = "Pulse Depth", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub pulse_depth: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            idle_spin_rate: 0.1,
            ambient_drift_rate: 0.05,
            settle_smoothing: 0.1,
            travel_factor: 0.85,
            pulse_base: 0.5,
            pulse_rate: 3.0,
            pulse_depth: 0.3,
        }
    }
}
