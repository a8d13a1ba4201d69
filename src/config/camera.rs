use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HelikaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera rig and projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera distance from the origin during the loading phase.
    #[schemars(title = "Loading Distance", range(min = 2.0, max = 50.0), extend("step" = 0.5))]
    pub loading_distance: f32,
    /// Camera distance from the origin on the landing view.
    #[schemars(title = "Landing Distance", range(min = 2.0, max = 50.0), extend("step" = 0.5))]
    pub landing_distance: f32,
    /// Camera distance from the origin while exploring.
    #[schemars(title = "Explore Distance", range(min = 2.0, max = 50.0), extend("step" = 0.5))]
    pub explore_distance: f32,
    /// Per-frame fraction of remaining travel the camera covers.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Focal length in pixels for the approximate overlay projection.
    #[schemars(title = "Focal Length", range(min = 200.0, max = 3000.0), extend("step" = 50.0))]
    pub focal_length: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 0.1,
            zfar: 200.0,
            loading_distance: 10.0,
            landing_distance: 15.0,
            explore_distance: 15.0,
            smoothing: 0.05,
            focal_length: 1100.0,
        }
    }
}

impl CameraOptions {
    /// Reject parameters the projection math cannot handle.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::InvalidConfig`] for out-of-range field of
    /// view, clip planes, phase distances, smoothing, or focal length.
    pub fn validate(&self) -> Result<(), HelikaError> {
        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(HelikaError::InvalidConfig(format!(
                "camera.fovy ({}) must be between 0 and 180 degrees",
                self.fovy
            )));
        }
        if self.znear <= 0.0 || self.zfar <= self.znear {
            return Err(HelikaError::InvalidConfig(format!(
                "camera clip planes invalid: znear {} zfar {}",
                self.znear, self.zfar
            )));
        }
        if self.loading_distance <= 0.0
            || self.landing_distance <= 0.0
            || self.explore_distance <= 0.0
        {
            return Err(HelikaError::InvalidConfig(
                "camera phase distances must be positive".to_owned(),
            ));
        }
        if self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(HelikaError::InvalidConfig(format!(
                "camera.smoothing ({}) must be in (0, 1]",
                self.smoothing
            )));
        }
        if self.focal_length <= 0.0 {
            return Err(HelikaError::InvalidConfig(format!(
                "camera.focal_length ({}) must be positive",
                self.focal_length
            )));
        }
        Ok(())
    }
}
