//! Perspective camera and the phase-driven rig that eases it between the
//! loading, landing, and explore framings.

use glam::{Mat4, Vec3};

use crate::config::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

/// Which framing the camera is easing toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    /// Intro loading view, pulled in close.
    Loading,
    /// Landing view once loading finishes.
    Landing,
    /// Scroll-driven explore view.
    Exploring,
}

impl CameraPhase {
    /// Phase implied by the store's loading and exploring flags.
    #[must_use]
    pub const fn resolve(is_loading: bool, is_exploring: bool) -> Self {
        if is_loading {
            Self::Loading
        } else if is_exploring {
            Self::Exploring
        } else {
            Self::Landing
        }
    }
}

/// Eases the camera along the view axis toward the distance each phase
/// asks for. The camera always looks at the origin; phases only pull it
/// closer or push it back.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: Camera,
    options: CameraOptions,
}

impl CameraRig {
    /// Rig starting at the landing framing.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, options.landing_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            camera,
            options: options.clone(),
        }
    }

    /// Distance from the origin a phase frames the scene at.
    #[must_use]
    pub const fn distance_for(&self, phase: CameraPhase) -> f32 {
        match phase {
            CameraPhase::Loading => self.options.loading_distance,
            CameraPhase::Landing => self.options.landing_distance,
            CameraPhase::Exploring => self.options.explore_distance,
        }
    }

    /// Move the eye a smoothing step toward the phase's framing. Called
    /// once per rendered frame.
    pub fn advance(&mut self, phase: CameraPhase) {
        let goal = Vec3::new(0.0, 0.0, self.distance_for(phase));
        self.camera.eye = self.camera.eye.lerp(goal, self.options.smoothing);
    }

    /// Update the projection aspect after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    /// The rig's camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn phase_resolution_prefers_loading() {
        assert_eq!(CameraPhase::resolve(true, true), CameraPhase::Loading);
        assert_eq!(CameraPhase::resolve(false, true), CameraPhase::Exploring);
        assert_eq!(CameraPhase::resolve(false, false), CameraPhase::Landing);
    }

    #[test]
    fn rig_eases_toward_phase_distance() {
        let options = CameraOptions::default();
        let mut rig = CameraRig::new(&options, 16.0 / 9.0);
        assert_eq!(rig.camera().eye.z, 15.0);

        // One smoothing step toward the loading framing covers 5% of the
        // remaining travel.
        rig.advance(CameraPhase::Loading);
        let expected = 15.0 + (10.0 - 15.0) * 0.05;
        assert!((rig.camera().eye.z - expected).abs() < EPSILON);

        for _ in 0..400 {
            rig.advance(CameraPhase::Loading);
        }
        assert!((rig.camera().eye.z - 10.0).abs() < 1e-2);
    }

    #[test]
    fn rig_returns_to_landing_distance() {
        let options = CameraOptions::default();
        let mut rig = CameraRig::new(&options, 1.0);
        for _ in 0..400 {
            rig.advance(CameraPhase::Loading);
        }
        for _ in 0..400 {
            rig.advance(CameraPhase::Landing);
        }
        assert!((rig.camera().eye.z - 15.0).abs() < 1e-2);
    }

    #[test]
    fn aspect_updates_ignore_degenerate_values() {
        let options = CameraOptions::default();
        let mut rig = CameraRig::new(&options, 2.0);
        rig.set_aspect(0.0);
        assert_eq!(rig.camera().aspect, 2.0);
        rig.set_aspect(1.5);
        assert_eq!(rig.camera().aspect, 1.5);
    }

    #[test]
    fn view_projection_centers_the_origin() {
        let options = CameraOptions::default();
        let rig = CameraRig::new(&options, 16.0 / 9.0);
        let clip = rig.camera().build_matrix()
            * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!(ndc_x.abs() < EPSILON);
        assert!(ndc_y.abs() < EPSILON);
    }
}
