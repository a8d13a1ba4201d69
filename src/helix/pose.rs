use glam::{Quat, Vec3};

use crate::config::{HelixOptions, MotionOptions};
use crate::util::easing::{damp, lerp};

/// Rigid transform of the whole helix group: yaw about the vertical axis
/// plus vertical travel. This is the only transform the scroll applies;
/// atoms never move relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HelixPose {
    /// Rotation about the Y axis in radians.
    pub rotation_y: f32,
    /// Vertical offset of the group origin.
    pub position_y: f32,
}

impl HelixPose {
    /// Map a lattice-local point into world space under this pose.
    #[inline]
    #[must_use]
    pub fn apply(self, local: Vec3) -> Vec3 {
        Quat::from_rotation_y(self.rotation_y) * local
            + Vec3::new(0.0, self.position_y, 0.0)
    }
}

/// Rotation while exploring: scroll position sweeps the configured number
/// of full turns (negative, so scrolling down turns the helix clockwise
/// from above), with a slow time-based drift layered on top so the
/// structure never sits perfectly still between scroll samples.
#[inline]
#[must_use]
pub fn scroll_rotation(
    progress: f32,
    elapsed: f32,
    helix: &HelixOptions,
    motion: &MotionOptions,
) -> f32 {
    -(progress * std::f32::consts::TAU * helix.scroll_turns)
        + elapsed * motion.ambient_drift_rate
}

/// Vertical travel while exploring: progress 0 holds the top of the
/// lattice in view, progress 1 the bottom. The swept range covers a fixed
/// fraction of the total lattice height so both ends stay on screen.
#[inline]
#[must_use]
pub fn scroll_travel(
    progress: f32,
    helix: &HelixOptions,
    motion: &MotionOptions,
) -> f32 {
    let range = motion.travel_factor * helix.total_height() / 2.0;
    lerp(range, -range, progress)
}

/// Slow display rotation before the user starts exploring.
#[inline]
#[must_use]
pub fn idle_rotation(elapsed: f32, motion: &MotionOptions) -> f32 {
    elapsed * motion.idle_spin_rate
}

/// Stateful per-frame pose driver.
///
/// Exploring poses are pure functions of progress and elapsed time; the
/// driver only exists so the idle path can settle the vertical offset back
/// to rest over several frames instead of snapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseDriver {
    pose: HelixPose,
}

impl PoseDriver {
    /// Driver starting at the rest pose.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pose computed by the most recent `advance` call.
    #[must_use]
    pub fn current(self) -> HelixPose {
        self.pose
    }

    /// Compute the pose for this frame and retain it for pointer picking
    /// between frames.
    pub fn advance(
        &mut self,
        progress: f32,
        is_exploring: bool,
        elapsed: f32,
        helix: &HelixOptions,
        motion: &MotionOptions,
    ) -> HelixPose {
        if is_exploring {
            self.pose.rotation_y =
                scroll_rotation(progress, elapsed, helix, motion);
            self.pose.position_y = scroll_travel(progress, helix, motion);
        } else {
            self.pose.rotation_y = idle_rotation(elapsed, motion);
            self.pose.position_y =
                damp(self.pose.position_y, 0.0, motion.settle_smoothing);
        }
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn options() -> (HelixOptions, MotionOptions) {
        (HelixOptions::default(), MotionOptions::default())
    }

    #[test]
    fn scroll_rotation_sweeps_negative_turns() {
        let (helix, motion) = options();
        // Full scroll with three turns configured and no drift.
        let result = scroll_rotation(1.0, 0.0, &helix, &motion);
        let expected = -3.0 * std::f32::consts::TAU;
        assert!(
            (result - expected).abs() < EPSILON,
            "Expected {expected}, got {result}"
        );
    }

    #[test]
    fn scroll_rotation_adds_time_drift() {
        let (helix, motion) = options();
        let still = scroll_rotation(0.5, 0.0, &helix, &motion);
        let later = scroll_rotation(0.5, 10.0, &helix, &motion);
        assert!(
            (later - still - 10.0 * motion.ambient_drift_rate).abs()
                < EPSILON
        );
    }

    #[test]
    fn scroll_travel_hits_extremes_exactly() {
        let (helix, motion) = options();
        let range = motion.travel_factor * helix.total_height() / 2.0;
        assert_eq!(scroll_travel(0.0, &helix, &motion), range);
        assert_eq!(scroll_travel(1.0, &helix, &motion), -range);
    }

    #[test]
    fn travel_range_covers_most_of_the_lattice() {
        let (helix, motion) = options();
        // 150 pairs at 0.8 rise, 85% swept: half-range is 51.
        let top = scroll_travel(0.0, &helix, &motion);
        assert!((top - 51.0).abs() < EPSILON, "Expected 51.0, got {top}");
    }

    #[test]
    fn idle_rotation_is_linear_in_time() {
        let (_, motion) = options();
        assert!((idle_rotation(12.0, &motion) - 1.2).abs() < EPSILON);
    }

    #[test]
    fn driver_settles_vertical_offset_when_idle() {
        let (helix, motion) = options();
        let mut driver = PoseDriver::new();
        // Scroll deep, then leave explore mode.
        let _ = driver.advance(1.0, true, 0.0, &helix, &motion);
        let deep = driver.current().position_y;
        assert!(deep < 0.0);

        let mut previous = deep;
        for _ in 0..10 {
            let pose = driver.advance(0.0, false, 0.0, &helix, &motion);
            assert!(pose.position_y > previous);
            previous = pose.position_y;
        }
        for _ in 0..200 {
            let _ = driver.advance(0.0, false, 0.0, &helix, &motion);
        }
        assert!(driver.current().position_y.abs() < 1e-2);
    }

    #[test]
    fn pose_apply_rotates_then_offsets() {
        let pose = HelixPose {
            rotation_y: std::f32::consts::FRAC_PI_2,
            position_y: 3.0,
        };
        let world = pose.apply(Vec3::new(1.0, 0.0, 0.0));
        // A quarter turn about Y sends +X to -Z.
        assert!(world.x.abs() < EPSILON);
        assert!((world.y - 3.0).abs() < EPSILON);
        assert!((world.z + 1.0).abs() < EPSILON);
    }

    #[test]
    fn same_inputs_give_identical_poses() {
        let (helix, motion) = options();
        let a = scroll_rotation(0.37, 4.2, &helix, &motion);
        let b = scroll_rotation(0.37, 4.2, &helix, &motion);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
