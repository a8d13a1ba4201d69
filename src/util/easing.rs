//! Interpolation and per-frame smoothing steps.
//!
//! Two tiny primitives shared by the pose driver and the camera rig. Both
//! are plain f32 math so transform code stays pure and unit-testable.

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// One exponential-smoothing step: move `factor` of the remaining distance
/// from `current` toward `target`.
///
/// The step size depends on how often it runs; callers apply it once per
/// rendered frame, matching the host animation loop.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, factor: f32) -> f32 {
    lerp(current, target, factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn lerp_midpoint() {
        let result = lerp(-4.0, 4.0, 0.5);
        assert!(result.abs() < EPSILON, "Expected 0.0, got {result}");
    }

    #[test]
    fn damp_converges_toward_target() {
        let mut value = 10.0;
        for _ in 0..100 {
            value = damp(value, 0.0, 0.1);
        }
        assert!(
            value.abs() < 1e-3,
            "Repeated damping should approach target, got {value}"
        );
    }

    #[test]
    fn damp_moves_fraction_of_remaining_distance() {
        let result = damp(0.0, 10.0, 0.1);
        assert!((result - 1.0).abs() < EPSILON, "Expected 1.0, got {result}");
    }

    #[test]
    fn damp_extreme_factors() {
        // factor 0 holds position, factor 1 lands exactly on target
        assert_eq!(damp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(damp(3.0, 7.0, 1.0), 7.0);
    }
}
