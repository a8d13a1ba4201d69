//! Wall-clock frame timing for the host animation loop.

use web_time::Instant;

/// Wall-clock source for the host animation loop.
///
/// Produces the monotonically increasing elapsed-seconds value the
/// transform functions take as an explicit parameter, plus per-frame
/// deltas. Uses [`web_time::Instant`] so the same build runs on native
/// and WASM targets.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Construction timestamp; elapsed time is measured from here.
    origin: Instant,
    /// Last `tick()` timestamp.
    last_frame: Instant,
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last_frame: now,
        }
    }

    /// Seconds since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }

    /// Seconds since the previous `tick()` call (or construction for the
    /// first call). Call once per frame.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
