/// Largest frame delta accepted by [`FrameClock::advance`], in seconds.
/// A backgrounded tab can report a multi-second delta on resume.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Monotonic elapsed-time accumulator.
/// Turns variable frame deltas into the absolute time that channels are sampled at.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Milliseconds since the clock started.
    elapsed_ms: f64,
    /// Number of frames advanced.
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's delta (seconds). Negative or non-finite deltas count as zero,
    /// so elapsed time never runs backwards. Returns the new elapsed time in ms.
    pub fn advance(&mut self, frame_dt: f32) -> f64 {
        let dt = if frame_dt.is_finite() { frame_dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.elapsed_ms += dt as f64 * 1000.0;
        self.frames += 1;
        self.elapsed_ms
    }

    /// Milliseconds since start.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Frames advanced since start.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

/// A one-time timer that latches once its delay has passed.
/// Further polls are no-ops; there is nothing to cancel or clean up.
#[derive(Debug, Clone)]
pub struct OneShot {
    delay_ms: f64,
    fired: bool,
}

impl OneShot {
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, fired: false }
    }

    /// Check against the current elapsed time. Returns whether the delay has passed.
    pub fn poll(&mut self, elapsed_ms: f64) -> bool {
        if !self.fired && elapsed_ms >= self.delay_ms {
            self.fired = true;
        }
        self.fired
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}
