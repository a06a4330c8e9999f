// extensions/keyframes.rs
//
// Piecewise-linear keyframe tracks spanning one loop period.

use super::easing::lerp;

/// A single `(time offset, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Offset from the start of the period, in milliseconds.
    pub at_ms: f64,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(value: f32, at_ms: f64) -> Self {
        Self { at_ms, value }
    }
}

/// Ordered keyframes over one period, linearly interpolated between neighbours.
///
/// Before the first keyframe the track holds the first value; after the last
/// keyframe it holds the last value until the period wraps.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    frames: Vec<Keyframe>,
    period_ms: f64,
}

impl KeyframeTrack {
    /// Build a track from keyframes sorted by offset.
    ///
    /// # Panics
    ///
    /// On an empty list, a non-positive period, offsets outside `[0, period]`,
    /// or offsets that do not strictly increase. Tracks are authored as
    /// constants, so these are programming errors.
    pub fn new(period_ms: f64, frames: Vec<Keyframe>) -> Self {
        assert!(period_ms > 0.0, "keyframe track period must be positive, got {period_ms}");
        assert!(!frames.is_empty(), "keyframe track needs at least one keyframe");
        for pair in frames.windows(2) {
            assert!(
                pair[1].at_ms > pair[0].at_ms,
                "keyframe offsets must strictly increase ({} then {})",
                pair[0].at_ms,
                pair[1].at_ms
            );
        }
        for frame in &frames {
            assert!(
                (0.0..=period_ms).contains(&frame.at_ms),
                "keyframe at {} ms lies outside the {} ms period",
                frame.at_ms,
                period_ms
            );
        }
        Self { frames, period_ms }
    }

    /// Build a track from `(value, offset_ms)` pairs.
    pub fn from_pairs(period_ms: f64, pairs: &[(f32, f64)]) -> Self {
        let frames = pairs.iter().map(|&(value, at)| Keyframe::new(value, at)).collect();
        Self::new(period_ms, frames)
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    /// Value at the start of the period.
    pub fn initial_value(&self) -> f32 {
        self.sample(0.0)
    }

    /// Sample at an offset inside one period (not wrapped).
    pub fn sample(&self, local_ms: f64) -> f32 {
        let first = self.frames[0];
        let last = self.frames[self.frames.len() - 1];
        if local_ms <= first.at_ms {
            return first.value;
        }
        if local_ms >= last.at_ms {
            return last.value;
        }

        match self.frames.windows(2).find(|pair| local_ms < pair[1].at_ms) {
            Some(pair) => {
                let (a, b) = (pair[0], pair[1]);
                let t = ((local_ms - a.at_ms) / (b.at_ms - a.at_ms)) as f32;
                lerp(a.value, b.value, t)
            }
            None => last.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> KeyframeTrack {
        KeyframeTrack::from_pairs(1000.0, &[(0.0, 0.0), (0.0, 200.0), (1.0, 600.0), (1.0, 1000.0)])
    }

    #[test]
    fn holds_and_interpolates() {
        let track = ramp();
        assert_eq!(track.sample(0.0), 0.0);
        assert_eq!(track.sample(150.0), 0.0);
        assert!((track.sample(400.0) - 0.5).abs() < 1e-6);
        assert_eq!(track.sample(800.0), 1.0);
    }

    #[test]
    fn clamps_outside_keyframes() {
        let track = KeyframeTrack::from_pairs(1000.0, &[(0.3, 100.0), (0.7, 900.0)]);
        assert_eq!(track.sample(0.0), 0.3);
        assert_eq!(track.sample(50.0), 0.3);
        assert_eq!(track.sample(950.0), 0.7);
        assert_eq!(track.initial_value(), 0.3);
    }

    #[test]
    fn single_keyframe_is_constant() {
        let track = KeyframeTrack::from_pairs(500.0, &[(0.25, 0.0)]);
        assert_eq!(track.sample(0.0), 0.25);
        assert_eq!(track.sample(499.0), 0.25);
    }

    #[test]
    #[should_panic(expected = "at least one keyframe")]
    fn empty_track_panics() {
        KeyframeTrack::new(1000.0, Vec::new());
    }

    #[test]
    #[should_panic(expected = "strictly increase")]
    fn unordered_track_panics() {
        KeyframeTrack::from_pairs(1000.0, &[(0.0, 500.0), (1.0, 100.0)]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn keyframe_past_period_panics() {
        KeyframeTrack::from_pairs(1000.0, &[(0.0, 0.0), (1.0, 1500.0)]);
    }
}
