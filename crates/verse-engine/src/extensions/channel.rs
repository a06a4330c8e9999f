// extensions/channel.rs
//
// Looping animation channels: stateless replacements for running tweens.
//
// A tween advances `elapsed` every tick; a channel instead answers "what is the
// value at time t?" so every frame can be recomputed from the clock alone.
//
// Usage:
//   let twinkle = Channel::ping_pong(0.4, 1.0, 2000.0, Easing::LinearOutSlowIn);
//   let alpha = twinkle.value(clock.elapsed_ms());

use super::easing::{ease, Easing};
use super::keyframes::KeyframeTrack;

/// What happens when a channel reaches the end of its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLoop {
    /// Jump back to `from` and run again.
    #[default]
    Restart,
    /// Run back from `to` to `from` with the easing mirrored (ping-pong).
    PingPong,
}

/// One independently-looping scalar parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
    /// Eased run between two bounds.
    Tween {
        from: f32,
        to: f32,
        /// Duration of one run (one leg, for ping-pong).
        duration_ms: f64,
        easing: Easing,
        loop_mode: ChannelLoop,
    },
    /// Explicit keyframes spanning one period.
    Keyframes(KeyframeTrack),
}

impl Channel {
    /// Restarting run `from → to` every `duration_ms`.
    ///
    /// # Panics
    ///
    /// If `duration_ms` is not positive.
    pub fn restart(from: f32, to: f32, duration_ms: f64, easing: Easing) -> Self {
        assert!(duration_ms > 0.0, "channel duration must be positive, got {duration_ms}");
        Channel::Tween { from, to, duration_ms, easing, loop_mode: ChannelLoop::Restart }
    }

    /// Ping-pong `from → to → from`, each leg lasting `leg_ms`.
    ///
    /// # Panics
    ///
    /// If `leg_ms` is not positive.
    pub fn ping_pong(from: f32, to: f32, leg_ms: f64, easing: Easing) -> Self {
        assert!(leg_ms > 0.0, "channel duration must be positive, got {leg_ms}");
        Channel::Tween { from, to, duration_ms: leg_ms, easing, loop_mode: ChannelLoop::PingPong }
    }

    pub fn keyframes(track: KeyframeTrack) -> Self {
        Channel::Keyframes(track)
    }

    /// Length of one full loop in milliseconds.
    pub fn period_ms(&self) -> f64 {
        match self {
            Channel::Tween { duration_ms, loop_mode: ChannelLoop::Restart, .. } => *duration_ms,
            Channel::Tween { duration_ms, loop_mode: ChannelLoop::PingPong, .. } => *duration_ms * 2.0,
            Channel::Keyframes(track) => track.period_ms(),
        }
    }

    /// Value reported at `t = 0`.
    pub fn initial_value(&self) -> f32 {
        self.value(0.0)
    }

    /// Value at `t_ms` milliseconds after the channel started.
    ///
    /// Pure and total: negative (or NaN) times read as zero, and
    /// `value(t) == value(t + period_ms())`.
    pub fn value(&self, t_ms: f64) -> f32 {
        let local = t_ms.max(0.0).rem_euclid(self.period_ms());
        match self {
            Channel::Tween { from, to, duration_ms, easing, loop_mode } => {
                let d = *duration_ms;
                let t = match loop_mode {
                    ChannelLoop::Restart => local / d,
                    ChannelLoop::PingPong if local < d => local / d,
                    ChannelLoop::PingPong => (2.0 * d - local) / d,
                };
                ease(*from, *to, t as f32, *easing)
            }
            Channel::Keyframes(track) => track.sample(local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_runs_linearly_and_wraps() {
        let rotation = Channel::restart(0.0, 360.0, 40_000.0, Easing::Linear);
        assert_eq!(rotation.value(0.0), 0.0);
        assert!((rotation.value(10_000.0) - 90.0).abs() < 1e-4);
        assert!((rotation.value(39_999.0) - 359.991).abs() < 1e-2);
        assert_eq!(rotation.value(40_000.0), 0.0);
    }

    #[test]
    fn ping_pong_returns_to_start() {
        let twinkle = Channel::ping_pong(0.4, 1.0, 2000.0, Easing::LinearOutSlowIn);
        assert_eq!(twinkle.period_ms(), 4000.0);
        assert!((twinkle.value(0.0) - 0.4).abs() < 1e-6);
        assert!((twinkle.value(2000.0) - 1.0).abs() < 1e-6);
        assert!((twinkle.value(4000.0) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn ping_pong_mirrors_easing() {
        let wave = Channel::ping_pong(-5.0, 5.0, 2000.0, Easing::FastOutSlowIn);
        let out = wave.value(500.0);
        let back = wave.value(3500.0);
        assert!((out - back).abs() < 1e-4, "{} vs {}", out, back);
    }

    #[test]
    fn negative_time_reads_as_zero() {
        let wave = Channel::ping_pong(-5.0, 5.0, 2000.0, Easing::FastOutSlowIn);
        assert_eq!(wave.value(-250.0), wave.initial_value());
        assert_eq!(wave.value(f64::NAN), wave.initial_value());
    }

    #[test]
    fn loop_closure_holds_for_every_kind() {
        let channels = [
            Channel::restart(0.0, 360.0, 40_000.0, Easing::Linear),
            Channel::ping_pong(0.1, 0.4, 5000.0, Easing::LinearOutSlowIn),
            Channel::keyframes(KeyframeTrack::from_pairs(
                10_000.0,
                &[(0.0, 0.0), (0.0, 4000.0), (1.0, 7000.0), (1.0, 10_000.0)],
            )),
        ];
        for channel in &channels {
            let period = channel.period_ms();
            for step in 0..200 {
                let t = step as f64 * 137.0;
                assert_eq!(channel.value(t), channel.value(t + period), "t = {}", t);
            }
        }
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_duration_panics() {
        Channel::restart(0.0, 1.0, 0.0, Easing::Linear);
    }
}
