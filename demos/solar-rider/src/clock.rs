/// The show's animation channels and their per-frame snapshot.
///
/// Every value here is a pure function of elapsed time. `ClockState` is
/// recomputed from scratch each frame and handed to the renderer by value.

use std::sync::OnceLock;

use verse_engine::{Channel, Easing, KeyframeTrack};

/// Length of one launch loop.
pub const JUMP_PERIOD_MS: f64 = 20_000.0;

/// `(altitude, offset_ms)` keyframes of one launch loop.
pub const JUMP_KEYFRAMES: [(f32, f64); 9] = [
    (0.0, 0.0),
    (0.0, 2000.0),     // idle on the host
    (0.01, 2500.0),    // ignition
    (1.0, 9000.0),     // ascent
    (1.0, 10_000.0),   // peak hold
    (0.01, 15_500.0),  // descent
    (0.009, 18_000.0), // landed
    (0.0, 18_001.0),   // hidden
    (0.0, JUMP_PERIOD_MS),
];

/// Names of the show's channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    Rotation,
    Twinkle,
    Wave,
    TitleFloat,
    NebulaAlpha,
    ShootingStar,
    JumpAltitude,
}

impl ChannelId {
    #[cfg(test)]
    pub const ALL: [ChannelId; 7] = [
        ChannelId::Rotation,
        ChannelId::Twinkle,
        ChannelId::Wave,
        ChannelId::TitleFloat,
        ChannelId::NebulaAlpha,
        ChannelId::ShootingStar,
        ChannelId::JumpAltitude,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Channel definitions, built once.
#[derive(Debug, Clone)]
pub struct ShowClock {
    channels: [Channel; 7],
}

impl ShowClock {
    pub fn new() -> Self {
        Self {
            channels: [
                Channel::restart(0.0, 360.0, 40_000.0, Easing::Linear),
                Channel::ping_pong(0.4, 1.0, 2000.0, Easing::LinearOutSlowIn),
                Channel::ping_pong(-5.0, 5.0, 2000.0, Easing::FastOutSlowIn),
                Channel::ping_pong(-5.0, 5.0, 3000.0, Easing::LinearOutSlowIn),
                Channel::ping_pong(0.1, 0.4, 5000.0, Easing::LinearOutSlowIn),
                Channel::keyframes(KeyframeTrack::from_pairs(
                    10_000.0,
                    &[(0.0, 0.0), (0.0, 4000.0), (1.0, 7000.0), (1.0, 10_000.0)],
                )),
                Channel::keyframes(KeyframeTrack::from_pairs(JUMP_PERIOD_MS, &JUMP_KEYFRAMES)),
            ],
        }
    }

    /// Process-wide instance; the definitions never change.
    pub fn shared() -> &'static ShowClock {
        static SHARED: OnceLock<ShowClock> = OnceLock::new();
        SHARED.get_or_init(ShowClock::new)
    }

    pub fn channel(&self, id: ChannelId) -> &Channel {
        &self.channels[id.index()]
    }

    pub fn value(&self, id: ChannelId, t_ms: f64) -> f32 {
        self.channel(id).value(t_ms)
    }

    /// Evaluate every channel at `t_ms`.
    pub fn sample(&self, t_ms: f64) -> ClockState {
        ClockState {
            rotation_degrees: self.value(ChannelId::Rotation, t_ms),
            twinkle: self.value(ChannelId::Twinkle, t_ms),
            wave: self.value(ChannelId::Wave, t_ms),
            title_float: self.value(ChannelId::TitleFloat, t_ms),
            nebula_alpha: self.value(ChannelId::NebulaAlpha, t_ms),
            shooting_star: self.value(ChannelId::ShootingStar, t_ms),
            jump_altitude: self.value(ChannelId::JumpAltitude, t_ms),
        }
    }
}

impl Default for ShowClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Every channel's value at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    pub rotation_degrees: f32,
    pub twinkle: f32,
    pub wave: f32,
    pub title_float: f32,
    pub nebula_alpha: f32,
    pub shooting_star: f32,
    pub jump_altitude: f32,
}

impl ClockState {
    /// Sample the show clock at `t_ms` since start.
    pub fn sample(t_ms: f64) -> Self {
        ShowClock::shared().sample(t_ms)
    }
}
