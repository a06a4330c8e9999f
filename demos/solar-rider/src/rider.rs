/// The rider's launch sequence: direction memory, phase, edge triggers, placement.
///
/// The altitude itself comes from the clock. Everything stateful about the
/// rider lives here: the previous altitude, the activation gate and the
/// ignition trigger.

use glam::Vec2;
use verse_engine::{direction_unit, OneShot};

use crate::captions::{caption_for, Caption};

/// Altitude of the idle floor; at or below it the rider is parked.
pub const IDLE_FLOOR: f32 = 0.0;
/// Top of the ignition ramp.
pub const IGNITION_ALTITUDE: f32 = 0.01;
/// Ignition band `(IGNITION_ALTITUDE, HAPTIC_BAND_TOP)` that fires the haptic edge.
pub const HAPTIC_BAND_TOP: f32 = 0.1;
/// Altitude treated as the peak.
pub const PEAK_ALTITUDE: f32 = 1.0;

/// Rider size at zero altitude, in design units.
pub const BASE_SIZE: f32 = 30.0;
/// Size growth: `size = base × (1 + GROWTH × altitude)`.
pub const GROWTH: f32 = 2.0;

/// Sign of the altitude change since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Steady,
    Falling,
}

/// One frame of altitude memory.
#[derive(Debug, Clone, Default)]
pub struct DescentTracker {
    previous: Option<f32>,
}

impl DescentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's altitude and return how it moved.
    /// The first frame reports `Steady`.
    pub fn update(&mut self, altitude: f32) -> Trend {
        let trend = match self.previous {
            Some(prev) if altitude < prev => Trend::Falling,
            Some(prev) if altitude > prev => Trend::Rising,
            _ => Trend::Steady,
        };
        self.previous = Some(altitude);
        trend
    }
}

/// Named stage of the launch loop, derived from altitude and trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ignition,
    Ascent,
    Peak,
    Descent,
    Landed,
}

impl Phase {
    pub fn classify(altitude: f32, trend: Trend) -> Phase {
        if altitude <= IDLE_FLOOR {
            return Phase::Idle;
        }
        if altitude >= PEAK_ALTITUDE {
            return Phase::Peak;
        }
        match trend {
            Trend::Rising if altitude <= IGNITION_ALTITUDE => Phase::Ignition,
            Trend::Rising => Phase::Ascent,
            Trend::Falling if altitude <= IGNITION_ALTITUDE => Phase::Landed,
            Trend::Falling => Phase::Descent,
            // Only the landed hold sits still below the peak
            Trend::Steady => Phase::Landed,
        }
    }
}

/// Edge detector for the ignition haptic.
///
/// Fires once when the rider climbs into the ignition band, then stays quiet
/// until the altitude is back on the idle floor.
#[derive(Debug, Clone)]
pub struct IgnitionTrigger {
    armed: bool,
}

impl IgnitionTrigger {
    pub fn new() -> Self {
        Self { armed: true }
    }

    /// Returns `true` on the single frame the pulse should fire.
    pub fn update(&mut self, altitude: f32, descending: bool) -> bool {
        if altitude <= IDLE_FLOOR {
            self.armed = true;
            return false;
        }
        let in_band = altitude > IGNITION_ALTITUDE && altitude < HAPTIC_BAND_TOP;
        if self.armed && in_band && !descending {
            self.armed = false;
            return true;
        }
        false
    }
}

impl Default for IgnitionTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// Where and how big the rider is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderPlacement {
    pub position: Vec2,
    pub size: f32,
    pub rotation_deg: f32,
}

impl RiderPlacement {
    /// Project outward from `host` along the sun → host line.
    pub fn compute(center: Vec2, host: Vec2, altitude: f32, peak_distance: f32, scale: f32, wave: f32) -> Self {
        let dir = direction_unit(center, host);
        Self {
            position: host + dir * altitude * peak_distance,
            size: BASE_SIZE * scale * (1.0 + GROWTH * altitude),
            rotation_deg: wave / 2.0,
        }
    }
}

/// Everything the renderer needs to know about the rider this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderFrame {
    pub altitude: f32,
    pub descending: bool,
    pub phase: Phase,
    pub visible: bool,
    pub caption: Caption,
    /// Set on the one frame the ignition pulse fires.
    pub ignited: bool,
}

/// Stateful driver of the launch sequence.
#[derive(Debug, Clone)]
pub struct RiderSequence {
    tracker: DescentTracker,
    trigger: IgnitionTrigger,
    gate: OneShot,
    phase: Phase,
}

impl RiderSequence {
    pub fn new(activation_delay_ms: f64) -> Self {
        Self {
            tracker: DescentTracker::new(),
            trigger: IgnitionTrigger::new(),
            gate: OneShot::new(activation_delay_ms),
            phase: Phase::Idle,
        }
    }

    /// Advance one frame.
    pub fn update(&mut self, elapsed_ms: f64, altitude: f32) -> RiderFrame {
        let trend = self.tracker.update(altitude);
        let descending = trend == Trend::Falling;
        let ignited = self.trigger.update(altitude, descending);
        let active = self.gate.poll(elapsed_ms);

        if ignited {
            log::debug!("rider ignition at {:.0} ms", elapsed_ms);
        }

        let frame = RiderFrame {
            altitude,
            descending,
            phase: Phase::classify(altitude, trend),
            visible: active && altitude > IDLE_FLOOR,
            caption: caption_for(altitude, descending),
            ignited,
        };
        if frame.phase != self.phase {
            log::debug!("rider {:?} -> {:?} at {:.0} ms", self.phase, frame.phase, elapsed_ms);
            self.phase = frame.phase;
        }
        frame
    }
}
