//! Host capabilities the engine cannot provide itself.
//!
//! Text shaping and device vibration live outside the simulation. The web
//! bridge implements these against browser APIs; the defaults here keep a
//! headless build (and tests) working without them.

use glam::Vec2;

use crate::systems::draw::TextStyle;

/// Measures the box a text run occupies once drawn.
pub trait TextMeasurer {
    /// Width and height of `text` rendered with `style`, in surface pixels.
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2;
}

/// Width-per-glyph estimate used when the host offers no font metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl ApproxTextMeasurer {
    /// Average advance as a fraction of the font size.
    pub const ADVANCE: f32 = 0.55;
    /// Line height as a fraction of the font size.
    pub const LINE_HEIGHT: f32 = 1.2;
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        let glyphs = text.chars().count() as f32;
        let spacing = style.letter_spacing * (glyphs - 1.0).max(0.0);
        Vec2::new(
            glyphs * style.size * Self::ADVANCE + spacing,
            style.size * Self::LINE_HEIGHT,
        )
    }
}

/// Short vibration pulses.
pub trait Haptics {
    /// Vibrate for `duration_ms`. Unsupported devices ignore the call.
    fn pulse(&mut self, duration_ms: u32);
}

/// Haptics for hosts without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self, _duration_ms: u32) {}
}
