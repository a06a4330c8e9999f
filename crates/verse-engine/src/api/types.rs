use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Reference edge length: at `min(width, height) == REFERENCE_EXTENT` one scene unit is one pixel.
pub const REFERENCE_EXTENT: f32 = 1500.0;

/// A game event communicated from Rust to the host.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Event kind for a short vibration pulse; `a` holds the duration in ms.
    pub const HAPTIC: f32 = 1.0;

    /// A haptic pulse of `duration_ms`.
    pub fn haptic(duration_ms: u32) -> Self {
        Self { kind: Self::HAPTIC, a: duration_ms as f32, b: 0.0, c: 0.0 }
    }

    pub fn is_haptic(&self) -> bool {
        self.kind == Self::HAPTIC
    }
}

/// Size of the drawing surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Non-finite or negative sizes collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self { width: sane(width), height: sane(height) }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Uniform scale so the scene fits the shorter edge.
    pub fn scale_factor(&self) -> f32 {
        self.width.min(self.height) / REFERENCE_EXTENT
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
