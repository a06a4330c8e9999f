/// Illustrative planet table: radii, orbits and speeds chosen for looks, not astronomy.
///
/// Distances are in design units; the renderer multiplies them by the viewport
/// scale factor. Velocities multiply the shared rotation channel, so every body
/// stays phase-locked to one clock.

use glam::Vec2;
use verse_engine::{polar_point, Color};

pub const BODY_COUNT: usize = 8;


// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_GLOW_RADIUS: f32 = 90.0;
pub const SUN_RADIUS: f32 = 40.0;
/// Label sits this far above the sun's center.
pub const SUN_LABEL_RISE: f32 = 70.0;

// ── Planets ──────────────────────────────────────────────────────────

/// One orbiting body. Immutable, defined once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    /// Packed `0xAARRGGBB` base color.
    pub color_argb: u32,
    pub radius: f32,
    pub orbital_radius: f32,
    /// Multiplier applied to the shared rotation angle.
    pub angular_velocity: f32,
    pub has_rings: bool,
    pub is_rider_host: bool,
}

impl CelestialBody {
    const fn new(name: &'static str, color_argb: u32, radius: f32, orbital_radius: f32, angular_velocity: f32) -> Self {
        Self {
            name,
            color_argb,
            radius,
            orbital_radius,
            angular_velocity,
            has_rings: false,
            is_rider_host: false,
        }
    }

    const fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    const fn rider_host(mut self) -> Self {
        self.is_rider_host = true;
        self
    }

    pub fn color(&self) -> Color {
        Color::from_argb(self.color_argb)
    }
}

pub const BODIES: [CelestialBody; BODY_COUNT] = [
    CelestialBody::new("Mercury", 0xFFBDBDBD, 8.0, 100.0, 8.0),
    CelestialBody::new("Venus", 0xFFE6BE8A, 14.0, 150.0, 6.0),
    CelestialBody::new("Earth", 0xFF2196F3, 15.0, 210.0, 4.5).rider_host(),
    CelestialBody::new("Mars", 0xFFD32F2F, 12.0, 270.0, 3.5),
    CelestialBody::new("Jupiter", 0xFFFFA000, 36.0, 380.0, 2.0),
    CelestialBody::new("Saturn", 0xFFFDD835, 30.0, 490.0, 1.5).with_rings(),
    CelestialBody::new("Uranus", 0xFF00ACC1, 22.0, 580.0, 1.1),
    CelestialBody::new("Neptune", 0xFF1976D2, 20.0, 660.0, 0.8),
];

/// The static scene: bodies in draw order.
#[derive(Debug, Clone)]
pub struct SceneModel {
    bodies: &'static [CelestialBody],
}

impl SceneModel {
    pub fn new() -> Self {
        Self { bodies: &BODIES }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        self.bodies
    }

    /// Index of the body the rider launches from.
    pub fn host_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.is_rider_host)
    }

    /// Largest orbital radius in design units.
    pub fn outermost_orbit(&self) -> f32 {
        self.bodies.iter().map(|b| b.orbital_radius).fold(0.0, f32::max)
    }

    /// Scaled distance from the host's orbit out to the outermost orbit.
    pub fn peak_distance(&self, scale: f32) -> f32 {
        let host_orbit = self
            .host_index()
            .map(|i| self.bodies[i].orbital_radius)
            .unwrap_or(0.0);
        (self.outermost_orbit() - host_orbit) * scale
    }

    /// Screen position of `body` for the given master rotation.
    pub fn position(&self, body: &CelestialBody, center: Vec2, rotation_deg: f32, scale: f32) -> Vec2 {
        polar_point(center, body.orbital_radius * scale, rotation_deg * body.angular_velocity)
    }
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}
