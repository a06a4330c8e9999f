/// Scene renderer: turns one `ClockState` and a viewport into a draw list.
///
/// Draw order is fixed: background, nebulae, stars, sun glow, sun, sun label, title,
/// then per body (orbit, rings, atmosphere, disk, label, rider), then the
/// shooting star. Later layers paint over earlier ones.

use glam::Vec2;
use verse_engine::{
    direction_unit, lerp_vec2, Color, DrawList, FontWeight, Paint, PathData, Rng, TextMeasurer,
    TextStyle, Viewport,
};

use crate::bodies::{CelestialBody, SceneModel, SUN_GLOW_RADIUS, SUN_LABEL_RISE, SUN_RADIUS};
use crate::clock::ClockState;
use crate::config::ShowConfig;
use crate::rider::{RiderFrame, RiderPlacement};
use crate::rocket;

// ── Palette ──────────────────────────────────────────────────────────

/// Deep-space fill under everything else.
pub const BACKGROUND: u32 = 0xFF050510;
const SUN_GLOW: [u32; 2] = [0xFFFFEA00, 0xFFFF9800];
const SUN_DISK: [u32; 2] = [0xFFFFD600, 0xFFFF8F00];
const NEBULA_PALETTE: [u32; 3] = [0xFF311B92, 0xFF006064, 0xFF1B5E20];
const TITLE_GLOW: [u32; 3] = [0xFF00B0FF, 0xFF6200EA, 0xFF00B0FF];
const TITLE_MAIN: [u32; 2] = [0xFF80D8FF, 0xFFB388FF];
const TITLE_GLOW_ALPHA: f32 = 0.5;
const ORBIT_ALPHA: f32 = 0.15;
const RING_ALPHA: f32 = 0.3;
const ATMOSPHERE_ALPHA: f32 = 0.3;

// ── Layout (design units, multiplied by the scale factor) ────────────

const LABEL_SIZE: f32 = 10.0;
const LABEL_GAP: f32 = 15.0;
const RING_RADIUS: f32 = 1.8;
const RING_WIDTH: f32 = 8.0;
const ATMOSPHERE_RADIUS: f32 = 1.5;
/// Fraction of the radius the highlight shifts toward the sun.
const LIGHT_OFFSET: f32 = 0.3;

// ── Starfield ────────────────────────────────────────────────────────

/// One background star. Position is a fraction of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub at: Vec2,
    pub base_alpha: f32,
    pub radius: f32,
    pub twinkles: bool,
}

/// Seeded star layout, identical for identical seeds.
pub fn generate_stars(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            let at = Vec2::new(rng.next_f32(), rng.next_f32());
            let base_alpha = rng.next_f32() * 0.5 + 0.2;
            let radius = rng.next_f32() * 1.5 + 0.5;
            Star { at, base_alpha, radius, twinkles: i % 3 == 0 }
        })
        .collect()
}

/// A soft background cloud. Position is a fraction of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nebula {
    pub at: Vec2,
    pub radius: f32,
    pub color: Color,
}

pub fn generate_nebulae(count: usize, seed: u64) -> Vec<Nebula> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let at = Vec2::new(rng.next_f32(), rng.next_f32());
            let radius = rng.next_range(300.0, 500.0);
            let argb = rng.pick(&NEBULA_PALETTE).copied().unwrap_or(NEBULA_PALETTE[0]);
            Nebula { at, radius, color: Color::from_argb(argb) }
        })
        .collect()
}

fn colors(argb: &[u32]) -> Vec<Color> {
    argb.iter().map(|&c| Color::from_argb(c)).collect()
}

// ── Renderer ─────────────────────────────────────────────────────────

/// Per-frame inputs to the renderer.
pub struct Frame<'a> {
    pub clock: ClockState,
    pub viewport: Viewport,
    pub rider: Option<RiderFrame>,
    pub text: &'a dyn TextMeasurer,
    /// Manifest name of the cockpit face, when the host has one.
    pub face_image: Option<&'a str>,
}

pub struct SceneRenderer {
    model: SceneModel,
    stars: Vec<Star>,
    nebulae: Vec<Nebula>,
    title: String,
}

impl SceneRenderer {
    pub fn new(config: &ShowConfig) -> Self {
        Self {
            model: SceneModel::new(),
            stars: generate_stars(config.star_count, config.star_seed),
            nebulae: generate_nebulae(config.nebula_count, config.nebula_seed),
            title: config.title.clone(),
        }
    }

    /// Append this frame's commands to `list`.
    pub fn render(&self, list: &mut DrawList, frame: &Frame) {
        let viewport = frame.viewport;
        if viewport.is_empty() {
            return;
        }
        let size = viewport.size();
        let center = viewport.center();
        let scale = viewport.scale_factor();
        let clock = &frame.clock;

        draw_background(list, size);
        self.draw_nebulae(list, size, clock.nebula_alpha);
        self.draw_stars(list, size, clock.twinkle);
        draw_sun(list, center, scale, frame.text);
        self.draw_title(list, &viewport, scale, clock.title_float, frame.text);

        let peak_distance = self.model.peak_distance(scale);
        for body in self.model.bodies() {
            let pos = self.model.position(body, center, clock.rotation_degrees, scale);
            draw_body(list, body, pos, center, scale, frame.text);

            if let Some(rider) = frame.rider.filter(|r| r.visible && body.is_rider_host) {
                let placement =
                    RiderPlacement::compute(center, pos, rider.altitude, peak_distance, scale, clock.wave);
                rocket::draw_rider(list, &placement, &rider, clock.wave, scale, frame.text, frame.face_image);
            }
        }

        draw_shooting_star(list, size, clock.shooting_star);
    }

    fn draw_nebulae(&self, list: &mut DrawList, size: Vec2, alpha: f32) {
        for nebula in &self.nebulae {
            let center = nebula.at * size;
            list.fill_circle(
                center,
                nebula.radius,
                Paint::radial(center, nebula.radius, &[nebula.color.with_alpha(alpha), Color::TRANSPARENT]),
            );
        }
    }

    fn draw_stars(&self, list: &mut DrawList, size: Vec2, twinkle: f32) {
        for star in &self.stars {
            let alpha = if star.twinkles { star.base_alpha * twinkle } else { star.base_alpha };
            list.fill_circle(star.at * size, star.radius, Color::WHITE.with_alpha(alpha));
        }
    }

    /// Left-aligned in landscape, centered in portrait; bobs with `float`.
    fn draw_title(&self, list: &mut DrawList, viewport: &Viewport, scale: f32, float: f32, text: &dyn TextMeasurer) {
        let landscape = viewport.is_landscape();
        let style = TextStyle::new((if landscape { 28.0 } else { 36.0 }) * scale)
            .with_weight(FontWeight::ExtraBold)
            .with_letter_spacing(if landscape { 3.0 } else { 6.0 });
        let measured = text.measure(&self.title, &style);
        let top_left = Vec2::new(
            if landscape { 40.0 * scale } else { viewport.width / 2.0 - measured.x / 2.0 },
            (if landscape { 120.0 } else { 180.0 }) * scale + float,
        );
        let end = top_left + measured;

        let glow = Paint::linear(top_left, end, &colors(&TITLE_GLOW)).scale_alpha(TITLE_GLOW_ALPHA);
        list.text(self.title.as_str(), top_left, style, glow);
        list.text(self.title.as_str(), top_left, style, Paint::linear(top_left, end, &colors(&TITLE_MAIN)));
    }
}

fn draw_background(list: &mut DrawList, size: Vec2) {
    let sky = PathData::new()
        .move_to(Vec2::ZERO)
        .line_to(Vec2::new(size.x, 0.0))
        .line_to(size)
        .line_to(Vec2::new(0.0, size.y))
        .close();
    list.fill_path(sky, Color::from_argb(BACKGROUND));
}

fn draw_label(list: &mut DrawList, label: &str, at: Vec2, scale: f32, text: &dyn TextMeasurer) {
    let style = TextStyle::new(LABEL_SIZE * scale);
    let measured = text.measure(label, &style);
    list.text(label, at - measured / 2.0, style, Color::WHITE);
}

fn draw_sun(list: &mut DrawList, center: Vec2, scale: f32, text: &dyn TextMeasurer) {
    let glow_radius = SUN_GLOW_RADIUS * scale;
    let mut glow = colors(&SUN_GLOW);
    glow.push(Color::TRANSPARENT);
    list.fill_circle(center, glow_radius, Paint::radial(center, glow_radius, &glow));

    let radius = SUN_RADIUS * scale;
    list.fill_circle(center, radius, Paint::radial(center, radius, &colors(&SUN_DISK)));

    draw_label(list, "Sun", center - Vec2::new(0.0, SUN_LABEL_RISE * scale), scale, text);
}

fn draw_body(list: &mut DrawList, body: &CelestialBody, pos: Vec2, center: Vec2, scale: f32, text: &dyn TextMeasurer) {
    let color = body.color();
    let radius = body.radius * scale;

    list.stroke_circle(center, body.orbital_radius * scale, 1.0, Color::WHITE.with_alpha(ORBIT_ALPHA));

    if body.has_rings {
        list.stroke_circle(pos, radius * RING_RADIUS, RING_WIDTH * scale, color.with_alpha(RING_ALPHA));
    }

    let halo = radius * ATMOSPHERE_RADIUS;
    list.fill_circle(
        pos,
        halo,
        Paint::radial(pos, halo, &[color.with_alpha(ATMOSPHERE_ALPHA), Color::TRANSPARENT]),
    );

    let lit = pos + direction_unit(pos, center) * radius * LIGHT_OFFSET;
    list.fill_circle(
        pos,
        radius,
        Paint::radial(lit, radius, &[color, color.with_alpha(0.5), Color::BLACK.with_alpha(0.8)]),
    );

    draw_label(list, body.name, Vec2::new(pos.x, pos.y + radius + LABEL_GAP * scale), scale, text);
}

/// Streak across the sky while `progress` is strictly inside (0, 1).
fn draw_shooting_star(list: &mut DrawList, size: Vec2, progress: f32) {
    if progress <= 0.0 || progress >= 1.0 {
        return;
    }
    let start = size * Vec2::new(1.2, 0.2);
    let end = size * Vec2::new(-0.2, 0.8);
    let head = lerp_vec2(start, end, progress);
    let tail = head + Vec2::new(50.0, -20.0);

    list.line(tail, head, 2.0, Paint::linear(tail, head, &[Color::TRANSPARENT, Color::WHITE]));
    list.fill_circle(head, 2.0, Color::WHITE);
}
