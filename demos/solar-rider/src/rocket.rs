/// The rider overlay: rocket, near-miss meteor and speech bubble.
///
/// All shapes are relative to the rider's placement; the rocket itself is
/// drawn inside a rotation about the rider position so it sways with `wave`.

use glam::Vec2;
use verse_engine::{
    lerp_vec2, ClipCircle, Color, DrawList, Paint, PathData, TextMeasurer, TextStyle,
};

use crate::rider::{RiderFrame, RiderPlacement, IGNITION_ALTITUDE};

// ── Rocket palette ───────────────────────────────────────────────────

const FLAME_CORE: u32 = 0xFFFFEA00;
const FLAME_EDGE: u32 = 0xFFFF5722;
const FLAME_ALPHA: f32 = 0.8;
const BLOOM_ALPHA: f32 = 0.6;
const FIN: u32 = 0xFFC62828;
const HULL: [u32; 3] = [0xFFF5F5F5, 0xFFBDBDBD, 0xFF757575];
const DETAIL_ALPHA: f32 = 0.2;
const WINDOW_FRAME: u32 = 0xFF455A64;
const GLASS: [u32; 2] = [0xFFB3E5FC, 0xFF03A9F4];

// ── Bubble palette ───────────────────────────────────────────────────

const BUBBLE_FILL: [u32; 2] = [0xFFFFFFFF, 0xFFF5F5F5];
const BUBBLE_BORDER: u32 = 0xFFFFD600;
const CAPTION_INK: [u32; 4] = [0xFFE91E63, 0xFF9C27B0, 0xFF3F51B5, 0xFF00BCD4];

// ── Near miss ────────────────────────────────────────────────────────

/// Altitude band `(lo, hi)` in which the near-miss meteor crosses while ascending.
const NEAR_MISS_BAND: (f32, f32) = (0.3, 0.7);

fn colors(argb: &[u32]) -> Vec<Color> {
    argb.iter().map(|&c| Color::from_argb(c)).collect()
}

/// Rocket proportions derived from the rider size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketGeometry {
    pub width: f32,
    pub height: f32,
    pub window_center: Vec2,
    pub window_size: f32,
}

impl RocketGeometry {
    pub fn new(position: Vec2, size: f32) -> Self {
        let width = size * 0.9;
        let height = size * 1.8;
        Self {
            width,
            height,
            window_center: position - Vec2::new(0.0, height * 0.6),
            window_size: width * 0.8,
        }
    }
}

/// Draw the whole rider overlay.
pub fn draw_rider(
    list: &mut DrawList,
    placement: &RiderPlacement,
    rider: &RiderFrame,
    wave: f32,
    scale: f32,
    text: &dyn TextMeasurer,
    face_image: Option<&str>,
) {
    let pos = placement.position;
    let geo = RocketGeometry::new(pos, placement.size);

    list.with_rotation(pos, placement.rotation_deg, |list| {
        if rider.altitude > IGNITION_ALTITUDE {
            draw_plume(list, pos, &geo, wave, scale);
        }
        draw_hull(list, pos, &geo, scale);
        draw_cockpit(list, &geo, face_image);
    });

    if !rider.descending && rider.altitude > NEAR_MISS_BAND.0 && rider.altitude < NEAR_MISS_BAND.1 {
        draw_near_miss(list, pos, rider.altitude, scale);
    }

    draw_bubble(list, placement, rider.caption.text(), scale, text);
}

fn draw_plume(list: &mut DrawList, pos: Vec2, geo: &RocketGeometry, wave: f32, scale: f32) {
    let flicker = (wave % 5.0) * scale;
    let reach = pos.y + geo.height * 0.8 + flicker;
    let plume = PathData::new()
        .move_to(Vec2::new(pos.x - geo.width * 0.3, pos.y))
        .quad_to(Vec2::new(pos.x, reach), Vec2::new(pos.x + geo.width * 0.3, pos.y))
        .close();
    let flame = [Color::from_argb(FLAME_CORE), Color::from_argb(FLAME_EDGE), Color::TRANSPARENT];
    list.fill_path(plume, Paint::vertical(pos.y, reach, &flame).scale_alpha(FLAME_ALPHA));

    list.fill_circle(
        pos + Vec2::new(0.0, 5.0 * scale),
        geo.width * 0.2,
        Color::WHITE.with_alpha(BLOOM_ALPHA),
    );
}

fn draw_hull(list: &mut DrawList, pos: Vec2, geo: &RocketGeometry, scale: f32) {
    let (w, h) = (geo.width, geo.height);

    let fins = PathData::new()
        .move_to(Vec2::new(pos.x - w * 0.45, pos.y - h * 0.4))
        .line_to(Vec2::new(pos.x - w * 0.9, pos.y))
        .line_to(Vec2::new(pos.x - w * 0.45, pos.y))
        .close()
        .move_to(Vec2::new(pos.x + w * 0.45, pos.y - h * 0.4))
        .line_to(Vec2::new(pos.x + w * 0.9, pos.y))
        .line_to(Vec2::new(pos.x + w * 0.45, pos.y))
        .close();
    list.fill_path(fins, Color::from_argb(FIN));

    let tip = Vec2::new(pos.x, pos.y - h);
    let body = PathData::new()
        .move_to(tip)
        .cubic_to(
            Vec2::new(pos.x + w * 0.5, pos.y - h),
            Vec2::new(pos.x + w * 0.5, pos.y - h * 0.6),
            Vec2::new(pos.x + w * 0.5, pos.y - h * 0.3),
        )
        .line_to(Vec2::new(pos.x + w * 0.5, pos.y))
        .line_to(Vec2::new(pos.x - w * 0.5, pos.y))
        .line_to(Vec2::new(pos.x - w * 0.5, pos.y - h * 0.3))
        .cubic_to(
            Vec2::new(pos.x - w * 0.5, pos.y - h * 0.6),
            Vec2::new(pos.x - w * 0.5, pos.y - h),
            tip,
        )
        .close();
    list.fill_path(
        body,
        Paint::linear(Vec2::new(pos.x - w, pos.y), Vec2::new(pos.x + w, pos.y), &colors(&HULL)),
    );

    let detail = Color::BLACK.with_alpha(DETAIL_ALPHA);
    let seam_y = pos.y - h * 0.35;
    list.line(
        Vec2::new(pos.x - w * 0.5, seam_y),
        Vec2::new(pos.x + w * 0.5, seam_y),
        scale,
        detail,
    );
    for i in -2..=2 {
        list.fill_circle(
            Vec2::new(pos.x + i as f32 * w * 0.2, pos.y - 10.0 * scale),
            1.5 * scale,
            detail,
        );
    }
}

fn draw_cockpit(list: &mut DrawList, geo: &RocketGeometry, face_image: Option<&str>) {
    let center = geo.window_center;
    let ws = geo.window_size;

    list.fill_circle(center, ws * 0.55, Color::from_argb(WINDOW_FRAME));
    list.fill_circle(
        center,
        ws * 0.5,
        Paint::radial(center - Vec2::splat(ws * 0.1), ws * 0.5, &colors(&GLASS)),
    );

    // Without a decoded face the glass stays empty
    if let Some(name) = face_image {
        let side = (ws * 0.95).round();
        let top_left = (center - Vec2::splat(ws * 0.95 / 2.0)).round();
        list.image(
            name,
            top_left,
            Vec2::splat(side),
            Some(ClipCircle { center, radius: ws * 0.5 }),
        );
    }
}

/// Meteor streaking past the rider; `altitude` drives its progress across the band.
fn draw_near_miss(list: &mut DrawList, pos: Vec2, altitude: f32, scale: f32) {
    let (lo, hi) = NEAR_MISS_BAND;
    let progress = (altitude - lo) / (hi - lo);
    let start = pos + Vec2::new(1000.0, -500.0) * scale;
    let end = pos + Vec2::new(-1000.0, 500.0) * scale;
    let head = lerp_vec2(start, end, progress);
    let tail = head + Vec2::new(80.0, -40.0) * scale;

    list.line(tail, head, 3.0 * scale, Paint::linear(tail, head, &[Color::TRANSPARENT, Color::WHITE]));
    list.fill_circle(head, 3.5 * scale, Color::WHITE);
}

/// Caption box up and to the right of the rider, with a pointer back to its head.
fn draw_bubble(list: &mut DrawList, placement: &RiderPlacement, caption: &str, scale: f32, text: &dyn TextMeasurer) {
    let pos = placement.position;
    let size = placement.size;
    let style = TextStyle::new(9.0 * scale);
    let text_size = text.measure(caption, &style);
    let box_size = text_size + Vec2::new(12.0 * scale, 4.0 * scale);
    let anchor = pos + Vec2::new(size + 5.0 * scale, -size - 20.0 * scale);

    let outline = PathData::new()
        .move_to(anchor)
        .line_to(Vec2::new(anchor.x + box_size.x, anchor.y))
        .line_to(Vec2::new(anchor.x + box_size.x, anchor.y - box_size.y))
        .line_to(Vec2::new(anchor.x, anchor.y - box_size.y))
        .close()
        .move_to(Vec2::new(anchor.x + 2.0 * scale, anchor.y))
        .line_to(Vec2::new(pos.x + size * 0.5, pos.y - size * 1.2))
        .line_to(Vec2::new(anchor.x + 12.0 * scale, anchor.y));

    let (min, max) = outline.bounds().unwrap_or((anchor, anchor));
    list.fill_path(outline.clone(), Paint::linear(min, max, &colors(&BUBBLE_FILL)));
    list.stroke_path(outline, 1.0, Color::from_argb(BUBBLE_BORDER));

    let text_pos = Vec2::new(anchor.x + 6.0, anchor.y - box_size.y + 2.0);
    list.text(
        caption,
        text_pos,
        style,
        Paint::linear(text_pos, text_pos + text_size, &colors(&CAPTION_INK)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captions::Caption;
    use crate::rider::Phase;
    use verse_engine::{ApproxTextMeasurer, DrawCommand};

    fn rider(altitude: f32, descending: bool) -> RiderFrame {
        RiderFrame {
            altitude,
            descending,
            phase: Phase::Ascent,
            visible: true,
            caption: crate::captions::caption_for(altitude, descending),
            ignited: false,
        }
    }

    fn placement() -> RiderPlacement {
        RiderPlacement { position: Vec2::new(300.0, 300.0), size: 40.0, rotation_deg: 2.0 }
    }

    fn draw(altitude: f32, descending: bool, face: Option<&str>) -> DrawList {
        let mut list = DrawList::new();
        draw_rider(&mut list, &placement(), &rider(altitude, descending), 3.0, 1.0, &ApproxTextMeasurer, face);
        list
    }

    fn count(list: &DrawList, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        list.iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn rocket_is_drawn_inside_one_rotation() {
        let list = draw(0.5, true, None);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::PushRotation { degrees, .. } if degrees == 2.0
        ));
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::PushRotation { .. })), 1);
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::PopTransform)), 1);
    }

    #[test]
    fn plume_only_above_ignition() {
        let low = draw(0.01, false, None);
        let high = draw(0.02, false, None);
        // Plume path + core bloom
        assert_eq!(high.len(), low.len() + 2);
    }

    #[test]
    fn face_is_clipped_to_the_window() {
        let list = draw(0.2, false, Some("rider_face"));
        let image = list.iter().find_map(|c| match c {
            DrawCommand::Image { image, clip, size, .. } => Some((image.clone(), *clip, *size)),
            _ => None,
        });
        let (name, clip, size) = image.expect("face image drawn");
        assert_eq!(name, "rider_face");
        let geo = RocketGeometry::new(placement().position, placement().size);
        let clip = clip.expect("circular clip");
        assert_eq!(clip.center, geo.window_center);
        assert!((clip.radius - geo.window_size * 0.5).abs() < 1e-5);
        assert_eq!(size, Vec2::splat((geo.window_size * 0.95).round()));

        let without = draw(0.2, false, None);
        assert_eq!(count(&without, |c| matches!(c, DrawCommand::Image { .. })), 0);
    }

    #[test]
    fn near_miss_only_while_climbing_through_band() {
        let with_meteor = draw(0.5, false, None);
        let descending = draw(0.5, true, None);
        let lines = |l: &DrawList| count(l, |c| matches!(c, DrawCommand::Line { .. }));
        // Panel seam always; meteor tail only when climbing
        assert_eq!(lines(&with_meteor), 2);
        assert_eq!(lines(&descending), 1);
        assert_eq!(lines(&draw(0.3, false, None)), 1);
        assert_eq!(lines(&draw(0.7, false, None)), 1);
    }

    #[test]
    fn bubble_carries_the_caption() {
        let list = draw(0.75, false, None);
        let texts: Vec<&str> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, [Caption::Destination.text()]);
    }

    #[test]
    fn bubble_sits_up_and_right_of_rider() {
        let list = draw(0.1, false, None);
        let text_pos = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { top_left, .. } => Some(*top_left),
                _ => None,
            })
            .unwrap();
        let p = placement();
        assert!(text_pos.x > p.position.x + p.size);
        assert!(text_pos.y < p.position.y - p.size);
    }

    #[test]
    fn rocket_geometry_proportions() {
        let geo = RocketGeometry::new(Vec2::new(0.0, 100.0), 50.0);
        assert!((geo.width - 45.0).abs() < 1e-5);
        assert!((geo.height - 90.0).abs() < 1e-5);
        assert!((geo.window_center.y - 46.0).abs() < 1e-4);
        assert!((geo.window_size - 36.0).abs() < 1e-4);
    }
}
