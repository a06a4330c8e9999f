//! Display list: the ordered draw primitives a frame is made of.
//!
//! Scenes append commands in painter's order; the list is then either
//! tessellated on the Rust side (`systems::vector`, feature `vectors`) or
//! serialized to JSON for a Canvas2D host that draws text, gradients and
//! images natively.
//!
//! # Usage
//!
//! ```ignore
//! let mut list = DrawList::new();
//! list.fill_circle(center, 40.0, Paint::radial(center, 40.0, &[Color::WHITE, Color::TRANSPARENT]));
//! list.stroke_circle(center, 210.0, 1.0, Color::WHITE.with_alpha(0.15));
//! list.with_rotation(pivot, 12.0, |list| {
//!     list.fill_path(rocket_body, Color::rgb8(245, 245, 245));
//! });
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0.0 - 1.0 (not premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Create a color from RGBA u8 values (0-255).
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::rgba8(r, g, b, a)
    }

    /// Same color with the given alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Same color with alpha multiplied by `factor`.
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self { a: (self.a * factor).clamp(0.0, 1.0), ..self }
    }

    /// Component-wise interpolation toward `other`.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How a shape is colored. Gradient stops are evenly spaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    Linear { start: Vec2, end: Vec2, colors: Vec<Color> },
    Radial { center: Vec2, radius: f32, colors: Vec<Color> },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid { color }
    }

    pub fn linear(start: Vec2, end: Vec2, colors: &[Color]) -> Self {
        Paint::Linear { start, end, colors: colors.to_vec() }
    }

    /// Vertical gradient between two y coordinates.
    pub fn vertical(start_y: f32, end_y: f32, colors: &[Color]) -> Self {
        Paint::Linear {
            start: Vec2::new(0.0, start_y),
            end: Vec2::new(0.0, end_y),
            colors: colors.to_vec(),
        }
    }

    pub fn radial(center: Vec2, radius: f32, colors: &[Color]) -> Self {
        Paint::Radial { center, radius, colors: colors.to_vec() }
    }

    /// Multiply the alpha of every color by `factor`.
    pub fn scale_alpha(self, factor: f32) -> Self {
        match self {
            Paint::Solid { color } => Paint::Solid { color: color.scale_alpha(factor) },
            Paint::Linear { start, end, colors } => Paint::Linear {
                start,
                end,
                colors: colors.into_iter().map(|c| c.scale_alpha(factor)).collect(),
            },
            Paint::Radial { center, radius, colors } => Paint::Radial {
                center,
                radius,
                colors: colors.into_iter().map(|c| c.scale_alpha(factor)).collect(),
            },
        }
    }

    /// Color this paint produces at `point` (in the shape's local coordinates).
    pub fn color_at(&self, point: Vec2) -> Color {
        match self {
            Paint::Solid { color } => *color,
            Paint::Linear { start, end, colors } => {
                let axis = *end - *start;
                let len_sq = axis.length_squared();
                let t = if len_sq > 0.0 { (point - *start).dot(axis) / len_sq } else { 0.0 };
                sample_stops(colors, t)
            }
            Paint::Radial { center, radius, colors } => {
                let t = if *radius > 0.0 { point.distance(*center) / radius } else { 1.0 };
                sample_stops(colors, t)
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid { color }
    }
}

/// Evenly spaced gradient lookup, clamped at both ends.
fn sample_stops(colors: &[Color], t: f32) -> Color {
    match colors.len() {
        0 => Color::TRANSPARENT,
        1 => colors[0],
        n => {
            let pos = t.clamp(0.0, 1.0) * (n - 1) as f32;
            let i = (pos.floor() as usize).min(n - 2);
            colors[i].lerp(colors[i + 1], pos - i as f32)
        }
    }
}

/// Fill the interior or stroke the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Style {
    Fill,
    Stroke { width: f32 },
}

/// One segment instruction of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathVerb {
    MoveTo { to: Vec2 },
    LineTo { to: Vec2 },
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

/// A path made of straight, quadratic and cubic segments, possibly several subpaths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub verbs: Vec<PathVerb>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Vec2) -> Self {
        self.verbs.push(PathVerb::MoveTo { to });
        self
    }

    pub fn line_to(mut self, to: Vec2) -> Self {
        self.verbs.push(PathVerb::LineTo { to });
        self
    }

    pub fn quad_to(mut self, ctrl: Vec2, to: Vec2) -> Self {
        self.verbs.push(PathVerb::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(mut self, ctrl1: Vec2, ctrl2: Vec2, to: Vec2) -> Self {
        self.verbs.push(PathVerb::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Axis-aligned bounds of every point (control points included).
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.verbs.iter().flat_map(|verb| match *verb {
            PathVerb::MoveTo { to } | PathVerb::LineTo { to } => vec![to],
            PathVerb::QuadTo { ctrl, to } => vec![ctrl, to],
            PathVerb::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
            PathVerb::Close => Vec::new(),
        });
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    ExtraBold,
}

/// Font parameters for a text run. Sizes are in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub letter_spacing: f32,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self { size, weight: FontWeight::Normal, letter_spacing: 0.0 }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }
}

/// Circular clip applied to an image blit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipCircle {
    pub center: Vec2,
    pub radius: f32,
}

/// A single draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32, paint: Paint, style: Style },
    Line { from: Vec2, to: Vec2, width: f32, paint: Paint },
    Path { path: PathData, paint: Paint, style: Style },
    Text { text: String, top_left: Vec2, style: TextStyle, paint: Paint },
    /// Blit a host-decoded image, looked up by asset name.
    Image { image: String, top_left: Vec2, size: Vec2, clip: Option<ClipCircle> },
    /// Rotate everything until the matching `PopTransform` about `pivot`.
    PushRotation { pivot: Vec2, degrees: f32 },
    PopTransform,
}

/// Ordered list of draw commands for one frame.
/// Cleared each frame and populated by the scene in painter's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self { commands: Vec::with_capacity(512) }
    }

    /// Drop all commands. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Filled circle. Degenerate radii are skipped.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        if radius > 0.0 && radius.is_finite() {
            self.push(DrawCommand::Circle { center, radius, paint: paint.into(), style: Style::Fill });
        }
    }

    /// Circle outline. Degenerate radii are skipped.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, paint: impl Into<Paint>) {
        if radius > 0.0 && radius.is_finite() {
            self.push(DrawCommand::Circle {
                center,
                radius,
                paint: paint.into(),
                style: Style::Stroke { width },
            });
        }
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, paint: impl Into<Paint>) {
        self.push(DrawCommand::Line { from, to, width, paint: paint.into() });
    }

    pub fn fill_path(&mut self, path: PathData, paint: impl Into<Paint>) {
        if !path.is_empty() {
            self.push(DrawCommand::Path { path, paint: paint.into(), style: Style::Fill });
        }
    }

    pub fn stroke_path(&mut self, path: PathData, width: f32, paint: impl Into<Paint>) {
        if !path.is_empty() {
            self.push(DrawCommand::Path { path, paint: paint.into(), style: Style::Stroke { width } });
        }
    }

    pub fn text(&mut self, text: impl Into<String>, top_left: Vec2, style: TextStyle, paint: impl Into<Paint>) {
        self.push(DrawCommand::Text { text: text.into(), top_left, style, paint: paint.into() });
    }

    pub fn image(&mut self, image: impl Into<String>, top_left: Vec2, size: Vec2, clip: Option<ClipCircle>) {
        self.push(DrawCommand::Image { image: image.into(), top_left, size, clip });
    }

    /// Run `draw` with a rotation about `pivot` applied to its commands.
    pub fn with_rotation(&mut self, pivot: Vec2, degrees: f32, draw: impl FnOnce(&mut Self)) {
        self.push(DrawCommand::PushRotation { pivot, degrees });
        draw(self);
        self.push(DrawCommand::PopTransform);
    }

    /// Serialize the whole list for a Canvas2D host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}
