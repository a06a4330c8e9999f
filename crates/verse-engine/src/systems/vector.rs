//! Lyon-based tessellation of the display list.
//!
//! Turns the fillable and strokable commands of a [`DrawList`] into a flat
//! triangle-list vertex buffer with per-vertex color, so a GPU host can draw
//! the scene without a Canvas2D. Gradients are evaluated per vertex; text and
//! images are left to the host.
//!
//! # Usage
//!
//! ```ignore
//! let mut vectors = VectorState::with_capacity(config.max_vector_vertices);
//! vectors.clear();
//! vectors.rasterize(&ctx.draw);
//! host.upload(vectors.as_slice());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, Vec2};
use lyon::math::{point, Point};
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use super::draw::{Color, DrawCommand, DrawList, Paint, PathData, PathVerb, Style};

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    pub fn new(pos: Vec2, color: Color) -> Self {
        Self { x: pos.x, y: pos.y, r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

/// Default vertex budget when none is configured.
pub const DEFAULT_MAX_VECTOR_VERTICES: usize = 65536;

/// Tessellation tolerance in surface pixels.
const TOLERANCE: f32 = 0.5;

/// Vertex constructor for lyon fill tessellation.
/// Colors come from the paint at the untransformed position.
struct FillVertexCtor<'a> {
    paint: &'a Paint,
    transform: Affine2,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor<'_> {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let local = Vec2::new(vertex.position().x, vertex.position().y);
        VectorVertex::new(self.transform.transform_point2(local), self.paint.color_at(local))
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor<'a> {
    paint: &'a Paint,
    transform: Affine2,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor<'_> {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let local = Vec2::new(vertex.position().x, vertex.position().y);
        VectorVertex::new(self.transform.transform_point2(local), self.paint.color_at(local))
    }
}

fn pt(v: Vec2) -> Point {
    point(v.x, v.y)
}

/// Convert display-list path data to a lyon path.
/// Unclosed subpaths are ended open; fills still treat them as closed.
pub fn build_path(data: &PathData) -> Path {
    let mut builder = Path::builder();
    let mut open = false;
    let mut cursor = Vec2::ZERO;
    let mut subpath_start = Vec2::ZERO;

    for verb in &data.verbs {
        if !open && !matches!(verb, PathVerb::MoveTo { .. } | PathVerb::Close) {
            builder.begin(pt(cursor));
            subpath_start = cursor;
            open = true;
        }
        match *verb {
            PathVerb::MoveTo { to } => {
                if open {
                    builder.end(false);
                }
                builder.begin(pt(to));
                open = true;
                cursor = to;
                subpath_start = to;
            }
            PathVerb::LineTo { to } => {
                builder.line_to(pt(to));
                cursor = to;
            }
            PathVerb::QuadTo { ctrl, to } => {
                builder.quadratic_bezier_to(pt(ctrl), pt(to));
                cursor = to;
            }
            PathVerb::CubicTo { ctrl1, ctrl2, to } => {
                builder.cubic_bezier_to(pt(ctrl1), pt(ctrl2), pt(to));
                cursor = to;
            }
            PathVerb::Close => {
                if open {
                    builder.close();
                    open = false;
                    cursor = subpath_start;
                }
            }
        }
    }
    if open {
        builder.end(false);
    }
    builder.build()
}

/// State for vector rendering.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared each frame and populated from the frame's draw list.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    max_vertices: usize,
    overflowed: bool,
}

impl VectorState {
    /// Create a new VectorState with the default vertex budget.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_VECTOR_VERTICES)
    }

    /// Create a VectorState that holds at most `max_vertices` vertices per frame.
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices.min(16384) * VectorVertex::FLOATS),
            max_vertices,
            overflowed: false,
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Vertex budget per frame.
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Whether a shape was dropped this frame for lack of room.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// The flat float buffer, `FLOATS` per vertex.
    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for a zero-copy view on the host).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    /// Shapes that would exceed the budget are dropped whole.
    fn flush_geometry(&mut self) {
        if self.vertex_count() + self.geometry.indices.len() > self.max_vertices {
            self.overflowed = true;
        } else {
            for idx in &self.geometry.indices {
                let v = &self.geometry.vertices[*idx as usize];
                self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
            }
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate every drawable command of `list` in order.
    /// Returns the number of vertices in the buffer afterwards.
    pub fn rasterize(&mut self, list: &DrawList) -> usize {
        let mut stack: Vec<Affine2> = Vec::new();
        let mut transform = Affine2::IDENTITY;

        for command in list.iter() {
            match command {
                DrawCommand::Circle { center, radius, paint, style } => {
                    let mut builder = Path::builder();
                    builder.add_circle(pt(*center), *radius, Winding::Positive);
                    self.draw(&builder.build(), paint, *style, transform);
                }
                DrawCommand::Line { from, to, width, paint } => {
                    let mut builder = Path::builder();
                    builder.begin(pt(*from));
                    builder.line_to(pt(*to));
                    builder.end(false);
                    self.stroke_path(&builder.build(), *width, paint, transform);
                }
                DrawCommand::Path { path, paint, style } => {
                    self.draw(&build_path(path), paint, *style, transform);
                }
                DrawCommand::PushRotation { pivot, degrees } => {
                    stack.push(transform);
                    transform = transform
                        * Affine2::from_translation(*pivot)
                        * Affine2::from_angle(degrees.to_radians())
                        * Affine2::from_translation(-*pivot);
                }
                DrawCommand::PopTransform => {
                    transform = stack.pop().unwrap_or(Affine2::IDENTITY);
                }
                // Drawn by the host
                DrawCommand::Text { .. } | DrawCommand::Image { .. } => {}
            }
        }
        self.vertex_count()
    }

    fn draw(&mut self, path: &Path, paint: &Paint, style: Style, transform: Affine2) {
        match style {
            Style::Fill => self.fill_path(path, paint, transform),
            Style::Stroke { width } => self.stroke_path(path, width, paint, transform),
        }
    }

    /// Tessellate and fill an arbitrary lyon Path.
    pub fn fill_path(&mut self, path: &Path, paint: &Paint, transform: Affine2) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { paint, transform }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, paint: &Paint, transform: Affine2) {
        if width <= 0.0 {
            return;
        }
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { paint, transform }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}
