/// Shared frame buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header of every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::{GameEvent, Viewport};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_VIEWPORT_WIDTH: usize = 3;
pub const HEADER_VIEWPORT_HEIGHT: usize = 4;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 5;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_ELAPSED_MS: usize = 9;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a (fixed wire format).
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum vector vertices per frame.
    pub max_vector_vertices: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of vector data section in floats.
    pub vector_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    pub frame_counter: u64,
    pub viewport: Viewport,
    pub elapsed_ms: f64,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_vector_vertices: usize, max_events: usize) -> Self {
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let vector_data_offset = HEADER_FLOATS;
        let event_data_offset = vector_data_offset + vector_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_vector_vertices,
            max_events,
            vector_data_floats,
            event_data_floats,
            vector_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_vector_vertices, config.max_events)
    }

    /// Pack one frame into `out`, resizing it to the full buffer size.
    ///
    /// `vertices` is a flat float slice (`VECTOR_VERTEX_FLOATS` per vertex).
    /// Data past either section's capacity is truncated; the header counts
    /// report what was actually written.
    pub fn pack_frame(
        &self,
        out: &mut Vec<f32>,
        header: &FrameHeader,
        vertices: &[f32],
        events: &[GameEvent],
    ) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let vertex_count = (vertices.len() / VECTOR_VERTEX_FLOATS).min(self.max_vector_vertices);
        let event_count = events.len().min(self.max_events);

        out[HEADER_FRAME_COUNTER] = header.frame_counter as f32;
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_VIEWPORT_WIDTH] = header.viewport.width;
        out[HEADER_VIEWPORT_HEIGHT] = header.viewport.height;
        out[HEADER_MAX_VECTOR_VERTICES] = self.max_vector_vertices as f32;
        out[HEADER_VECTOR_VERTEX_COUNT] = vertex_count as f32;
        out[HEADER_MAX_EVENTS] = self.max_events as f32;
        out[HEADER_EVENT_COUNT] = event_count as f32;
        out[HEADER_ELAPSED_MS] = header.elapsed_ms as f32;

        let vector_floats = vertex_count * VECTOR_VERTEX_FLOATS;
        out[self.vector_data_offset..self.vector_data_offset + vector_floats]
            .copy_from_slice(&vertices[..vector_floats]);

        let event_floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        out[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> FrameHeader {
        FrameHeader { frame_counter: 7, viewport: Viewport::new(800.0, 600.0), elapsed_ms: 116.0 }
    }

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_vector_vertices, 65536);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.vector_data_floats, 65536 * 6);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 65536 * 6 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);

        assert_eq!(layout.vector_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.vector_data_offset + layout.vector_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn pack_frame_writes_header_and_sections() {
        let layout = ProtocolLayout::new(4, 2);
        let vertices = [1.0, 2.0, 0.1, 0.2, 0.3, 1.0];
        let events = [GameEvent::haptic(50)];
        let mut out = Vec::new();
        layout.pack_frame(&mut out, &header(), &vertices, &events);

        assert_eq!(out.len(), layout.buffer_total_floats);
        assert_eq!(out[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_VECTOR_VERTEX_COUNT], 1.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(&out[layout.vector_data_offset..layout.vector_data_offset + 6], &vertices);
        assert_eq!(out[layout.event_data_offset], GameEvent::HAPTIC);
        assert_eq!(out[layout.event_data_offset + 1], 50.0);
    }

    #[test]
    fn pack_frame_truncates_overflow() {
        let layout = ProtocolLayout::new(1, 1);
        let vertices = [0.0; 12];
        let events = [GameEvent::haptic(10), GameEvent::haptic(20)];
        let mut out = Vec::new();
        layout.pack_frame(&mut out, &header(), &vertices, &events);

        assert_eq!(out[HEADER_VECTOR_VERTEX_COUNT], 1.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(out.len(), layout.buffer_total_floats);
    }
}
