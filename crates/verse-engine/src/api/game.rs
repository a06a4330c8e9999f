use glam::Vec2;

use crate::api::host::{ApproxTextMeasurer, TextMeasurer};
use crate::api::types::{GameEvent, Viewport};
use crate::assets::manifest::AssetManifest;
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::systems::draw::{DrawList, TextStyle};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial surface width until the host reports a resize.
    pub world_width: f32,
    /// Initial surface height until the host reports a resize.
    pub world_height: f32,
    /// Maximum number of tessellated vector vertices per frame (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            max_vector_vertices: 65536,
            max_events: 32,
        }
    }
}

/// The core contract every illustration must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply host-supplied JSON settings. Called before or between frames.
    /// The default ignores them.
    fn configure(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Build any state that depends on the configuration.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The frame tick: read the clock, emit this frame's draw list and events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    /// Draw commands for the current frame, in painter's order.
    pub draw: DrawList,
    /// Side-channel events for the current frame.
    pub events: Vec<GameEvent>,
    /// Current drawing surface.
    pub viewport: Viewport,
    clock: FrameClock,
    text: Box<dyn TextMeasurer>,
    manifest: Option<AssetManifest>,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            draw: DrawList::new(),
            events: Vec::with_capacity(config.max_events),
            viewport: Viewport::new(config.world_width, config.world_height),
            clock: FrameClock::new(),
            text: Box::new(ApproxTextMeasurer),
            manifest: None,
            max_events: config.max_events,
        }
    }

    /// Milliseconds since the illustration started.
    pub fn elapsed_ms(&self) -> f64 {
        self.clock.elapsed_ms()
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Advance the frame clock by one host frame. Called by the runner.
    pub fn advance_clock(&mut self, dt: f32) -> f64 {
        self.clock.advance(dt)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full ({}), dropping kind {}", self.max_events, event.kind);
        }
    }

    /// Ask the host for a short vibration.
    pub fn request_haptic(&mut self, duration_ms: u32) {
        self.emit_event(GameEvent::haptic(duration_ms));
    }

    /// Clear per-frame transient data (draw list, events).
    pub fn clear_frame_data(&mut self) {
        self.draw.clear();
        self.events.clear();
    }

    /// Replace the text measurer (the host's font metrics).
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.text = measurer;
    }

    pub fn measure_text(&self, text: &str, style: &TextStyle) -> Vec2 {
        self.text.measure(text, style)
    }

    pub fn text_measurer(&self) -> &dyn TextMeasurer {
        self.text.as_ref()
    }

    pub fn set_manifest(&mut self, manifest: AssetManifest) {
        self.manifest = Some(manifest);
    }

    pub fn manifest(&self) -> Option<&AssetManifest> {
        self.manifest.as_ref()
    }

    /// Whether the host has declared an image under `name`.
    pub fn has_image(&self, name: &str) -> bool {
        self.manifest.as_ref().is_some_and(|m| m.has_image(name))
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
