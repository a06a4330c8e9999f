use verse_engine::{
    AssetManifest, EngineContext, FrameHeader, Game, GameConfig, Haptics, InputEvent, InputQueue,
    NoHaptics, ProtocolLayout, TextMeasurer,
};
#[cfg(feature = "vectors")]
use verse_engine::VectorState;

/// Generic runner that wires up the frame loop.
///
/// Each concrete illustration creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    config: GameConfig,
    layout: ProtocolLayout,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
    haptics: Box<dyn Haptics>,
    initialized: bool,
    /// Packed header + vertices + events for a single host read.
    frame_buffer: Vec<f32>,
    overflow_warned: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        Self::with_haptics(game, Box::new(NoHaptics))
    }

    pub fn with_haptics(game: G, haptics: Box<dyn Haptics>) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::with_config(&config),
            game,
            input: InputQueue::new(),
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            layout,
            config,
            haptics,
            initialized: false,
            frame_buffer: Vec::new(),
            overflow_warned: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Queue a surface resize; applied at the start of the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.input.push(InputEvent::Resize { width, height });
    }

    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.ctx.set_text_measurer(measurer);
    }

    /// Load an asset manifest. A malformed manifest is logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("manifest loaded: {} image(s)", manifest.images.len());
                self.ctx.set_manifest(manifest);
            }
            Err(e) => log::warn!("ignoring asset manifest: {}", e),
        }
    }

    /// Hand JSON settings to the game. Rejected settings leave the current ones in place.
    /// After init, the game is re-initialized so derived state picks them up.
    pub fn load_config(&mut self, json: &str) {
        match self.game.configure(json) {
            Ok(()) => {
                if self.initialized {
                    self.game.init(&mut self.ctx);
                }
            }
            Err(e) => log::warn!("ignoring config: {}", e),
        }
    }

    /// Run one frame: advance the clock, update the game, rasterize, dispatch events.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        if let Some((width, height)) = self.input.last_resize() {
            self.ctx.resize(width, height);
        }

        self.ctx.advance_clock(dt);
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        #[cfg(feature = "vectors")]
        {
            self.vectors.clear();
            self.vectors.rasterize(&self.ctx.draw);
            if self.vectors.overflowed() && !self.overflow_warned {
                log::warn!(
                    "vector budget of {} vertices exceeded; shapes dropped",
                    self.vectors.max_vertices()
                );
                self.overflow_warned = true;
            }
        }

        for event in &self.ctx.events {
            if event.is_haptic() {
                self.haptics.pulse(event.a.max(0.0) as u32);
            }
        }

        self.pack_frame();
    }

    fn pack_frame(&mut self) {
        let header = FrameHeader {
            frame_counter: self.ctx.frame_count(),
            viewport: self.ctx.viewport,
            elapsed_ms: self.ctx.elapsed_ms(),
        };
        #[cfg(feature = "vectors")]
        let vertices = self.vectors.as_slice();
        #[cfg(not(feature = "vectors"))]
        let vertices: &[f32] = &[];
        self.layout.pack_frame(&mut self.frame_buffer, &header, vertices, &self.ctx.events);
    }

    /// The current frame's draw list as JSON, for Canvas2D hosts.
    pub fn frame_json(&self) -> String {
        match self.ctx.draw.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("draw list serialization failed: {}", e);
                String::from("[]")
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn frame_buffer_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.height
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.ctx.elapsed_ms()
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;
    use verse_engine::bridge::protocol::{HEADER_EVENT_COUNT, HEADER_VIEWPORT_WIDTH};
    use verse_engine::Color;

    /// Draws one dot and buzzes on every frame after the first.
    struct Blinker {
        radius: f32,
        inits: u32,
    }

    impl Game for Blinker {
        fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
            self.radius = serde_json::from_str(json)?;
            Ok(())
        }

        fn init(&mut self, _ctx: &mut EngineContext) {
            self.inits += 1;
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            ctx.draw.fill_circle(ctx.viewport.center(), self.radius, Color::WHITE);
            if ctx.frame_count() > 1 {
                ctx.request_haptic(50);
            }
        }
    }

    struct CountingHaptics(Rc<Cell<u32>>);

    impl Haptics for CountingHaptics {
        fn pulse(&mut self, duration_ms: u32) {
            assert_eq!(duration_ms, 50);
            self.0.set(self.0.get() + 1);
        }
    }

    fn runner() -> GameRunner<Blinker> {
        let mut runner = GameRunner::new(Blinker { radius: 10.0, inits: 0 });
        runner.init();
        runner
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Blinker { radius: 10.0, inits: 0 });
        runner.tick(0.016);
        assert_eq!(runner.elapsed_ms(), 0.0);
        assert!(runner.context().draw.is_empty());
    }

    #[test]
    fn tick_advances_clock_and_draws() {
        let mut runner = runner();
        runner.tick(0.016);
        runner.tick(0.016);
        assert!((runner.elapsed_ms() - 32.0).abs() < 1e-3);
        assert_eq!(runner.context().draw.len(), 1);
        assert!(runner.frame_json().contains("circle"));
    }

    #[test]
    fn resize_applies_on_next_tick() {
        let mut runner = runner();
        runner.resize(1024.0, 768.0);
        runner.tick(0.016);
        assert_eq!(runner.viewport_width(), 1024.0);
        assert_eq!(runner.viewport_height(), 768.0);
        assert_eq!(runner.frame_buffer[HEADER_VIEWPORT_WIDTH], 1024.0);
        match &runner.context().draw.commands()[0] {
            verse_engine::DrawCommand::Circle { center, .. } => {
                assert_eq!(*center, Vec2::new(512.0, 384.0))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn haptic_events_reach_the_host() {
        let count = Rc::new(Cell::new(0));
        let mut runner = GameRunner::with_haptics(
            Blinker { radius: 10.0, inits: 0 },
            Box::new(CountingHaptics(count.clone())),
        );
        runner.init();
        runner.tick(0.016);
        assert_eq!(count.get(), 0);
        runner.tick(0.016);
        runner.tick(0.016);
        assert_eq!(count.get(), 2);
        assert_eq!(runner.game_events_len(), 1);
        assert_eq!(runner.frame_buffer[HEADER_EVENT_COUNT], 1.0);
    }

    #[test]
    fn config_reinitializes_and_bad_config_is_ignored() {
        let mut runner = runner();
        runner.load_config("25.0");
        assert_eq!(runner.game().radius, 25.0);
        assert_eq!(runner.game().inits, 2);

        runner.load_config("{ not a number");
        assert_eq!(runner.game().radius, 25.0);
        assert_eq!(runner.game().inits, 2);
    }

    #[test]
    fn bad_manifest_keeps_previous() {
        let mut runner = runner();
        runner.load_manifest(r#"{"images": {"rider_face": {"path": "face.png"}}}"#);
        runner.load_manifest("nope");
        assert!(runner.context().has_image("rider_face"));
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn vectors_are_rasterized_each_frame() {
        let mut runner = runner();
        runner.tick(0.016);
        let first = runner.vector_vertex_count();
        assert!(first > 0);
        runner.tick(0.016);
        assert_eq!(runner.vector_vertex_count(), first);
    }
}
