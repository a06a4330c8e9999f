/// Solar Rider: a looping, non-interactive solar system with a rocket rider.
///
/// Every frame is rebuilt from the elapsed time. The only carried state is
/// the rider's launch sequence (direction memory, activation gate and the
/// ignition edge). Ignition asks the host for one short vibration per loop.

use verse_engine::api::game::GameConfig;
use verse_engine::input::queue::InputQueue;
use verse_engine::*;

use crate::clock::ClockState;
use crate::config::ShowConfig;
use crate::rider::RiderSequence;
use crate::scene::{Frame, SceneRenderer};

const WORLD_W: f32 = 1280.0;
const WORLD_H: f32 = 720.0;
/// Every primitive is a few dozen triangles; the starfield dominates.
const MAX_VECTOR_VERTICES: usize = 131_072;

pub struct SolarRider {
    config: ShowConfig,
    renderer: SceneRenderer,
    rider: RiderSequence,
}

impl SolarRider {
    pub fn new() -> Self {
        Self::with_config(ShowConfig::default())
    }

    pub fn with_config(config: ShowConfig) -> Self {
        Self {
            renderer: SceneRenderer::new(&config),
            rider: RiderSequence::new(config.activation_delay_ms),
            config,
        }
    }
}

impl Default for SolarRider {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarRider {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_vector_vertices: MAX_VECTOR_VERTICES,
            ..Default::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.config = ShowConfig::from_json(json)?;
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.renderer = SceneRenderer::new(&self.config);
        self.rider = RiderSequence::new(self.config.activation_delay_ms);
        log::info!(
            "solar-rider: {}x{} viewport, {} stars, face image {}",
            ctx.viewport.width,
            ctx.viewport.height,
            self.config.star_count,
            if ctx.has_image(&self.config.face_image) { "present" } else { "absent" },
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
        let elapsed = ctx.elapsed_ms();
        let clock = ClockState::sample(elapsed);

        let rider = self.rider.update(elapsed, clock.jump_altitude);
        if rider.ignited {
            ctx.request_haptic(self.config.haptic_ms);
        }

        // The frame borrows the context's measurer, so draw into a detached list
        let mut draw = std::mem::take(&mut ctx.draw);
        let face = ctx.has_image(&self.config.face_image).then_some(self.config.face_image.as_str());
        let frame = Frame {
            clock,
            viewport: ctx.viewport,
            rider: Some(rider),
            text: ctx.text_measurer(),
            face_image: face,
        };
        self.renderer.render(&mut draw, &frame);
        ctx.draw = draw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::JUMP_PERIOD_MS;

    fn run(game: &mut SolarRider, ctx: &mut EngineContext, seconds: f32, dt: f32) -> Vec<(u64, Vec<GameEvent>)> {
        let input = InputQueue::new();
        let mut events = Vec::new();
        let frames = (seconds / dt).round() as usize;
        for _ in 0..frames {
            ctx.clear_frame_data();
            ctx.advance_clock(dt);
            game.update(ctx, &input);
            if !ctx.events.is_empty() {
                events.push((ctx.frame_count(), ctx.events.clone()));
            }
        }
        events
    }

    #[test]
    fn one_haptic_per_launch_loop() {
        let mut game = SolarRider::new();
        let mut ctx = EngineContext::with_config(&game.config());
        game.init(&mut ctx);

        let loops = 2;
        let events = run(&mut game, &mut ctx, (JUMP_PERIOD_MS as f32 / 1000.0) * loops as f32, 1.0 / 60.0);
        assert_eq!(events.len(), loops);
        for (_, frame_events) in &events {
            assert_eq!(frame_events.len(), 1);
            assert!(frame_events[0].is_haptic());
            assert_eq!(frame_events[0].a, 50.0);
        }
    }

    #[test]
    fn configured_haptic_length_is_used() {
        let mut game = SolarRider::new();
        game.configure(r#"{ "haptic_ms": 120 }"#).unwrap();
        let mut ctx = EngineContext::with_config(&game.config());
        game.init(&mut ctx);

        let events = run(&mut game, &mut ctx, 4.0, 1.0 / 30.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1[0].a, 120.0);
    }

    #[test]
    fn bad_config_is_rejected_and_kept() {
        let mut game = SolarRider::new();
        assert!(game.configure("{ not json").is_err());
        assert_eq!(game.config, ShowConfig::default());
    }

    #[test]
    fn same_time_same_frame() {
        let draw_at = |t_s: f32| {
            let mut game = SolarRider::new();
            let mut ctx = EngineContext::with_config(&game.config());
            game.init(&mut ctx);
            ctx.advance_clock(t_s);
            game.update(&mut ctx, &InputQueue::new());
            ctx.draw.clone()
        };
        assert_eq!(draw_at(0.2), draw_at(0.2));
        assert_ne!(draw_at(0.2), draw_at(0.24));
    }

    #[test]
    fn rider_hidden_before_activation() {
        let text_count = |json: &str| {
            let mut game = SolarRider::new();
            game.configure(json).unwrap();
            let mut ctx = EngineContext::with_config(&game.config());
            game.init(&mut ctx);
            run(&mut game, &mut ctx, 5.0, 0.1);
            ctx.draw.iter().filter(|c| matches!(c, DrawCommand::Text { .. })).count()
        };
        // Sun, two title passes and eight planet labels
        assert_eq!(text_count(r#"{ "activation_delay_ms": 6000 }"#), 11);
        assert!(text_count("{}") > 11);
    }

    #[test]
    fn face_image_only_when_declared() {
        let image_count = |manifest: Option<&str>| {
            let mut game = SolarRider::new();
            let mut ctx = EngineContext::with_config(&game.config());
            if let Some(json) = manifest {
                ctx.set_manifest(AssetManifest::from_json(json).unwrap());
            }
            game.init(&mut ctx);
            // Mid-ascent, well past activation
            for _ in 0..25 {
                ctx.clear_frame_data();
                ctx.advance_clock(0.2);
                game.update(&mut ctx, &InputQueue::new());
            }
            ctx.draw.iter().filter(|c| matches!(c, DrawCommand::Image { .. })).count()
        };
        assert_eq!(image_count(None), 0);
        assert_eq!(image_count(Some(r#"{ "images": { "rider_face": { "path": "face.png" } } }"#)), 1);
    }

    #[test]
    fn empty_viewport_emits_nothing_but_still_pulses() {
        let mut game = SolarRider::new();
        let mut ctx = EngineContext::with_config(&game.config());
        ctx.resize(0.0, 0.0);
        game.init(&mut ctx);
        let events = run(&mut game, &mut ctx, 3.0, 1.0 / 60.0);
        assert!(ctx.draw.is_empty());
        assert_eq!(events.len(), 1);
    }
}
