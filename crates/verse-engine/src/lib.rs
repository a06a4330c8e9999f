pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{GameEvent, Viewport, REFERENCE_EXTENT};
pub use api::host::{TextMeasurer, ApproxTextMeasurer, Haptics, NoHaptics};
pub use crate::core::time::{FrameClock, OneShot, MAX_FRAME_DT};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, ImageDescriptor};
pub use bridge::protocol::{ProtocolLayout, FrameHeader};
pub use systems::draw::{
    Color, Paint, Style, PathData, PathVerb, FontWeight, TextStyle, ClipCircle,
    DrawCommand, DrawList,
};
pub use systems::geometry::{direction_unit, polar_point};
pub use systems::rng::Rng;

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex};

// Extensions: clock-driven animation primitives
pub use extensions::{
    Easing, lerp, lerp_vec2, ease,
    Channel, ChannelLoop, Keyframe, KeyframeTrack,
};
