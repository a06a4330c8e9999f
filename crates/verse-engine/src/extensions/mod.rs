// extensions/mod.rs
//
// Animation primitives for verse-engine.
// Decoupled from the draw list. Games sample channels and feed values to their renderer.

pub mod channel;
pub mod easing;
pub mod keyframes;

pub use channel::{Channel, ChannelLoop};
pub use easing::{Easing, lerp, lerp_vec2, ease};
pub use keyframes::{Keyframe, KeyframeTrack};
