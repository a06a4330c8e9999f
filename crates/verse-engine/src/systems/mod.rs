pub mod draw;
pub mod geometry;
pub mod rng;
#[cfg(feature = "vectors")]
pub mod vector;
