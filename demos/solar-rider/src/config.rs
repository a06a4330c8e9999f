//! Show settings a host may override through `game_load_config(json)`.
//! Every field has a default, so a partial JSON object is enough.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    /// Delay after start before the rider may appear.
    pub activation_delay_ms: f64,
    /// Length of the ignition vibration.
    pub haptic_ms: u32,
    pub star_count: usize,
    pub star_seed: u64,
    pub nebula_count: usize,
    pub nebula_seed: u64,
    pub title: String,
    /// Manifest name of the image shown in the cockpit window.
    pub face_image: String,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            activation_delay_ms: 500.0,
            haptic_ms: 50,
            star_count: 200,
            star_seed: 42,
            nebula_count: 3,
            nebula_seed: 99,
            title: String::from("ComposeVerse"),
            face_image: String::from("rider_face"),
        }
    }
}

impl ShowConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
