use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the images a host has decoded for an illustration.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named image lookup: name → descriptor.
    #[serde(default)]
    pub images: HashMap<String, ImageDescriptor>,
}

/// Describes a single image asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Relative path to the image file (e.g., "rajesh.png").
    pub path: String,
    /// Intrinsic width in pixels, if known.
    #[serde(default)]
    pub width: Option<u32>,
    /// Intrinsic height in pixels, if known.
    #[serde(default)]
    pub height: Option<u32>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn image(&self, name: &str) -> Option<&ImageDescriptor> {
        self.images.get(name)
    }
}
