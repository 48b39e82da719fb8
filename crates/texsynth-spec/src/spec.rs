//! Top-level spec document.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// A texture generation request: metadata, output range and a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureSpec {
    /// Spec format version. Must be [`SPEC_VERSION`].
    pub spec_version: u32,
    /// Stable identifier, `^[a-z][a-z0-9_-]{2,63}$`.
    pub asset_id: String,
    /// Value range the encoder should preserve.
    #[serde(default)]
    pub dynamic_range: DynamicRange,
    /// Generation parameters.
    pub recipe: Recipe,
}

impl TextureSpec {
    /// Creates a spec at the current version with standard dynamic range.
    pub fn new(asset_id: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            spec_version: SPEC_VERSION,
            asset_id: asset_id.into(),
            dynamic_range: DynamicRange::default(),
            recipe,
        }
    }

    /// Sets the dynamic range.
    pub fn with_dynamic_range(mut self, dynamic_range: DynamicRange) -> Self {
        self.dynamic_range = dynamic_range;
        self
    }

    /// Parses a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Sample value range of the encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicRange {
    /// Standard range, values clamped to [0, 1] when encoded.
    #[default]
    Ldr,
    /// Extended range, values encoded as floats.
    Hdr,
}
