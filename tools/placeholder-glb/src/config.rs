//! TOML configuration for the placeholder cube
//!
//! ```toml
//! size = 100.0
//! origin = [0.0, 0.0, 0.0]
//! layout = "per-face"   # or "shared"
//! ```

use crate::cube::{CubeParams, VertexLayout};
use crate::error::PlaceholderError;
use serde::Deserialize;
use std::path::Path;

/// Placeholder settings; missing keys fall back to the default cube
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    pub size: f32,
    pub origin: [f32; 3],
    pub layout: VertexLayout,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        let params = CubeParams::default();
        Self {
            size: params.size,
            origin: params.origin,
            layout: params.layout,
        }
    }
}

impl PlaceholderConfig {
    /// Parse and validate a config document
    pub fn from_toml_str(text: &str) -> Result<Self, PlaceholderError> {
        let config: Self = toml::from_str(text)?;
        config.cube_params().validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, PlaceholderError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn cube_params(&self) -> CubeParams {
        CubeParams {
            size: self.size,
            origin: self.origin,
            layout: self.layout,
        }
    }
}
