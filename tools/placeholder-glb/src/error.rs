//! Placeholder generation errors

use glb_builder::GlbError;

#[derive(Debug, thiserror::Error)]
pub enum PlaceholderError {
    /// Cube parameters cannot describe a viewable mesh
    #[error("invalid cube parameters: {0}")]
    InvalidParams(String),

    /// Container assembly failed its layout checks
    #[error("GLB assembly failed: {0}")]
    Glb(#[from] GlbError),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this tool
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
