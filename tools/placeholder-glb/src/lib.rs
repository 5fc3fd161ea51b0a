//! placeholder-glb library
//!
//! Builds the stand-in GLB returned when image-to-3D generation is
//! unavailable: a single untextured cube, valid for any glTF 2.0 viewer.

pub mod config;
pub mod cube;
pub mod encoder;
pub mod error;

pub use config::PlaceholderConfig;
pub use cube::{CubeMesh, CubeParams, VertexLayout, build_cube};
pub use encoder::{GENERATOR, encode_cube, generate_placeholder_glb};
pub use error::PlaceholderError;
