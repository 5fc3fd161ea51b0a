//! Placeholder cube encoding
//!
//! Produces the stand-in asset served when 3D generation is unavailable:
//! one scene, one node, one mesh with a single triangle-list primitive.

use crate::cube::{CubeParams, build_cube};
use crate::error::PlaceholderError;
use glb_builder::{BufferBuilder, GltfBuilder, MeshBuilder, assemble_glb, json};
use tracing::debug;

/// Value of `asset.generator` in emitted files
pub const GENERATOR: &str = concat!("placeholder-glb ", env!("CARGO_PKG_VERSION"));

/// Encode a cube as a complete GLB
pub fn encode_cube(params: &CubeParams) -> Result<Vec<u8>, PlaceholderError> {
    let cube = build_cube(params)?;

    let mut buffer = BufferBuilder::new();
    let mesh = MeshBuilder::new()
        .positions(&cube.positions)
        .indices(&cube.indices)
        .build(&mut buffer)?;

    let root = GltfBuilder::new()
        .buffer_byte_length(buffer.data().len() as u64)
        .add_mesh_from_accessors(None, &mesh)
        .add_mesh_node(json::Index::new(0))
        .add_scene(None, &[0])
        .build(buffer.views(), buffer.accessors(), GENERATOR);

    let glb = assemble_glb(&root, buffer.data())?;
    debug!(
        vertices = cube.positions.len(),
        indices = cube.indices.len(),
        bytes = glb.len(),
        "encoded placeholder cube"
    );
    Ok(glb)
}

/// The default placeholder asset: a 100-unit cube from the origin, 24 vertices.
///
/// Deterministic; every call returns the same bytes.
pub fn generate_placeholder_glb() -> Vec<u8> {
    encode_cube(&CubeParams::default()).expect("default cube parameters are valid")
}
