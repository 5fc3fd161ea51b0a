//! Utility functions for GLB construction

use crate::error::GlbError;
use crate::validate::validate_layout;
use crate::writer::{ChunkType, GlbWriter, glb_length};
use gltf_json as json;
use tracing::debug;

/// glTF enum value for a triangle list
const MODE_TRIANGLES: u32 = 4;

/// Compute bounding box for positions
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Align buffer to 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }
}

/// Serialize the document to UTF-8 JSON.
///
/// gltf-json drops `mode` when it equals the default; it is written back
/// so every primitive states its topology.
pub fn serialize_root(root: &json::Root) -> Result<Vec<u8>, GlbError> {
    let mut value = serde_json::to_value(root)?;

    if let Some(meshes) = value.get_mut("meshes").and_then(|m| m.as_array_mut()) {
        let primitives = meshes
            .iter_mut()
            .filter_map(|mesh| mesh.get_mut("primitives").and_then(|p| p.as_array_mut()))
            .flatten();
        for primitive in primitives {
            if let Some(fields) = primitive.as_object_mut() {
                fields
                    .entry("mode")
                    .or_insert_with(|| serde_json::Value::from(MODE_TRIANGLES));
            }
        }
    }

    Ok(serde_json::to_vec(&value)?)
}

/// Assemble GLB binary from JSON and buffer data
///
/// The layout is validated before anything is written.
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Result<Vec<u8>, GlbError> {
    validate_layout(root, buffer_data)?;

    let json_bytes = serialize_root(root)?;
    let total_length = glb_length(json_bytes.len(), buffer_data.len());
    debug!(
        json_len = json_bytes.len(),
        bin_len = buffer_data.len(),
        total_length,
        "assembling GLB"
    );

    let mut writer = GlbWriter::with_capacity(total_length);
    writer.write_header(total_length)?;
    writer.write_chunk(ChunkType::Json, &json_bytes)?;
    writer.write_chunk(ChunkType::Bin, buffer_data)?;
    writer.finish()
}
