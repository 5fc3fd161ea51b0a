//! High-level mesh construction

use crate::buffer::{AccessorIndex, BufferBuilder};
use crate::error::GlbError;

/// Accessor indices for a mesh
#[derive(Debug, Clone)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub indices: AccessorIndex,
}

/// Builder for indexed triangle-list mesh data
pub struct MeshBuilder {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Set positions (required)
    pub fn positions(mut self, positions: &[[f32; 3]]) -> Self {
        self.positions = positions.to_vec();
        self
    }

    /// Set triangle indices, three per triangle
    pub fn indices(mut self, indices: &[u32]) -> Self {
        self.indices = indices.to_vec();
        self
    }

    /// Check the index list against the vertex count
    pub fn validate(&self) -> Result<(), GlbError> {
        if self.positions.is_empty() {
            return Err(GlbError::EmptyMesh);
        }
        if self.indices.len() % 3 != 0 {
            return Err(GlbError::IncompleteTriangle(self.indices.len()));
        }
        let vertex_count = self.positions.len();
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(GlbError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Validate, then pack positions followed by indices into `buffer`
    pub fn build(self, buffer: &mut BufferBuilder) -> Result<MeshAccessors, GlbError> {
        self.validate()?;
        let positions = buffer.pack_positions(&self.positions);
        let indices = buffer.pack_indices_u32(&self.indices);

        Ok(MeshAccessors { positions, indices })
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}
