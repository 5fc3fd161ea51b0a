//! GLB (binary glTF 2.0) construction utilities
//!
//! This library provides builder-pattern APIs for constructing GLB files:
//! - BufferBuilder: Pack binary data with automatic alignment
//! - MeshBuilder: Validated indexed triangle-list meshes
//! - GltfBuilder: Top-level GLTF document construction
//! - GlbWriter: Cursor-tracking container writer used by `assemble_glb`
//!
//! `assemble_glb` refuses to emit a file whose JSON offsets and lengths
//! disagree with the binary chunk. `parse_glb` reads a container back.
//!
//! # Example
//!
//! ```no_run
//! use glb_builder::*;
//!
//! let mut buffer = BufferBuilder::new();
//! let mesh = MeshBuilder::new()
//!     .positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]])
//!     .indices(&[0, 1, 2])
//!     .build(&mut buffer)?;
//!
//! let gltf = GltfBuilder::new()
//!     .buffer_byte_length(buffer.data().len() as u64)
//!     .add_mesh_from_accessors(Some("Triangle"), &mesh)
//!     .add_mesh_node(json::Index::new(0))
//!     .add_scene(None, &[0]);
//!
//! let root = gltf.build(buffer.views(), buffer.accessors(), "glb-builder");
//! let glb_bytes = assemble_glb(&root, buffer.data())?;
//! # Ok::<(), GlbError>(())
//! ```

pub mod buffer;
pub mod document;
pub mod error;
pub mod mesh;
pub mod reader;
pub mod utils;
pub mod validate;
pub mod writer;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::GltfBuilder;
pub use error::GlbError;
pub use mesh::{MeshAccessors, MeshBuilder};
pub use reader::{GlbChunks, GlbHeader, parse_glb};
pub use utils::{align_buffer, assemble_glb, compute_bounds, serialize_root};
pub use validate::validate_layout;
pub use writer::{ChunkType, GLB_MAGIC, GLB_VERSION, GlbWriter};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
