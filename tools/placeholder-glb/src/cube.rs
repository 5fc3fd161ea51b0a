//! Axis-aligned cube geometry
//!
//! Corners are numbered so that bit patterns read (x, y, z):
//! 0=000 1=100 2=110 3=010 4=001 5=101 6=111 7=011.
//! Each face lists its corners counter-clockwise seen from outside, so the
//! triangles (0, 1, 2) and (0, 2, 3) of every quad face outward.

use crate::error::PlaceholderError;
use serde::Deserialize;

/// Unit-cube corner offsets
const CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Corner indices per face, counter-clockwise from outside
const FACES: [[u32; 4]; 6] = [
    [0, 3, 2, 1], // -Z
    [4, 5, 6, 7], // +Z
    [0, 1, 5, 4], // -Y
    [3, 7, 6, 2], // +Y
    [0, 4, 7, 3], // -X
    [1, 2, 6, 5], // +X
];

/// Two triangles over a quad's corners
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Triangles in a cube
pub const TRIANGLE_COUNT: usize = FACES.len() * 2;
/// Indices in a cube regardless of layout
pub const INDEX_COUNT: usize = TRIANGLE_COUNT * 3;

/// How faces share vertices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VertexLayout {
    /// 8 corner vertices shared between faces
    Shared,
    /// 4 vertices per face, 24 total
    #[default]
    PerFace,
}

impl VertexLayout {
    pub const fn vertex_count(self) -> usize {
        match self {
            VertexLayout::Shared => CORNERS.len(),
            VertexLayout::PerFace => FACES.len() * 4,
        }
    }
}

/// Placement and layout of the cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeParams {
    /// Edge length
    pub size: f32,
    /// Minimum corner
    pub origin: [f32; 3],
    pub layout: VertexLayout,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            size: 100.0,
            origin: [0.0; 3],
            layout: VertexLayout::PerFace,
        }
    }
}

impl CubeParams {
    pub fn validate(&self) -> Result<(), PlaceholderError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PlaceholderError::InvalidParams(format!(
                "size must be finite and positive, got {}",
                self.size
            )));
        }
        if let Some(component) = self.origin.iter().find(|c| !c.is_finite()) {
            return Err(PlaceholderError::InvalidParams(format!(
                "origin components must be finite, got {component}"
            )));
        }
        let (_, max) = self.bounds();
        if max.iter().any(|c| !c.is_finite()) {
            return Err(PlaceholderError::InvalidParams(format!(
                "far corner {max:?} is not finite"
            )));
        }
        Ok(())
    }

    /// Minimum and maximum corners
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        (self.corner(0), self.corner(6))
    }

    fn corner(&self, index: usize) -> [f32; 3] {
        let unit = CORNERS[index];
        [
            self.origin[0] + unit[0] * self.size,
            self.origin[1] + unit[1] * self.size,
            self.origin[2] + unit[2] * self.size,
        ]
    }
}

/// Vertex positions and triangle indices of a cube
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Build the cube described by `params`
pub fn build_cube(params: &CubeParams) -> Result<CubeMesh, PlaceholderError> {
    params.validate()?;

    let mut positions = Vec::with_capacity(params.layout.vertex_count());
    let mut indices = Vec::with_capacity(INDEX_COUNT);

    match params.layout {
        VertexLayout::Shared => {
            positions.extend((0..CORNERS.len()).map(|i| params.corner(i)));
            for face in &FACES {
                indices.extend(QUAD_TRIANGLES.iter().map(|&q| face[q]));
            }
        }
        VertexLayout::PerFace => {
            for face in &FACES {
                let base = positions.len() as u32;
                positions.extend(face.iter().map(|&c| params.corner(c as usize)));
                indices.extend(QUAD_TRIANGLES.iter().map(|&q| base + q as u32));
            }
        }
    }

    Ok(CubeMesh { positions, indices })
}
