//! Plain triangle mesh interchange.

use serde::{Deserialize, Serialize};

use polydata_core::error::Result;
use polydata_core::options::Options;
use polydata_core::PolyData;

use crate::poly_mesh::PolyMeshBuilder;

/// A bare vertex/triangle table, as exchanged with other mesh libraries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    /// Vertex positions.
    pub vertices: Vec<[f64; 3]>,
    /// Triangles as zero-based vertex ids.
    pub faces: Vec<[usize; 3]>,
}

impl TriMesh {
    /// Creates a triangle mesh.
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Converts poly data, fan-triangulating its polygons.
    ///
    /// Vertex and line cells are dropped.
    pub fn from_poly_data(poly: &PolyData) -> Self {
        Self {
            vertices: poly.points().iter().map(|p| p.to_array()).collect(),
            faces: poly.triangles(),
        }
    }

    /// Builds poly data from this mesh.
    ///
    /// A mesh without faces becomes a point cloud with one vertex cell per
    /// vertex. A mesh with neither vertices nor faces becomes empty poly data.
    pub fn to_poly_data(&self, options: &Options) -> Result<PolyData> {
        if self.vertices.is_empty() && self.faces.is_empty() {
            return Ok(PolyData::empty(options.index_width));
        }
        let builder = PolyMeshBuilder::with_options(options.clone());
        if self.faces.is_empty() {
            return builder.build_points(&self.vertices);
        }
        let faces: Vec<[i64; 3]> = self
            .faces
            .iter()
            .map(|f| f.map(|id| id as i64))
            .collect();
        builder.build(&self.vertices, &faces)
    }

    /// Returns the number of triangles.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}
