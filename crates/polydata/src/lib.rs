//! polydata-rs: build indexed polygon meshes from raw vertex and face arrays.
//!
//! Points may be given in 1, 2 or 3 dimensions (missing coordinates are
//! zero). Faces are rows of point indices, optionally one-based or otherwise
//! offset. The result is a [`PolyData`] holding vertex, line and polygon
//! cells over the point set.
//!
//! # Quick Start
//!
//! ```
//! use polydata_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
//!     let faces = [[0i64, 1, 2], [0, 2, 3]];
//!     let mesh = build_poly_data(&points, Some(&faces[..]), None, 0)?;
//!     assert_eq!(mesh.num_polys(), 2);
//!     println!("{mesh}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Building
//!
//! - Without faces every point becomes a vertex cell.
//! - Tables whose rows all share one length (other than four) and need no
//!   index offset are written in one bulk pass.
//! - Everything else is inserted face by face. Four-index rows become the
//!   four triangles `(0,1,2) (0,1,3) (1,2,3) (2,3,0)`.
//!
//! [`PolyMeshBuilder`] exposes the knobs: [`Options`], index offset, line
//! sequences and a [`ProgressObserver`] for long incremental builds.

// Re-export core types
pub use polydata_core::{
    cell_array::CellArray,
    error::{CellKind, PolydataError, Result},
    index::{IndexBuffer, IndexWidth},
    math,
    options::Options,
    poly_data::PolyData,
    precision::{precision, precision_in_range, precision_seq},
    progress::{ProgressBar, ProgressObserver},
    util, DMat4, DQuat, DVec3,
};

// Re-export structures
pub use polydata_structures::{
    build_poly_data,
    camera_view::{self, CameraPose},
    poly_mesh::{
        self, select_strategy, BulkStrategy, IncrementalStrategy, MeshBuildStrategy,
        PolyMeshBuilder, StrategyKind,
    },
    tri_mesh::TriMesh,
};

/// Installs an `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls are no-ops. Filter with
/// `RUST_LOG`, e.g. `RUST_LOG=polydata_structures=debug` shows which build
/// strategy each mesh took.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Builds poly data from a JSON options file.
///
/// Missing options fall back to their defaults.
pub fn build_with_options_file<P, F>(
    options_path: impl AsRef<std::path::Path>,
    points: &[P],
    faces: Option<&[F]>,
) -> Result<PolyData>
where
    P: AsRef<[f64]>,
    F: AsRef<[i64]>,
{
    let options = Options::load(options_path)?;
    log::debug!("loaded build options: {options:?}");
    PolyMeshBuilder::with_options(options).build_optional(points, faces)
}
