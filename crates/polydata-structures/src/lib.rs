//! Structure implementations for polydata-rs.
//!
//! This crate provides the concrete builders and companions of [`PolyData`]:
//! - Poly mesh building from point and index tables, with bulk and
//!   incremental strategies
//! - Triangle mesh interchange
//! - Camera poses
//!
//! [`PolyData`]: polydata_core::PolyData

// Index code intentionally converts between signed and unsigned widths
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod camera_view;
pub mod poly_mesh;
pub mod tri_mesh;

pub use camera_view::CameraPose;
pub use poly_mesh::{build_poly_data, PolyMeshBuilder, StrategyKind};
pub use tri_mesh::TriMesh;
