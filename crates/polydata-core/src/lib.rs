//! Core types for polydata-rs.
//!
//! This crate provides the building blocks shared by the mesh builders:
//! - [`CellArray`] and [`IndexBuffer`] for counted cell connectivity
//! - [`PolyData`], the finished point set plus vertex/line/polygon cells
//! - [`Options`] for build configuration
//! - [`ProgressObserver`] and [`ProgressBar`] for long builds
//! - number formatting and small geometry helpers used in diagnostics

// Index and coordinate code intentionally converts between integer widths and floats
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod cell_array;
pub mod error;
pub mod index;
pub mod math;
pub mod options;
pub mod poly_data;
pub mod precision;
pub mod progress;
pub mod util;

pub use cell_array::CellArray;
pub use error::{CellKind, PolydataError, Result};
pub use index::{IndexBuffer, IndexWidth};
pub use options::Options;
pub use poly_data::PolyData;
pub use precision::{precision, precision_in_range, precision_seq};
pub use progress::{ProgressBar, ProgressObserver};

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec3};
