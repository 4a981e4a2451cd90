//! Point normalization.

use glam::DVec3;
use polydata_core::error::{PolydataError, Result};

/// Promotes 1D and 2D coordinates to 3D by zero-padding.
pub(crate) fn normalize_points<P: AsRef<[f64]>>(points: &[P]) -> Result<Vec<DVec3>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| match *p.as_ref() {
            [x] => Ok(DVec3::new(x, 0.0, 0.0)),
            [x, y] => Ok(DVec3::new(x, y, 0.0)),
            [x, y, z] => Ok(DVec3::new(x, y, z)),
            ref other => Err(PolydataError::InvalidDimension {
                point: i,
                components: other.len(),
            }),
        })
        .collect()
}
