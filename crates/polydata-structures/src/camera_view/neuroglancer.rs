//! Camera poses from neuroglancer viewer state.

use glam::DVec3;
use serde_json::Value;

use polydata_core::error::{PolydataError, Result};

use super::CameraPose;

/// Zoom multiplier mapping a perspective zoom of 1 to 300 units of backoff.
pub const DEFAULT_NEUROGLANCER_ZOOM: f64 = 300.0;

/// Perspective zoom assumed when the state has none.
pub const DEFAULT_PERSPECTIVE_ZOOM: f64 = 10.0;

impl CameraPose {
    /// Creates a pose matching a neuroglancer state document.
    ///
    /// Reads `navigation.pose.position.voxelCoordinates` and `voxelSize`
    /// (their product is the focus), `perspectiveOrientation` (default:
    /// identity) and `perspectiveZoom` (default 10). The backoff distance is
    /// `perspectiveZoom * zoom`.
    pub fn from_neuroglancer(state: &Value, zoom: f64) -> Result<Self> {
        let orientation = match state.get("perspectiveOrientation") {
            Some(v) => number_array::<4>(v, "perspectiveOrientation")?,
            None => [0.0, 0.0, 0.0, 1.0],
        };
        let pzoom = match state.get("perspectiveZoom") {
            Some(v) => v.as_f64().ok_or_else(|| {
                PolydataError::InvalidCameraState("perspectiveZoom is not a number".into())
            })?,
            None => DEFAULT_PERSPECTIVE_ZOOM,
        };

        let position = state
            .pointer("/navigation/pose/position")
            .ok_or_else(|| {
                PolydataError::InvalidCameraState("missing navigation.pose.position".into())
            })?;
        let coords = field::<3>(position, "voxelCoordinates")?;
        let size = field::<3>(position, "voxelSize")?;
        let focus = DVec3::from_array(coords) * DVec3::from_array(size);

        log::debug!("neuroglancer camera at {focus} with zoom {pzoom}");
        Ok(Self::from_quaternion(focus, orientation, pzoom * zoom, true))
    }

    /// Parses a neuroglancer state from JSON text.
    pub fn from_neuroglancer_json(json: &str, zoom: f64) -> Result<Self> {
        let state: Value = serde_json::from_str(json)?;
        Self::from_neuroglancer(&state, zoom)
    }
}

fn field<const N: usize>(parent: &Value, name: &str) -> Result<[f64; N]> {
    let value = parent.get(name).ok_or_else(|| {
        PolydataError::InvalidCameraState(format!("missing position.{name}"))
    })?;
    number_array(value, name)
}

fn number_array<const N: usize>(value: &Value, name: &str) -> Result<[f64; N]> {
    let invalid =
        || PolydataError::InvalidCameraState(format!("{name} must be an array of {N} numbers"));
    let items = value.as_array().ok_or_else(invalid)?;
    if items.len() != N {
        return Err(invalid());
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_f64().ok_or_else(invalid)?;
    }
    Ok(out)
}
