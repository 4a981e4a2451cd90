//! Camera poses for framing a mesh.
//!
//! A [`CameraPose`] is the position/focal point/view-up triple that viewers
//! consume. Poses can be derived from a rotation quaternion, from a
//! neuroglancer viewer state, or from a backoff direction.

mod neuroglancer;

pub use neuroglancer::{DEFAULT_NEUROGLANCER_ZOOM, DEFAULT_PERSPECTIVE_ZOOM};

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Distance used when none is given to [`CameraPose::from_quaternion`].
pub const DEFAULT_DISTANCE: f64 = 10_000.0;

/// Scale applied to the backoff of [`CameraPose::oriented`].
const BACKOFF_SCALE: f64 = 1000.0;

/// Camera placement in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position.
    pub position: DVec3,
    /// Point the camera looks at.
    pub focal_point: DVec3,
    /// Up direction (normalized).
    pub view_up: DVec3,
}

impl CameraPose {
    /// Creates a pose. The up vector is normalized.
    pub fn new(position: DVec3, focal_point: DVec3, view_up: DVec3) -> Self {
        Self {
            position,
            focal_point,
            view_up: view_up.normalize_or_zero(),
        }
    }

    /// Creates a pose rotated by a quaternion and centred on `focus`.
    ///
    /// The unrotated camera sits `distance` along +Z looking at the origin
    /// with +Y up. `quaternion` is `[x, y, z, w]`. With `ngl_correct` the
    /// pose is flipped for viewers whose y axis points down (azimuth -180°
    /// then roll 180°).
    ///
    /// The rotated backoff is added to `focus`, so the pose always looks at
    /// `focus`. It is not placed relative to a fixed `[0, 0, distance]` eye.
    pub fn from_quaternion(
        focus: DVec3,
        quaternion: [f64; 4],
        distance: f64,
        ngl_correct: bool,
    ) -> Self {
        let [x, y, z, w] = quaternion;
        let q = DQuat::from_xyzw(x, y, z, w);
        let q = if q.length_squared() > 0.0 {
            q.normalize()
        } else {
            DQuat::IDENTITY
        };

        let mut pose = Self {
            position: q * DVec3::new(0.0, 0.0, distance),
            focal_point: DVec3::ZERO,
            view_up: q * DVec3::Y,
        };
        if ngl_correct {
            pose.azimuth(-180.0);
            pose.roll(180.0);
        }

        pose.position += focus;
        pose.focal_point = focus;
        pose
    }

    /// Creates a pose looking at `center` from `backoff` (scaled by 1000)
    /// units along `-backoff_dir`.
    pub fn oriented(center: DVec3, up: DVec3, backoff_dir: DVec3, backoff: f64) -> Self {
        Self::new(center - backoff * BACKOFF_SCALE * backoff_dir, center, up)
    }

    /// Returns the distance from the eye to the focal point.
    pub fn distance(&self) -> f64 {
        self.position.distance(self.focal_point)
    }

    /// Returns the normalized viewing direction.
    pub fn direction_of_projection(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or_zero()
    }

    /// Rotates the eye about the view-up axis through the focal point.
    pub fn azimuth(&mut self, degrees: f64) {
        let axis = self.view_up.normalize_or_zero();
        if axis == DVec3::ZERO {
            return;
        }
        let rot = DQuat::from_axis_angle(axis, degrees.to_radians());
        self.position = self.focal_point + rot * (self.position - self.focal_point);
    }

    /// Rotates the view-up vector about the viewing direction.
    pub fn roll(&mut self, degrees: f64) {
        let axis = self.direction_of_projection();
        if axis == DVec3::ZERO {
            return;
        }
        let rot = DQuat::from_axis_angle(axis, degrees.to_radians());
        self.view_up = (rot * self.view_up).normalize_or_zero();
    }

    /// Returns the right-handed view matrix.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    /// Flattens the pose as `[position, focal point, view up]`.
    ///
    /// The position is written as stored. It is not multiplied by the
    /// camera distance.
    pub fn to_k3d(&self) -> [f64; 9] {
        let mut out = [0.0; 9];
        out[..3].copy_from_slice(&self.position.to_array());
        out[3..6].copy_from_slice(&self.focal_point.to_array());
        out[6..].copy_from_slice(&self.view_up.to_array());
        out
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::Z,
            focal_point: DVec3::ZERO,
            view_up: DVec3::Y,
        }
    }
}
