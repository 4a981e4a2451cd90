//! Small vector and coordinate helpers.

use glam::{DMat4, DVec3};

/// Returns the length of `v`.
#[must_use]
pub fn mag(v: DVec3) -> f64 {
    v.length()
}

/// Returns the squared length of `v`.
#[must_use]
pub fn mag2(v: DVec3) -> f64 {
    v.length_squared()
}

/// Returns the unit vector along `v`, or zero for a zero-length input.
#[must_use]
pub fn versor(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Returns true if `p` projects strictly inside the triangle `(p1, p2, p3)`.
///
/// Points above or below the triangle plane count as inside. A degenerate
/// triangle contains every point.
#[must_use]
pub fn point_is_in_triangle(p: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> bool {
    let u = p2 - p1;
    let v = p3 - p1;
    let n = u.cross(v);
    let w = p - p1;
    let ln = n.dot(n);
    if ln == 0.0 {
        return true;
    }
    let gamma = u.cross(w).dot(n) / ln;
    let beta = w.cross(v).dot(n) / ln;
    let alpha = 1.0 - gamma - beta;
    alpha > 0.0
        && alpha < 1.0
        && beta > 0.0
        && beta < 1.0
        && gamma > 0.0
        && gamma < 1.0
}

/// Returns the distance from `p` to the infinite line through `p1` and `p2`.
#[must_use]
pub fn point_to_line_distance(p: DVec3, p1: DVec3, p2: DVec3) -> f64 {
    let dir = p2 - p1;
    let len2 = dir.length_squared();
    if len2 == 0.0 {
        return (p - p1).length();
    }
    (p - p1).cross(dir).length() / len2.sqrt()
}

/// Cartesian to spherical coordinates, returned as `(rho, theta, phi)`.
///
/// `theta` is the polar angle from +Z and `phi` the azimuth from +X.
#[must_use]
pub fn cart2spher(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let hxy = x.hypot(y);
    let rho = hxy.hypot(z);
    if rho == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (rho, hxy.atan2(z), y.atan2(x))
}

/// Spherical to Cartesian coordinates.
#[must_use]
pub fn spher2cart(rho: f64, theta: f64, phi: f64) -> DVec3 {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    let rst = rho * st;
    DVec3::new(rst * cp, rst * sp, rho * ct)
}

/// Cartesian to polar coordinates, returned as `(theta, rho)`.
#[must_use]
pub fn cart2pol(x: f64, y: f64) -> (f64, f64) {
    (y.atan2(x), x.hypot(y))
}

/// Polar to Cartesian coordinates, returned as `(x, y)`.
#[must_use]
pub fn pol2cart(theta: f64, rho: f64) -> (f64, f64) {
    let (s, c) = theta.sin_cos();
    (rho * c, rho * s)
}

/// Returns true if every element of `m` is within `tol` of the identity.
#[must_use]
pub fn is_identity(m: &DMat4, tol: f64) -> bool {
    m.abs_diff_eq(DMat4::IDENTITY, tol)
}
