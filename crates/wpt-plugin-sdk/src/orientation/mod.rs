//! Planar yaw and quaternion conversions.
//!
//! Poses on the map rotate about +Z only, so every quaternion built here has
//! `qx = qy = 0`. Angles are radians, counter-clockwise positive, and every
//! yaw handed back to callers lies in `(-π, π]`.

use std::f64::consts::PI;

/// Unit quaternion describing a planar rotation.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::Quaternion;
///
/// let q = Quaternion::from_yaw(std::f64::consts::FRAC_PI_2);
/// assert!((q.yaw() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((q.norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// X component, zero for planar rotations.
    pub qx: f64,
    /// Y component, zero for planar rotations.
    pub qy: f64,
    /// Z component, `sin(yaw / 2)`.
    pub qz: f64,
    /// W component, `cos(yaw / 2)`.
    pub qw: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        qx: 0.0,
        qy: 0.0,
        qz: 0.0,
        qw: 1.0,
    };

    /// Builds the planar rotation for `yaw`.
    #[must_use]
    pub fn from_yaw(yaw: f64) -> Self {
        yaw_to_quaternion(yaw)
    }

    /// Extracts the rotation about +Z.
    #[must_use]
    pub fn yaw(self) -> f64 {
        quaternion_to_yaw(self.qx, self.qy, self.qz, self.qw)
    }

    /// Euclidean magnitude of the four components.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.qx * self.qx + self.qy * self.qy + self.qz * self.qz + self.qw * self.qw).sqrt()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a quaternion to the yaw it encodes.
///
/// Uses `atan2(2(qw·qz + qx·qy), 1 − 2(qy² + qz²))`; the result is
/// normalised into `(-π, π]`.
#[must_use]
pub fn quaternion_to_yaw(qx: f64, qy: f64, qz: f64, qw: f64) -> f64 {
    let sin_term = 2.0 * (qw * qz + qx * qy);
    let cos_term = 1.0 - 2.0 * (qy * qy + qz * qz);
    normalize_yaw(sin_term.atan2(cos_term))
}

/// Converts a yaw to a planar quaternion `(0, 0, sin(yaw/2), cos(yaw/2))`.
#[must_use]
pub fn yaw_to_quaternion(yaw: f64) -> Quaternion {
    let half = yaw / 2.0;
    Quaternion {
        qx: 0.0,
        qy: 0.0,
        qz: half.sin(),
        qw: half.cos(),
    }
}

/// Wraps an angle into `(-π, π]`.
///
/// Angles already inside the interval are returned untouched, which keeps
/// the operation exactly idempotent. Anything else goes through
/// `atan2(sin, cos)`; a result of `-π` is mapped to `π`.
#[must_use]
pub fn normalize_yaw(yaw: f64) -> f64 {
    if yaw > -PI && yaw <= PI {
        return yaw;
    }
    let wrapped = yaw.sin().atan2(yaw.cos());
    if wrapped <= -PI { PI } else { wrapped }
}

/// Rigid planar transform from a local frame into world coordinates.
///
/// `world = origin + R(yaw) · local`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarFrame {
    origin_x: f64,
    origin_y: f64,
    yaw: f64,
    cos: f64,
    sin: f64,
}

impl PlanarFrame {
    /// Creates a frame anchored at `(x, y)` and rotated by `yaw`.
    #[must_use]
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            yaw,
            cos: yaw.cos(),
            sin: yaw.sin(),
        }
    }

    /// Maps a local point into world coordinates.
    #[must_use]
    pub fn to_world(&self, local_x: f64, local_y: f64) -> (f64, f64) {
        (
            self.origin_x + local_x * self.cos - local_y * self.sin,
            self.origin_y + local_x * self.sin + local_y * self.cos,
        )
    }

    /// Maps a local heading into a normalised world yaw.
    #[must_use]
    pub fn heading_to_world(&self, local_heading: f64) -> f64 {
        normalize_yaw(self.yaw + local_heading)
    }
}
