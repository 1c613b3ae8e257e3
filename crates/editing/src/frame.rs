//! Local reference frames and gizmo pivots.

use geosketch_api::GizmoAxis;
use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::GizmoError;

/// Epsilon for floating point comparisons
const EPSILON: f32 = 1e-6;

/// Orthonormal basis (east, north, up) at a world point. The three vectors
/// define the local X/Y/Z axis directions of a gizmo or a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    pub east: Vec3,
    pub north: Vec3,
    pub up: Vec3,
}

impl LocalFrame {
    pub const IDENTITY: Self = Self {
        east: Vec3::X,
        north: Vec3::Y,
        up: Vec3::Z,
    };

    /// East-north-up basis at a world point, with up pointing away from the
    /// world origin (geocentric up). Near the origin and at the poles the
    /// east/north directions are degenerate and fall back to the world axes.
    pub fn east_north_up(origin: Vec3) -> Self {
        if origin.length_squared() < EPSILON {
            return Self::IDENTITY;
        }
        let up = origin.normalize();
        let east = Vec3::Z.cross(up);
        if east.length_squared() < EPSILON {
            // Polar singularity: any horizontal pair works, keep it right-handed.
            return Self {
                east: Vec3::X,
                north: Vec3::Y * up.z.signum(),
                up,
            };
        }
        let east = east.normalize();
        let north = up.cross(east);
        Self { east, north, up }
    }

    /// Complete a right-handed frame from an up vector alone.
    pub fn from_up(up: Vec3) -> Self {
        let up = up.normalize_or_zero();
        if up == Vec3::ZERO {
            return Self::IDENTITY;
        }
        let arbitrary = if up.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let east = up.cross(arbitrary).normalize();
        let north = up.cross(east);
        Self { east, north, up }
    }

    /// True if the basis vectors are unit length, mutually perpendicular,
    /// and right-handed.
    pub fn is_orthonormal(&self) -> bool {
        let tolerance = 1e-4;
        (self.east.length_squared() - 1.0).abs() < tolerance
            && (self.north.length_squared() - 1.0).abs() < tolerance
            && (self.up.length_squared() - 1.0).abs() < tolerance
            && self.east.dot(self.north).abs() < tolerance
            && self.east.dot(self.up).abs() < tolerance
            && self.north.dot(self.up).abs() < tolerance
            && self.east.cross(self.north).dot(self.up) > 0.0
    }

    /// World-space direction of a local axis.
    pub fn axis_direction(&self, axis: GizmoAxis) -> Vec3 {
        match axis {
            GizmoAxis::X => self.east,
            GizmoAxis::Y => self.north,
            GizmoAxis::Z => self.up,
        }
    }
}

impl Default for LocalFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// World-space origin point plus the local frame used for axis directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub origin: Vec3,
    pub frame: LocalFrame,
}

impl Pivot {
    /// Pivot with a geocentric east-north-up frame at `origin`.
    pub fn east_north_up(origin: Vec3) -> Self {
        Self {
            origin,
            frame: LocalFrame::east_north_up(origin),
        }
    }

    /// Pivot with a caller-supplied frame; rejects non-orthonormal bases.
    pub fn with_frame(origin: Vec3, frame: LocalFrame) -> Result<Self, GizmoError> {
        if !frame.is_orthonormal() {
            return Err(GizmoError::NonOrthonormalFrame);
        }
        Ok(Self { origin, frame })
    }

    pub fn axis_direction(&self, axis: GizmoAxis) -> Vec3 {
        self.frame.axis_direction(axis)
    }

    /// Endpoint of an axis arm of the given length.
    pub fn axis_tip(&self, axis: GizmoAxis, length: f32) -> Vec3 {
        self.origin + self.axis_direction(axis) * length
    }

    /// Rigid transform mapping local frame coordinates to world space.
    pub fn world_from_local(&self) -> Mat4 {
        Mat4::from_cols(
            self.frame.east.extend(0.0),
            self.frame.north.extend(0.0),
            self.frame.up.extend(0.0),
            self.origin.extend(1.0),
        )
    }

    /// Inverse of [`Pivot::world_from_local`].
    pub fn local_from_world(&self) -> Mat4 {
        self.world_from_local().inverse()
    }

    /// Uniform scale about the pivot. The scale is applied in local space so
    /// the origin stays fixed while axis arms grow or shrink around it.
    pub fn scale_about(&self, scale: f32) -> Mat4 {
        self.world_from_local() * Mat4::from_scale(Vec3::splat(scale)) * self.local_from_world()
    }
}

/// Transform a world point by a placement matrix.
pub(crate) fn transform_point(matrix: Mat4, point: Vec3) -> Vec3 {
    let v = matrix * Vec4::new(point.x, point.y, point.z, 1.0);
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enu_frame_is_orthonormal() {
        let frame = LocalFrame::east_north_up(Vec3::new(1200.0, -3400.0, 5600.0));
        assert!(frame.is_orthonormal());
        // Up points away from the world origin.
        let expected_up = Vec3::new(1200.0, -3400.0, 5600.0).normalize();
        assert!((frame.up - expected_up).length() < 1e-5);
    }

    #[test]
    fn test_enu_frame_polar_fallback() {
        let north_pole = LocalFrame::east_north_up(Vec3::new(0.0, 0.0, 6371.0));
        assert!(north_pole.is_orthonormal());
        let south_pole = LocalFrame::east_north_up(Vec3::new(0.0, 0.0, -6371.0));
        assert!(south_pole.is_orthonormal());
    }

    #[test]
    fn test_enu_frame_near_world_origin() {
        assert_eq!(LocalFrame::east_north_up(Vec3::ZERO), LocalFrame::IDENTITY);
    }

    #[test]
    fn test_from_up_is_orthonormal() {
        for up in [Vec3::Z, Vec3::X, Vec3::new(0.3, -0.8, 0.5)] {
            let frame = LocalFrame::from_up(up);
            assert!(frame.is_orthonormal(), "up = {up:?}");
        }
    }

    #[test]
    fn test_with_frame_rejects_skewed_basis() {
        let skewed = LocalFrame {
            east: Vec3::X,
            north: Vec3::new(0.5, 0.5, 0.0),
            up: Vec3::Z,
        };
        assert!(Pivot::with_frame(Vec3::ZERO, skewed).is_err());
    }

    #[test]
    fn test_scale_about_keeps_origin_fixed() {
        let pivot = Pivot::east_north_up(Vec3::new(100.0, 200.0, 300.0));
        let matrix = pivot.scale_about(2.5);
        let moved_origin = transform_point(matrix, pivot.origin);
        assert!((moved_origin - pivot.origin).length() < 1e-3);
    }

    #[test]
    fn test_scale_about_scales_axis_tips() {
        let pivot = Pivot::east_north_up(Vec3::new(50.0, -20.0, 10.0));
        let tip = pivot.axis_tip(GizmoAxis::X, 10.0);
        let scaled = transform_point(pivot.scale_about(3.0), tip);
        let distance = (scaled - pivot.origin).length();
        assert!((distance - 30.0).abs() < 1e-3);
    }
}
