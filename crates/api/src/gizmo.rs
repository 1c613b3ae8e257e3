//! Gizmo part identifiers shared with the host UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single translation axis of the gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    /// Stable index for per-axis storage (X=0, Y=1, Z=2).
    pub fn index(self) -> usize {
        match self {
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }
}

/// A translation plane spanned by two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GizmoPlane {
    XY,
    XZ,
    YZ,
}

impl GizmoPlane {
    pub const ALL: [GizmoPlane; 3] = [GizmoPlane::XY, GizmoPlane::XZ, GizmoPlane::YZ];

    /// The two axes that span this plane.
    pub fn axes(self) -> [GizmoAxis; 2] {
        match self {
            GizmoPlane::XY => [GizmoAxis::X, GizmoAxis::Y],
            GizmoPlane::XZ => [GizmoAxis::X, GizmoAxis::Z],
            GizmoPlane::YZ => [GizmoAxis::Y, GizmoAxis::Z],
        }
    }
}

/// A pickable part of the translation gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GizmoPart {
    #[default]
    None,
    Axis(GizmoAxis),
    Plane(GizmoPlane),
}

impl GizmoPart {
    pub fn is_none(self) -> bool {
        self == GizmoPart::None
    }

    pub fn is_plane(self) -> bool {
        matches!(self, GizmoPart::Plane(_))
    }

    /// The axes contributing to a drag on this part: one for an axis arm,
    /// two for a plane face, none otherwise.
    pub fn axes(self) -> &'static [GizmoAxis] {
        match self {
            GizmoPart::None => &[],
            GizmoPart::Axis(GizmoAxis::X) => &[GizmoAxis::X],
            GizmoPart::Axis(GizmoAxis::Y) => &[GizmoAxis::Y],
            GizmoPart::Axis(GizmoAxis::Z) => &[GizmoAxis::Z],
            GizmoPart::Plane(GizmoPlane::XY) => &[GizmoAxis::X, GizmoAxis::Y],
            GizmoPart::Plane(GizmoPlane::XZ) => &[GizmoAxis::X, GizmoAxis::Z],
            GizmoPart::Plane(GizmoPlane::YZ) => &[GizmoAxis::Y, GizmoAxis::Z],
        }
    }
}

impl fmt::Display for GizmoPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GizmoPart::None => "none",
            GizmoPart::Axis(GizmoAxis::X) => "x",
            GizmoPart::Axis(GizmoAxis::Y) => "y",
            GizmoPart::Axis(GizmoAxis::Z) => "z",
            GizmoPart::Plane(GizmoPlane::XY) => "xy",
            GizmoPart::Plane(GizmoPlane::XZ) => "xz",
            GizmoPart::Plane(GizmoPlane::YZ) => "yz",
        };
        f.write_str(name)
    }
}

impl FromStr for GizmoPart {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(GizmoPart::None),
            "x" => Ok(GizmoPart::Axis(GizmoAxis::X)),
            "y" => Ok(GizmoPart::Axis(GizmoAxis::Y)),
            "z" => Ok(GizmoPart::Axis(GizmoAxis::Z)),
            "xy" => Ok(GizmoPart::Plane(GizmoPlane::XY)),
            "xz" => Ok(GizmoPart::Plane(GizmoPlane::XZ)),
            "yz" => Ok(GizmoPart::Plane(GizmoPlane::YZ)),
            other => Err(ApiError::UnknownPart(other.to_string())),
        }
    }
}
