//! Editable shape sum type and its geometric accessors.
//!
//! Each shape kind is a variant of [`ShapeParams`]; every dispatch over
//! shape kinds in this crate is an exhaustive match, so adding a kind is a
//! compile-time-checked exercise.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::frame::LocalFrame;

/// Smallest radius or extruded height a drag can produce. Mutations clamp
/// here instead of zero to avoid degenerate geometry.
pub const MIN_DIMENSION: f32 = 0.01;

/// Opacity factor applied while a centroid drag is active, so the shape does
/// not re-occlude its own drag handle.
const DIM_FACTOR: f32 = 0.9;

/// Labels sit above the shape at this multiple of its height.
const LABEL_HEIGHT_FACTOR: f32 = 1.2;

/// Kind-specific geometric parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeParams {
    Polygon {
        vertices: Vec<Vec3>,
    },
    Polyline {
        vertices: Vec<Vec3>,
    },
    Rectangle {
        first_corner: Vec3,
        second_corner: Vec3,
        /// Signed angle between the corner vectors seen from the rotation
        /// handle, about the local up axis.
        angle_to_cross: f32,
    },
    Square {
        first_corner: Vec3,
        second_corner: Vec3,
    },
    Ellipse {
        semi_major: f32,
        semi_minor: f32,
    },
    Circle {
        radius: f32,
    },
    /// Spheres keep per-axis radii so a single-anchor drag can stretch one
    /// axis without touching the others.
    Sphere {
        radii: Vec3,
    },
    Ellipsoid {
        radii: Vec3,
    },
    Parabola {
        start: Vec3,
        end: Vec3,
        arc_height: f32,
    },
    Billboard,
}

impl ShapeParams {
    /// Kind tag for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeParams::Polygon { .. } => "polygon",
            ShapeParams::Polyline { .. } => "polyline",
            ShapeParams::Rectangle { .. } => "rectangle",
            ShapeParams::Square { .. } => "square",
            ShapeParams::Ellipse { .. } => "ellipse",
            ShapeParams::Circle { .. } => "circle",
            ShapeParams::Sphere { .. } => "sphere",
            ShapeParams::Ellipsoid { .. } => "ellipsoid",
            ShapeParams::Parabola { .. } => "parabola",
            ShapeParams::Billboard => "billboard",
        }
    }

    /// True for kinds that form a volume when extruded and therefore carry
    /// top-face vertices.
    pub(crate) fn is_extrudable(&self) -> bool {
        matches!(
            self,
            ShapeParams::Polygon { .. }
                | ShapeParams::Rectangle { .. }
                | ShapeParams::Square { .. }
                | ShapeParams::Ellipse { .. }
                | ShapeParams::Circle { .. }
        )
    }
}

/// An editable shape instance: a world-space center, kind-specific
/// parameters, and an optional extrusion height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableShape {
    pub center: Vec3,
    pub extruded_height: Option<f32>,
    pub clamp_to_ground: bool,
    pub params: ShapeParams,
    color: [f32; 4],
    #[serde(skip)]
    saved_alpha: Option<f32>,
}

impl EditableShape {
    pub fn new(center: Vec3, params: ShapeParams) -> Self {
        Self {
            center,
            extruded_height: None,
            clamp_to_ground: false,
            params,
            color: [1.0, 1.0, 1.0, 1.0],
            saved_alpha: None,
        }
    }

    pub fn with_extruded_height(mut self, height: f32) -> Self {
        self.extruded_height = Some(height.max(MIN_DIMENSION));
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn clamped_to_ground(mut self) -> Self {
        self.clamp_to_ground = true;
        self
    }

    /// Local east-north-up frame at the shape's centroid.
    pub fn local_frame(&self) -> LocalFrame {
        LocalFrame::east_north_up(self.centroid())
    }

    /// Geometric centroid. For vertex-defined kinds this is derived from
    /// the stored points; otherwise it is the stored center.
    pub fn centroid(&self) -> Vec3 {
        match &self.params {
            ShapeParams::Polygon { vertices } | ShapeParams::Polyline { vertices } => {
                if vertices.is_empty() {
                    self.center
                } else {
                    vertices.iter().copied().sum::<Vec3>() / vertices.len() as f32
                }
            }
            ShapeParams::Rectangle {
                first_corner,
                second_corner,
                ..
            }
            | ShapeParams::Square {
                first_corner,
                second_corner,
            } => (*first_corner + *second_corner) * 0.5,
            ShapeParams::Parabola { start, end, .. } => (*start + *end) * 0.5,
            _ => self.center,
        }
    }

    /// Keep the stored center in sync with the derived centroid after a
    /// vertex-level mutation.
    pub(crate) fn sync_center(&mut self) {
        self.center = self.centroid();
    }

    /// Move the whole shape: center plus every stored world point.
    pub fn translate(&mut self, offset: Vec3) {
        self.center += offset;
        match &mut self.params {
            ShapeParams::Polygon { vertices } | ShapeParams::Polyline { vertices } => {
                for vertex in vertices {
                    *vertex += offset;
                }
            }
            ShapeParams::Rectangle {
                first_corner,
                second_corner,
                ..
            }
            | ShapeParams::Square {
                first_corner,
                second_corner,
            } => {
                *first_corner += offset;
                *second_corner += offset;
            }
            ShapeParams::Parabola { start, end, .. } => {
                *start += offset;
                *end += offset;
            }
            _ => {}
        }
    }

    /// Vertical extent used for label placement.
    pub fn height(&self) -> f32 {
        if let Some(height) = self.extruded_height {
            return height;
        }
        match &self.params {
            ShapeParams::Sphere { radii } | ShapeParams::Ellipsoid { radii } => radii.z,
            ShapeParams::Parabola { arc_height, .. } => *arc_height,
            _ => 0.0,
        }
    }

    /// Position of the shape's text label, pinned above the shape. This is
    /// re-derived after every mutation; the session never caches it.
    pub fn label_position(&self) -> Vec3 {
        let frame = self.local_frame();
        self.centroid() + frame.up * (self.height() * LABEL_HEIGHT_FACTOR)
    }

    /// A rough bounding radius for sizing an attached gizmo.
    pub fn bounding_radius(&self) -> f32 {
        let centroid = self.centroid();
        let radius = match &self.params {
            ShapeParams::Polygon { vertices } | ShapeParams::Polyline { vertices } => vertices
                .iter()
                .map(|v| (*v - centroid).length())
                .fold(0.0, f32::max),
            ShapeParams::Rectangle {
                first_corner,
                second_corner,
                ..
            }
            | ShapeParams::Square {
                first_corner,
                second_corner,
            } => (*second_corner - *first_corner).length() * 0.5,
            ShapeParams::Ellipse { semi_major, .. } => *semi_major,
            ShapeParams::Circle { radius } => *radius,
            ShapeParams::Sphere { radii } | ShapeParams::Ellipsoid { radii } => {
                radii.max_element()
            }
            ShapeParams::Parabola { start, end, .. } => (*end - *start).length() * 0.5,
            ShapeParams::Billboard => 0.0,
        };
        radius.max(MIN_DIMENSION)
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
        self.saved_alpha = None;
    }

    /// Dim to 90% opacity while a centroid drag is active.
    pub fn dim(&mut self) {
        if self.saved_alpha.is_none() {
            self.saved_alpha = Some(self.color[3]);
            self.color[3] *= DIM_FACTOR;
        }
    }

    /// Restore the opacity saved by [`EditableShape::dim`].
    pub fn restore_dim(&mut self) {
        if let Some(alpha) = self.saved_alpha.take() {
            self.color[3] = alpha;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_centroid_and_sync() {
        let mut shape = EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Polygon {
                vertices: vec![
                    Vec3::new(0.0, 0.0, 0.0),
                    Vec3::new(6.0, 0.0, 0.0),
                    Vec3::new(6.0, 6.0, 0.0),
                    Vec3::new(0.0, 6.0, 0.0),
                ],
            },
        );
        assert_eq!(shape.centroid(), Vec3::new(3.0, 3.0, 0.0));
        shape.sync_center();
        assert_eq!(shape.center, Vec3::new(3.0, 3.0, 0.0));
    }

    #[test]
    fn test_translate_moves_stored_points() {
        let mut shape = EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Rectangle {
                first_corner: Vec3::new(-1.0, -1.0, 0.0),
                second_corner: Vec3::new(1.0, 1.0, 0.0),
                angle_to_cross: 0.0,
            },
        );
        shape.translate(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(shape.center, Vec3::new(10.0, 0.0, 0.0));
        match shape.params {
            ShapeParams::Rectangle { first_corner, .. } => {
                assert_eq!(first_corner, Vec3::new(9.0, -1.0, 0.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_dim_and_restore_round_trip() {
        let mut shape =
            EditableShape::new(Vec3::ZERO, ShapeParams::Circle { radius: 5.0 })
                .with_color([0.2, 0.4, 0.6, 0.8]);
        shape.dim();
        assert!((shape.color()[3] - 0.72).abs() < 1e-6);
        // Dimming twice must not compound.
        shape.dim();
        assert!((shape.color()[3] - 0.72).abs() < 1e-6);
        shape.restore_dim();
        assert!((shape.color()[3] - 0.8).abs() < 1e-6);
        // Restoring again is a no-op.
        shape.restore_dim();
        assert!((shape.color()[3] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_label_sits_above_extruded_shape() {
        let shape = EditableShape::new(
            Vec3::new(0.0, 0.0, 1000.0),
            ShapeParams::Circle { radius: 5.0 },
        )
        .with_extruded_height(10.0);
        let label = shape.label_position();
        // Frame at (0,0,1000) has up = +Z.
        assert!((label.z - 1012.0).abs() < 1e-3);
    }
}
