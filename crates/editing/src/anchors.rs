//! Anchor derivation and per-shape drag rules.
//!
//! Anchors are positional proxies only: moving a marker never changes the
//! shape by itself. All shape mutation goes through [`apply_drag`], which
//! always returns a freshly derived [`AnchorSet`] for the caller to push
//! back onto its markers.

use geosketch_api::{EditorType, GizmoPart};
use glam::{Quat, Vec2, Vec3};

use crate::error::EditError;
use crate::gizmo::projection::screen_displacement_along_axis;
use crate::scene::Scene;
use crate::shapes::{EditableShape, MIN_DIMENSION, ShapeParams};

/// World-space probe length for projecting a screen delta through a shape's
/// own frame. The projection math is scale-invariant, so the probe only has
/// to survive the degenerate-length guard.
const PROBE_LENGTH: f32 = 1.0;

/// A draggable control point tied to one semantic feature of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Vec3,
    pub editor_type: EditorType,
    pub index: usize,
}

impl Anchor {
    fn new(position: Vec3, editor_type: EditorType, index: usize) -> Self {
        Self {
            position,
            editor_type,
            index,
        }
    }
}

/// Ordered anchor groups. Group order and per-group indices are significant:
/// the session reuses pooled markers by flattened index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSet {
    /// Centroid point(s): the base centroid, plus a top centroid at the
    /// extrusion height when the shape has one.
    pub centroids: Vec<Anchor>,
    /// Primary boundary vertices.
    pub vertices: Vec<Anchor>,
    /// Mid-edge points, polygon/polyline only.
    pub mid_vertices: Vec<Anchor>,
    /// Top-face vertices, extruded volumes only.
    pub top_vertices: Vec<Anchor>,
}

impl AnchorSet {
    /// Group-ordered flat iteration, matching marker pool indices.
    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.centroids
            .iter()
            .chain(self.vertices.iter())
            .chain(self.mid_vertices.iter())
            .chain(self.top_vertices.iter())
    }

    pub fn len(&self) -> usize {
        self.centroids.len() + self.vertices.len() + self.mid_vertices.len()
            + self.top_vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the top-centroid anchor, if present.
    pub fn top_centroid_flat_index(&self) -> Option<usize> {
        (self.centroids.len() > 1).then_some(1)
    }
}

/// What a drag is applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    /// Translate the whole shape along a gizmo axis or plane.
    Gizmo(GizmoPart),
    /// Drag one anchor. The stored position is the anchor's position at the
    /// start of the drag gesture and stays fixed for its duration.
    Anchor(Anchor),
}

/// Drag payload. Which payload is valid depends on the target: vertex and
/// base-centroid drags carry resolved world points, height-handle and
/// direct axis drags carry raw screen segments, and gizmo-resolved axis
/// drags carry a ready world offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drag {
    Screen { start: Vec2, end: Vec2 },
    World(Vec3),
    Offset(Vec3),
}

/// Derive the set of anchor points to draw for a shape.
pub fn anchor_points(shape: &EditableShape) -> AnchorSet {
    let frame = shape.local_frame();
    let centroid = shape.centroid();
    let mut set = AnchorSet::default();

    match &shape.params {
        ShapeParams::Polygon { vertices } | ShapeParams::Polyline { vertices } => {
            set.centroids
                .push(Anchor::new(centroid, EditorType::Centroid, 0));
            for (index, vertex) in vertices.iter().enumerate() {
                set.vertices
                    .push(Anchor::new(*vertex, EditorType::Vertex, index));
            }
            let closed = matches!(shape.params, ShapeParams::Polygon { .. });
            let edges = if closed {
                vertices.len()
            } else {
                vertices.len().saturating_sub(1)
            };
            for index in 0..edges {
                let next = (index + 1) % vertices.len();
                let midpoint = (vertices[index] + vertices[next]) * 0.5;
                set.mid_vertices
                    .push(Anchor::new(midpoint, EditorType::MiddleVertex, index));
            }
        }
        ShapeParams::Rectangle {
            first_corner,
            second_corner,
            angle_to_cross,
        } => {
            set.vertices
                .push(Anchor::new(*first_corner, EditorType::Vertex, 0));
            set.vertices
                .push(Anchor::new(*second_corner, EditorType::Vertex, 1));
            set.vertices.push(Anchor::new(
                rotation_vertex(*first_corner, *second_corner, *angle_to_cross, frame.up),
                EditorType::Vertex,
                2,
            ));
        }
        ShapeParams::Square {
            first_corner,
            second_corner,
        } => {
            set.vertices
                .push(Anchor::new(*first_corner, EditorType::Vertex, 0));
            set.vertices
                .push(Anchor::new(*second_corner, EditorType::Vertex, 1));
        }
        ShapeParams::Ellipse {
            semi_major,
            semi_minor,
        } => {
            set.vertices.push(Anchor::new(
                centroid + frame.east * *semi_major,
                EditorType::Vertex,
                0,
            ));
            set.vertices.push(Anchor::new(
                centroid + frame.north * *semi_minor,
                EditorType::Vertex,
                1,
            ));
        }
        ShapeParams::Circle { radius } => {
            set.vertices.push(Anchor::new(
                centroid + frame.east * *radius,
                EditorType::Vertex,
                0,
            ));
        }
        ShapeParams::Sphere { radii } => {
            set.vertices.push(Anchor::new(
                centroid + frame.east * radii.x,
                EditorType::Vertex,
                0,
            ));
        }
        ShapeParams::Ellipsoid { radii } => {
            set.vertices.push(Anchor::new(
                centroid + frame.east * radii.x,
                EditorType::Vertex,
                0,
            ));
            set.vertices.push(Anchor::new(
                centroid + frame.north * radii.y,
                EditorType::Vertex,
                1,
            ));
            set.vertices.push(Anchor::new(
                centroid + frame.up * radii.z,
                EditorType::Vertex,
                2,
            ));
        }
        ShapeParams::Parabola { start, end, .. } => {
            set.centroids
                .push(Anchor::new(centroid, EditorType::Centroid, 0));
            set.vertices.push(Anchor::new(*start, EditorType::Vertex, 0));
            set.vertices.push(Anchor::new(*end, EditorType::Vertex, 1));
        }
        ShapeParams::Billboard => {
            set.centroids
                .push(Anchor::new(centroid, EditorType::Centroid, 0));
        }
    }

    if set.centroids.is_empty() && !set.vertices.is_empty() {
        set.centroids
            .insert(0, Anchor::new(centroid, EditorType::Centroid, 0));
    }

    if shape.clamp_to_ground || shape.extruded_height.is_some() {
        // Boundary vertices are drawn at the centroid's height so they stay
        // on the base face.
        for anchor in &mut set.vertices {
            anchor.position = to_height_of(anchor.position, centroid, frame.up);
        }
        for anchor in &mut set.mid_vertices {
            anchor.position = to_height_of(anchor.position, centroid, frame.up);
        }
    }

    if let Some(height) = shape.extruded_height {
        set.centroids.push(Anchor::new(
            centroid + frame.up * height,
            EditorType::Centroid,
            1,
        ));
        if shape.params.is_extrudable() {
            set.top_vertices = set
                .vertices
                .iter()
                .map(|anchor| {
                    Anchor::new(
                        anchor.position + frame.up * height,
                        EditorType::TopVertex,
                        anchor.index,
                    )
                })
                .collect();
        }
    }

    set
}

/// Apply a drag to a shape, mutating its parameters in place, and return
/// the freshly derived anchor set.
///
/// Pairings that cannot occur through the pointer-driven session path (a
/// vertex drag on a billboard, a world payload where a screen segment is
/// required) are programming errors and come back as `Err`.
pub fn apply_drag(
    scene: &dyn Scene,
    shape: &mut EditableShape,
    target: DragTarget,
    drag: Drag,
) -> Result<AnchorSet, EditError> {
    let frame = shape.local_frame();
    match target {
        DragTarget::Gizmo(part) => {
            let offset = match drag {
                Drag::Offset(offset) => offset,
                Drag::Screen { start, end } => {
                    let mut offset = Vec3::ZERO;
                    for &axis in part.axes() {
                        let direction = frame.axis_direction(axis);
                        if let Some(displacement) = screen_displacement_along_axis(
                            scene,
                            shape.centroid(),
                            direction,
                            PROBE_LENGTH,
                            end - start,
                        ) {
                            offset += direction * displacement;
                        }
                    }
                    offset
                }
                Drag::World(_) => {
                    return Err(EditError::MismatchedDrag {
                        expected: "screen segment or world offset",
                    });
                }
            };
            shape.translate(offset);
        }
        DragTarget::Anchor(anchor) => match anchor.editor_type {
            EditorType::Centroid if anchor.index > 0 => {
                // Height handle: project the screen delta along local up
                // from the anchor's gesture-start position.
                let Drag::Screen { start, end } = drag else {
                    return Err(EditError::MismatchedDrag {
                        expected: "screen segment",
                    });
                };
                let displacement = screen_displacement_along_axis(
                    scene,
                    anchor.position,
                    frame.up,
                    PROBE_LENGTH,
                    end - start,
                )
                .unwrap_or(0.0);
                let height = shape.extruded_height.unwrap_or(0.0) + displacement;
                shape.extruded_height = Some(height.max(MIN_DIMENSION));
            }
            EditorType::Centroid => {
                let Drag::World(point) = drag else {
                    return Err(EditError::MismatchedDrag {
                        expected: "resolved world point",
                    });
                };
                let offset = point - shape.centroid();
                shape.translate(offset);
            }
            EditorType::Vertex => {
                let Drag::World(point) = drag else {
                    return Err(EditError::MismatchedDrag {
                        expected: "resolved world point",
                    });
                };
                apply_vertex_drag(shape, &frame, anchor, point)?;
            }
            EditorType::MiddleVertex => {
                let Drag::World(point) = drag else {
                    return Err(EditError::MismatchedDrag {
                        expected: "resolved world point",
                    });
                };
                insert_vertex_after_edge(shape, anchor, point)?;
            }
            EditorType::TopVertex => {
                let Drag::World(point) = drag else {
                    return Err(EditError::MismatchedDrag {
                        expected: "resolved world point",
                    });
                };
                // Top-face vertices edit the corresponding base vertex: drop
                // the point to the base height first.
                let base_point = to_height_of(point, shape.centroid(), frame.up);
                let base_anchor = Anchor::new(base_point, EditorType::Vertex, anchor.index);
                apply_vertex_drag(shape, &frame, base_anchor, base_point)?;
            }
        },
    }
    shape.sync_center();
    Ok(anchor_points(shape))
}

fn apply_vertex_drag(
    shape: &mut EditableShape,
    frame: &crate::frame::LocalFrame,
    anchor: Anchor,
    point: Vec3,
) -> Result<(), EditError> {
    let centroid = shape.centroid();
    let unsupported = EditError::UnsupportedAnchor {
        editor_type: anchor.editor_type,
        index: anchor.index,
        kind: shape.params.kind(),
    };
    match &mut shape.params {
        ShapeParams::Polygon { vertices } | ShapeParams::Polyline { vertices } => {
            let slot = vertices.get_mut(anchor.index).ok_or(unsupported)?;
            *slot = point;
        }
        ShapeParams::Rectangle {
            first_corner,
            second_corner,
            angle_to_cross,
        } => match anchor.index {
            0 => *first_corner = point,
            1 => *second_corner = point,
            2 => {
                *angle_to_cross =
                    signed_angle_about(*first_corner - point, *second_corner - point, frame.up);
            }
            _ => return Err(unsupported),
        },
        ShapeParams::Square {
            first_corner,
            second_corner,
        } => match anchor.index {
            0 => *first_corner = point,
            1 => *second_corner = point,
            _ => return Err(unsupported),
        },
        ShapeParams::Ellipse {
            semi_major,
            semi_minor,
        } => {
            let offset = point - centroid;
            match anchor.index {
                0 => *semi_major = clamped_projection(offset, frame.east),
                1 => *semi_minor = clamped_projection(offset, frame.north),
                _ => return Err(unsupported),
            }
        }
        ShapeParams::Circle { radius } => {
            if anchor.index != 0 {
                return Err(unsupported);
            }
            *radius = clamped_projection(point - centroid, frame.east);
        }
        ShapeParams::Sphere { radii } => {
            if anchor.index != 0 {
                return Err(unsupported);
            }
            radii.x = clamped_projection(point - centroid, frame.east);
        }
        ShapeParams::Ellipsoid { radii } => {
            let offset = point - centroid;
            match anchor.index {
                0 => radii.x = clamped_projection(offset, frame.east),
                1 => radii.y = clamped_projection(offset, frame.north),
                2 => radii.z = clamped_projection(offset, frame.up),
                _ => return Err(unsupported),
            }
        }
        ShapeParams::Parabola { start, end, .. } => match anchor.index {
            0 => *start = point,
            1 => *end = point,
            _ => return Err(unsupported),
        },
        ShapeParams::Billboard => return Err(unsupported),
    }
    Ok(())
}

/// Mid-edge drag: grow the boundary by inserting the resolved point after
/// the edge's leading vertex.
fn insert_vertex_after_edge(
    shape: &mut EditableShape,
    anchor: Anchor,
    point: Vec3,
) -> Result<(), EditError> {
    let unsupported = EditError::UnsupportedAnchor {
        editor_type: anchor.editor_type,
        index: anchor.index,
        kind: shape.params.kind(),
    };
    match &mut shape.params {
        ShapeParams::Polygon { vertices } | ShapeParams::Polyline { vertices } => {
            if anchor.index >= vertices.len() {
                return Err(unsupported);
            }
            vertices.insert(anchor.index + 1, point);
            Ok(())
        }
        _ => Err(unsupported),
    }
}

/// Move a point along `up` so it sits at the same height as `reference`.
fn to_height_of(point: Vec3, reference: Vec3, up: Vec3) -> Vec3 {
    point + up * (reference - point).dot(up)
}

/// Magnitude of `offset` projected on a unit axis, clamped away from zero.
fn clamped_projection(offset: Vec3, axis: Vec3) -> f32 {
    offset.dot(axis).abs().max(MIN_DIMENSION)
}

/// Signed angle from `a` to `b` about the `up` axis.
fn signed_angle_about(a: Vec3, b: Vec3, up: Vec3) -> f32 {
    a.cross(b).dot(up).atan2(a.dot(b))
}

/// The rectangle's third anchor: the rotation handle, offset from the corner
/// midpoint by half the diagonal swung through `angle_to_cross`.
fn rotation_vertex(first: Vec3, second: Vec3, angle_to_cross: f32, up: Vec3) -> Vec3 {
    let midpoint = (first + second) * 0.5;
    let half_diagonal = (second - first) * 0.5;
    midpoint + Quat::from_axis_angle(up, angle_to_cross) * half_diagonal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::testing::FakeScene;

    const EPSILON: f32 = 1e-3;

    fn polygon(points: &[Vec3]) -> EditableShape {
        EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Polygon {
                vertices: points.to_vec(),
            },
        )
    }

    /// Centered on the world origin, where the east-north-up frame
    /// degenerates to the world axes.
    fn square_points() -> Vec<Vec3> {
        vec![
            Vec3::new(-5.0, -5.0, 0.0),
            Vec3::new(5.0, -5.0, 0.0),
            Vec3::new(5.0, 5.0, 0.0),
            Vec3::new(-5.0, 5.0, 0.0),
        ]
    }

    #[test]
    fn test_polygon_anchor_counts() {
        let shape = polygon(&square_points());
        let set = anchor_points(&shape);
        assert_eq!(set.centroids.len(), 1);
        assert_eq!(set.vertices.len(), 4);
        assert_eq!(set.mid_vertices.len(), 4);
        assert!(set.top_vertices.is_empty());
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_open_polyline_has_one_fewer_mid_vertex() {
        let shape = EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Polyline {
                vertices: square_points(),
            },
        );
        let set = anchor_points(&shape);
        assert_eq!(set.vertices.len(), 4);
        assert_eq!(set.mid_vertices.len(), 3);
    }

    #[test]
    fn test_circle_and_ellipsoid_anchor_counts() {
        let circle = EditableShape::new(Vec3::ZERO, ShapeParams::Circle { radius: 5.0 });
        assert_eq!(anchor_points(&circle).vertices.len(), 1);

        let ellipsoid = EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Ellipsoid {
                radii: Vec3::new(3.0, 4.0, 5.0),
            },
        );
        assert_eq!(anchor_points(&ellipsoid).vertices.len(), 3);
    }

    #[test]
    fn test_extruded_polygon_gains_top_anchors() {
        let shape = polygon(&square_points()).with_extruded_height(10.0);
        let set = anchor_points(&shape);
        assert_eq!(set.centroids.len(), 2);
        assert_eq!(set.top_vertices.len(), 4);
        // Top centroid sits one extrusion height above the base centroid.
        let lift = set.centroids[1].position - set.centroids[0].position;
        assert!((lift.length() - 10.0).abs() < EPSILON);
        assert_eq!(set.top_centroid_flat_index(), Some(1));
    }

    #[test]
    fn test_ground_clamped_vertices_move_to_centroid_height() {
        let mut points = square_points();
        points[2].z = 7.0; // one stray vertex above the base plane
        let shape = polygon(&points).clamped_to_ground();
        let set = anchor_points(&shape);
        let centroid_z = shape.centroid().z;
        for anchor in &set.vertices {
            assert!((anchor.position.z - centroid_z).abs() < EPSILON);
        }
    }

    #[test]
    fn test_sphere_anchor_drag_stretches_one_axis() {
        let scene = FakeScene::new();
        let mut shape = EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Sphere {
                radii: Vec3::splat(50.0),
            },
        );
        let anchor = anchor_points(&shape).vertices[0];
        assert!((anchor.position - Vec3::new(50.0, 0.0, 0.0)).length() < EPSILON);

        apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(anchor),
            Drag::World(Vec3::new(70.0, 0.0, 0.0)),
        )
        .unwrap();
        match shape.params {
            ShapeParams::Sphere { radii } => {
                assert!((radii - Vec3::new(70.0, 50.0, 50.0)).length() < EPSILON);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_ellipse_minor_axis_clamps_at_center() {
        let scene = FakeScene::new();
        let mut shape = EditableShape::new(
            Vec3::ZERO,
            ShapeParams::Ellipse {
                semi_major: 20.0,
                semi_minor: 10.0,
            },
        );
        let minor = anchor_points(&shape).vertices[1];
        apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(minor),
            Drag::World(Vec3::ZERO),
        )
        .unwrap();
        match shape.params {
            ShapeParams::Ellipse { semi_minor, .. } => assert_eq!(semi_minor, MIN_DIMENSION),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_top_centroid_drag_raises_extrusion() {
        // Default fake view: screen up is world +Z, 1 px per unit, so a
        // screen delta of (0, -5) projects to +5 along local up.
        let scene = FakeScene::new();
        let mut shape = polygon(&square_points()).with_extruded_height(10.0);
        let top = anchor_points(&shape).centroids[1];
        let set = apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(top),
            Drag::Screen {
                start: Vec2::new(40.0, 80.0),
                end: Vec2::new(40.0, 75.0),
            },
        )
        .unwrap();
        assert!((shape.extruded_height.unwrap() - 15.0).abs() < EPSILON);
        // The refreshed set reports the new top-centroid position.
        let lift = set.centroids[1].position - set.centroids[0].position;
        assert!((lift.length() - 15.0).abs() < EPSILON);
    }

    #[test]
    fn test_extrusion_height_never_goes_negative() {
        let scene = FakeScene::new();
        let mut shape = polygon(&square_points()).with_extruded_height(2.0);
        let top = anchor_points(&shape).centroids[1];
        apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(top),
            Drag::Screen {
                start: Vec2::ZERO,
                end: Vec2::new(0.0, 50.0),
            },
        )
        .unwrap();
        assert_eq!(shape.extruded_height, Some(MIN_DIMENSION));
    }

    #[test]
    fn test_base_centroid_drag_moves_whole_shape() {
        let scene = FakeScene::new();
        let mut shape = polygon(&square_points());
        let centroid = anchor_points(&shape).centroids[0];
        apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(centroid),
            Drag::World(Vec3::new(25.0, 5.0, 0.0)),
        )
        .unwrap();
        assert!((shape.centroid() - Vec3::new(25.0, 5.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_gizmo_offset_translates_shape() {
        let scene = FakeScene::new();
        let mut shape = EditableShape::new(
            Vec3::new(100.0, 0.0, 0.0),
            ShapeParams::Circle { radius: 5.0 },
        );
        apply_drag(
            &scene,
            &mut shape,
            DragTarget::Gizmo(GizmoPart::Axis(geosketch_api::GizmoAxis::X)),
            Drag::Offset(Vec3::new(0.0, 30.0, 0.0)),
        )
        .unwrap();
        assert_eq!(shape.center, Vec3::new(100.0, 30.0, 0.0));
    }

    #[test]
    fn test_rectangle_rotation_handle_recomputes_angle() {
        let scene = FakeScene::new();
        let mut shape = EditableShape::new(
            Vec3::new(0.0, 0.0, 1000.0),
            ShapeParams::Rectangle {
                first_corner: Vec3::new(-10.0, 0.0, 1000.0),
                second_corner: Vec3::new(10.0, 0.0, 1000.0),
                angle_to_cross: 0.0,
            },
        );
        let rotation = anchor_points(&shape).vertices[2];
        // Drag the handle to a point seeing the corners at a right angle.
        apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(rotation),
            Drag::World(Vec3::new(0.0, 10.0, 1000.0)),
        )
        .unwrap();
        match shape.params {
            ShapeParams::Rectangle { angle_to_cross, .. } => {
                assert!(
                    (angle_to_cross.abs() - std::f32::consts::FRAC_PI_2).abs() < 1e-2,
                    "angle was {angle_to_cross}"
                );
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_mid_vertex_drag_inserts_a_vertex() {
        let scene = FakeScene::new();
        let mut shape = polygon(&square_points());
        let before = anchor_points(&shape);
        let mid = before.mid_vertices[0];
        let set = apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(mid),
            Drag::World(Vec3::new(5.0, -3.0, 0.0)),
        )
        .unwrap();
        assert_eq!(set.vertices.len(), before.vertices.len() + 1);
        assert_eq!(set.mid_vertices.len(), before.mid_vertices.len() + 1);
        match &shape.params {
            ShapeParams::Polygon { vertices } => {
                assert_eq!(vertices[1], Vec3::new(5.0, -3.0, 0.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_vertex_drag_on_billboard_is_rejected() {
        let scene = FakeScene::new();
        let mut shape = EditableShape::new(Vec3::ZERO, ShapeParams::Billboard);
        let bogus = Anchor::new(Vec3::ZERO, EditorType::Vertex, 0);
        let result = apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(bogus),
            Drag::World(Vec3::ONE),
        );
        assert!(matches!(result, Err(EditError::UnsupportedAnchor { .. })));
    }

    #[test]
    fn test_mismatched_payload_is_rejected() {
        let scene = FakeScene::new();
        let mut shape = EditableShape::new(Vec3::ZERO, ShapeParams::Circle { radius: 5.0 });
        let vertex = anchor_points(&shape).vertices[0];
        let result = apply_drag(
            &scene,
            &mut shape,
            DragTarget::Anchor(vertex),
            Drag::Screen {
                start: Vec2::ZERO,
                end: Vec2::ONE,
            },
        );
        assert!(matches!(result, Err(EditError::MismatchedDrag { .. })));
    }
}
