//! Translation gizmo: three axis arms and three plane faces anchored at a
//! pivot point.
//!
//! The gizmo keeps a roughly constant apparent size on screen by rescaling
//! itself from the camera distance once per rendered frame, and resolves 2D
//! screen drags into world-space offsets along its axes or planes.

mod highlight;
pub(crate) mod projection;
mod scale;

use geosketch_api::{GizmoAxis, GizmoPart, GizmoPlane};
use glam::Vec3;
use tracing::debug;

use crate::error::GizmoError;
use crate::frame::{LocalFrame, Pivot};
use crate::scene::{PickData, PrimitiveHandle, Scene};

/// World-space axis length when the target carries no radius hint.
pub const DEFAULT_AXIS_LENGTH: f32 = 100.0;
/// Bounding-radius multiplier for bounded and marker targets.
const RADIUS_TO_AXIS_LENGTH: f32 = 1.5;
/// Fraction of the axis length spanned by each plane face.
pub const DEFAULT_PLANE_SCALE: f32 = 0.3;

/// Base axis colors, indexed by [`GizmoAxis::index`]: X=red, Y=green, Z=blue.
pub const AXIS_COLORS: [[f32; 4]; 3] = [
    [0.9, 0.2, 0.2, 1.0],
    [0.2, 0.9, 0.2, 1.0],
    [0.2, 0.2, 0.9, 1.0],
];
/// Color of the highlighted part.
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 0.2, 1.0];
const PLANE_ALPHA: f32 = 0.5;
const AXIS_LINE_WIDTH: f32 = 8.0;

/// The thing a gizmo moves, described by its capability set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoTarget {
    /// Mesh or tileset instance with a bounding sphere and a uniform scale.
    Bounded {
        center: Vec3,
        bounding_radius: f32,
        uniform_scale: f32,
    },
    /// Point marker, optionally carrying a world-space radius attribute.
    Marker { position: Vec3, radius: Option<f32> },
}

impl GizmoTarget {
    pub fn position(&self) -> Vec3 {
        match *self {
            GizmoTarget::Bounded { center, .. } => center,
            GizmoTarget::Marker { position, .. } => position,
        }
    }

    /// Axis length heuristic: 1.5x the bounding radius scaled by the
    /// target's uniform scale, 1.5x a marker's radius attribute, or the
    /// caller default.
    fn axis_length(&self, default_length: f32) -> Result<f32, GizmoError> {
        let length = match *self {
            GizmoTarget::Bounded {
                bounding_radius,
                uniform_scale,
                ..
            } => {
                if !(bounding_radius.is_finite() && bounding_radius > 0.0) {
                    return Err(GizmoError::UnsupportedTarget(format!(
                        "bounded target without a usable bounding radius ({bounding_radius})"
                    )));
                }
                RADIUS_TO_AXIS_LENGTH * bounding_radius * uniform_scale
            }
            GizmoTarget::Marker {
                radius: Some(radius),
                ..
            } => RADIUS_TO_AXIS_LENGTH * radius,
            GizmoTarget::Marker { radius: None, .. } => default_length,
        };
        if !(length.is_finite() && length > 0.0) {
            return Err(GizmoError::InvalidAxisLength(length));
        }
        Ok(length)
    }
}

/// Construction options.
#[derive(Debug, Clone)]
pub struct GizmoOptions {
    /// Axis length used when the target has no radius to derive one from.
    pub default_axis_length: f32,
    pub plane_scale: f32,
    pub show_planes: bool,
    pub minimum_scale: f32,
    pub maximum_scale: f32,
    /// Whether the renderer depth-tests the gizmo primitives. When disabled
    /// the coplanar pick tie-break of
    /// [`AxisGizmo::highlight_pick_priority`] applies.
    pub depth_test: bool,
    /// Frame override; defaults to east-north-up at the target.
    pub frame: Option<LocalFrame>,
}

impl Default for GizmoOptions {
    fn default() -> Self {
        Self {
            default_axis_length: DEFAULT_AXIS_LENGTH,
            plane_scale: DEFAULT_PLANE_SCALE,
            show_planes: true,
            minimum_scale: 0.3,
            maximum_scale: 5.0,
            depth_test: false,
            frame: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct OwnedPart {
    handle: PrimitiveHandle,
    base_color: [f32; 4],
}

/// The renderable translation gizmo.
pub struct AxisGizmo {
    target: GizmoTarget,
    pivot: Pivot,
    custom_frame: bool,
    axis_length: f32,
    plane_scale: f32,
    minimum_scale: f32,
    maximum_scale: f32,
    depth_test: bool,
    display_scale: f32,
    axes: [OwnedPart; 3],
    planes: Vec<(GizmoPlane, OwnedPart)>,
    highlighted: GizmoPart,
}

impl AxisGizmo {
    /// Build the gizmo's primitives in the scene, anchored at the target's
    /// current placement. Fails with [`GizmoError::UnsupportedTarget`] when
    /// the target satisfies no known capability set.
    pub fn new(
        scene: &mut dyn Scene,
        target: GizmoTarget,
        options: GizmoOptions,
    ) -> Result<Self, GizmoError> {
        let origin = target.position();
        if !origin.is_finite() {
            return Err(GizmoError::UnsupportedTarget(
                "target has no finite placement".to_string(),
            ));
        }
        let axis_length = target.axis_length(options.default_axis_length)?;
        let pivot = match options.frame {
            Some(frame) => Pivot::with_frame(origin, frame)?,
            None => Pivot::east_north_up(origin),
        };

        let axes = GizmoAxis::ALL.map(|axis| {
            let color = AXIS_COLORS[axis.index()];
            let handle = scene.create_line(
                pivot.origin,
                pivot.axis_tip(axis, axis_length),
                color,
                AXIS_LINE_WIDTH,
            );
            scene.set_pick_data(handle, PickData::Gizmo(GizmoPart::Axis(axis)));
            OwnedPart {
                handle,
                base_color: color,
            }
        });

        let mut planes = Vec::new();
        if options.show_planes {
            for plane in GizmoPlane::ALL {
                let color = plane_color(plane);
                let handle = scene.create_quad(
                    plane_corners(&pivot, plane, axis_length * options.plane_scale),
                    color,
                );
                scene.set_pick_data(handle, PickData::Gizmo(GizmoPart::Plane(plane)));
                planes.push((
                    plane,
                    OwnedPart {
                        handle,
                        base_color: color,
                    },
                ));
            }
        }

        scene.request_redraw();
        debug!(axis_length, "gizmo attached");

        Ok(Self {
            target,
            pivot,
            custom_frame: options.frame.is_some(),
            axis_length,
            plane_scale: options.plane_scale,
            minimum_scale: options.minimum_scale,
            maximum_scale: options.maximum_scale,
            depth_test: options.depth_test,
            display_scale: 1.0,
            axes,
            planes,
            highlighted: GizmoPart::None,
        })
    }

    pub fn pivot(&self) -> &Pivot {
        &self.pivot
    }

    pub fn target(&self) -> &GizmoTarget {
        &self.target
    }

    pub fn axis_length(&self) -> f32 {
        self.axis_length
    }

    pub fn display_scale(&self) -> f32 {
        self.display_scale
    }

    pub fn highlighted(&self) -> GizmoPart {
        self.highlighted
    }

    /// True if the handle is one of the gizmo's own renderables.
    pub fn contains(&self, handle: PrimitiveHandle) -> bool {
        self.axes.iter().any(|part| part.handle == handle)
            || self.planes.iter().any(|(_, part)| part.handle == handle)
    }

    /// Move the pivot to follow the target. The frame is re-derived unless a
    /// caller-supplied frame was given at construction.
    pub fn move_to(&mut self, scene: &mut dyn Scene, origin: Vec3) {
        self.pivot = if self.custom_frame {
            Pivot {
                origin,
                frame: self.pivot.frame,
            }
        } else {
            Pivot::east_north_up(origin)
        };
        for (index, axis) in GizmoAxis::ALL.into_iter().enumerate() {
            scene.set_endpoints(
                self.axes[index].handle,
                self.pivot.origin,
                self.pivot.axis_tip(axis, self.axis_length),
            );
        }
        for (plane, part) in &self.planes {
            scene.set_corners(
                part.handle,
                plane_corners(&self.pivot, *plane, self.axis_length * self.plane_scale),
            );
        }
        self.apply_placement(scene);
        scene.request_redraw();
    }

    /// Remove every owned renderable and release the target reference.
    pub fn destroy(self, scene: &mut dyn Scene) {
        for part in self.axes {
            scene.remove(part.handle);
        }
        for (_, part) in self.planes {
            scene.remove(part.handle);
        }
        scene.request_redraw();
    }

    fn part(&self, part: GizmoPart) -> Option<&OwnedPart> {
        match part {
            GizmoPart::None => None,
            GizmoPart::Axis(axis) => Some(&self.axes[axis.index()]),
            GizmoPart::Plane(plane) => self
                .planes
                .iter()
                .find(|(p, _)| *p == plane)
                .map(|(_, part)| part),
        }
    }

    /// Gizmo part identified by a pick hit, if the hit is one of ours.
    fn own_part(&self, hit: &crate::scene::PickHit) -> Option<GizmoPart> {
        match hit.data {
            Some(PickData::Gizmo(part)) if self.contains(hit.handle) => Some(part),
            _ => None,
        }
    }
}

/// Corners of a plane face spanning `extent` of each contributing axis.
fn plane_corners(pivot: &Pivot, plane: GizmoPlane, extent: f32) -> [Vec3; 4] {
    let [a, b] = plane.axes();
    let da = pivot.axis_direction(a) * extent;
    let db = pivot.axis_direction(b) * extent;
    [
        pivot.origin,
        pivot.origin + da,
        pivot.origin + da + db,
        pivot.origin + db,
    ]
}

/// Plane faces blend the colors of their two contributing axes.
fn plane_color(plane: GizmoPlane) -> [f32; 4] {
    let [a, b] = plane.axes();
    let ca = AXIS_COLORS[a.index()];
    let cb = AXIS_COLORS[b.index()];
    [
        (ca[0] + cb[0]) * 0.5,
        (ca[1] + cb[1]) * 0.5,
        (ca[2] + cb[2]) * 0.5,
        PLANE_ALPHA,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::testing::{FakeScene, PrimitiveKind};

    pub(super) fn bounded_target(center: Vec3, radius: f32) -> GizmoTarget {
        GizmoTarget::Bounded {
            center,
            bounding_radius: radius,
            uniform_scale: 1.0,
        }
    }

    #[test]
    fn test_axis_length_from_bounding_radius() {
        let mut scene = FakeScene::new();
        let target = GizmoTarget::Bounded {
            center: Vec3::ZERO,
            bounding_radius: 40.0,
            uniform_scale: 2.0,
        };
        let gizmo = AxisGizmo::new(&mut scene, target, GizmoOptions::default()).unwrap();
        assert!((gizmo.axis_length() - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_axis_length_from_marker_radius_and_default() {
        let mut scene = FakeScene::new();
        let with_radius = GizmoTarget::Marker {
            position: Vec3::ZERO,
            radius: Some(10.0),
        };
        let gizmo = AxisGizmo::new(&mut scene, with_radius, GizmoOptions::default()).unwrap();
        assert!((gizmo.axis_length() - 15.0).abs() < 1e-6);

        let bare = GizmoTarget::Marker {
            position: Vec3::ZERO,
            radius: None,
        };
        let gizmo = AxisGizmo::new(&mut scene, bare, GizmoOptions::default()).unwrap();
        assert!((gizmo.axis_length() - DEFAULT_AXIS_LENGTH).abs() < 1e-6);
    }

    #[test]
    fn test_unsupported_target_creates_nothing_usable() {
        let mut scene = FakeScene::new();
        let bad = GizmoTarget::Bounded {
            center: Vec3::ZERO,
            bounding_radius: f32::NAN,
            uniform_scale: 1.0,
        };
        assert!(matches!(
            AxisGizmo::new(&mut scene, bad, GizmoOptions::default()),
            Err(GizmoError::UnsupportedTarget(_))
        ));

        let adrift = GizmoTarget::Marker {
            position: Vec3::splat(f32::INFINITY),
            radius: None,
        };
        assert!(AxisGizmo::new(&mut scene, adrift, GizmoOptions::default()).is_err());
    }

    #[test]
    fn test_owns_three_axes_and_three_planes() {
        let mut scene = FakeScene::new();
        let gizmo = AxisGizmo::new(
            &mut scene,
            bounded_target(Vec3::ZERO, 50.0),
            GizmoOptions::default(),
        )
        .unwrap();
        assert_eq!(scene.count_of(PrimitiveKind::Line), 3);
        assert_eq!(scene.count_of(PrimitiveKind::Quad), 3);
        for part in gizmo.axes.iter() {
            assert!(gizmo.contains(part.handle));
        }
        assert!(!gizmo.contains(PrimitiveHandle(9999)));
    }

    #[test]
    fn test_planes_can_be_disabled() {
        let mut scene = FakeScene::new();
        let options = GizmoOptions {
            show_planes: false,
            ..GizmoOptions::default()
        };
        AxisGizmo::new(&mut scene, bounded_target(Vec3::ZERO, 50.0), options).unwrap();
        assert_eq!(scene.count_of(PrimitiveKind::Quad), 0);
    }

    #[test]
    fn test_destroy_removes_all_primitives() {
        let mut scene = FakeScene::new();
        let gizmo = AxisGizmo::new(
            &mut scene,
            bounded_target(Vec3::ZERO, 50.0),
            GizmoOptions::default(),
        )
        .unwrap();
        gizmo.destroy(&mut scene);
        assert!(scene.primitives.is_empty());
    }

    #[test]
    fn test_move_to_translates_arms() {
        let mut scene = FakeScene::new();
        let mut gizmo = AxisGizmo::new(
            &mut scene,
            bounded_target(Vec3::ZERO, 50.0),
            GizmoOptions::default(),
        )
        .unwrap();
        let new_origin = Vec3::new(10.0, 20.0, 30.0);
        gizmo.move_to(&mut scene, new_origin);
        assert_eq!(gizmo.pivot().origin, new_origin);
        let x_arm = &scene.primitives[&gizmo.axes[0].handle];
        assert_eq!(x_arm.positions[0], new_origin);
    }
}
