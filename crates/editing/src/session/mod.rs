//! Interactive shape editing session.
//!
//! A session owns the editing chrome for exactly one shape at a time: pooled
//! anchor markers, an optional translation gizmo at the centroid, hover
//! feedback, and the pointer-driven drag state machine in [`pointer`].

mod markers;
mod pointer;

pub use pointer::PointerEvent;

use geosketch_api::TooltipSet;
use tracing::{info, warn};

use crate::anchors::{self, DragTarget};
use crate::gizmo::{AxisGizmo, GizmoOptions, GizmoTarget};
use crate::scene::{CursorIcon, Scene};
use crate::shapes::{EditableShape, ShapeParams};
use markers::MarkerPool;

/// Session tuning knobs.
///
/// `on_update` fires after every applied drag step and once more on release,
/// always with the shape's current state.
pub struct EditOptions {
    /// Multiplier on the screen delta of a height-handle drag.
    pub height_scalar: f32,
    /// Multiplier on resolved gizmo-axis offsets.
    pub axis_moving_scalar: f32,
    /// Maximum hits requested per hover probe.
    pub pick_limit: usize,
    pub show_gizmo: bool,
    pub tooltips: TooltipSet,
    pub on_update: Option<Box<dyn FnMut(&EditableShape)>>,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            height_scalar: 1.0,
            axis_moving_scalar: 1.0,
            pick_limit: 3,
            show_gizmo: true,
            tooltips: TooltipSet::default(),
            on_update: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Hovering {
        target: DragTarget,
    },
    Dragging {
        target: DragTarget,
        last: glam::Vec2,
        dimmed: bool,
    },
}

/// One shape's editing chrome plus interaction state.
pub struct ShapeEditSession {
    shape: Option<EditableShape>,
    options: EditOptions,
    phase: Phase,
    /// Set while the session expects per-frame [`ShapeEditSession::pre_render`] calls.
    subscribed: bool,
    markers: MarkerPool,
    gizmo: Option<AxisGizmo>,
}

impl Default for ShapeEditSession {
    fn default() -> Self {
        Self::new(EditOptions::default())
    }
}

impl ShapeEditSession {
    pub fn new(options: EditOptions) -> Self {
        Self {
            shape: None,
            options,
            phase: Phase::Idle,
            subscribed: false,
            markers: MarkerPool::default(),
            gizmo: None,
        }
    }

    /// Take a shape under edit: build its anchor markers and gizmo, show the
    /// instruction tooltip, and start expecting pre-render calls.
    ///
    /// Any shape previously under edit is cleared first.
    pub fn begin_editing(&mut self, scene: &mut dyn Scene, shape: EditableShape) {
        self.clear(scene);
        if !scene.has_drawables() {
            warn!("scene has no drawable collection, editing not started");
            return;
        }

        let set = anchors::anchor_points(&shape);
        self.markers.sync(scene, &set);

        let centroid = shape.centroid();
        if self.options.show_gizmo {
            let target = GizmoTarget::Marker {
                position: centroid,
                radius: Some(shape.bounding_radius()),
            };
            match AxisGizmo::new(scene, target, GizmoOptions::default()) {
                Ok(gizmo) => self.gizmo = Some(gizmo),
                Err(error) => warn!(%error, "gizmo could not be attached"),
            }
        }

        if let Some(screen) = scene.project_to_screen(centroid) {
            scene.show_tooltip(&self.options.tooltips.before_editing, screen);
        }

        info!(kind = shape.params.kind(), "shape editing started");
        self.shape = Some(shape);
        self.subscribed = true;
        scene.request_redraw();
    }

    /// Per-frame hook: keeps the gizmo's apparent size steady while the
    /// camera moves. A no-op when no shape is under edit.
    pub fn pre_render(&mut self, scene: &mut dyn Scene) {
        if !self.subscribed {
            return;
        }
        if let Some(gizmo) = self.gizmo.as_mut() {
            gizmo.update_scale_for_camera(scene);
        }
    }

    /// Refresh markers and gizmo after the shape was mutated outside the
    /// drag path (undo, a property panel edit).
    ///
    /// `extrusion_only` is a hint that only the extruded height changed, in
    /// which case just the top-centroid marker is repositioned. Kinds whose
    /// anchors all depend on the height ignore the hint and re-derive fully.
    pub fn update_assistants(&mut self, scene: &mut dyn Scene, extrusion_only: bool) {
        let Some(shape) = self.shape.as_ref() else {
            return;
        };
        let set = anchors::anchor_points(shape);
        let full = !extrusion_only
            || matches!(
                shape.params,
                ShapeParams::Billboard
                    | ShapeParams::Ellipse { .. }
                    | ShapeParams::Circle { .. }
                    | ShapeParams::Sphere { .. }
                    | ShapeParams::Ellipsoid { .. }
            );
        let centroid = shape.centroid();
        if full {
            self.markers.sync(scene, &set);
            if let Some(gizmo) = self.gizmo.as_mut() {
                if gizmo.pivot().origin != centroid {
                    gizmo.move_to(scene, centroid);
                }
            }
        } else if let Some(flat) = set.top_centroid_flat_index() {
            self.markers.set_at(scene, flat, &set.centroids[1]);
        }
        scene.request_redraw();
    }

    /// Stop editing: tear down markers and gizmo, undo any in-flight drag
    /// side effects, and release the shape. Safe to call repeatedly.
    pub fn clear(&mut self, scene: &mut dyn Scene) {
        if self.shape.is_none() && self.markers.len() == 0 && self.gizmo.is_none() {
            return;
        }
        if let Phase::Dragging { dimmed, .. } = self.phase {
            scene.set_camera_controls(true);
            if dimmed {
                if let Some(shape) = self.shape.as_mut() {
                    shape.restore_dim();
                }
            }
        }
        self.markers.clear(scene);
        if let Some(gizmo) = self.gizmo.take() {
            gizmo.destroy(scene);
        }
        scene.hide_tooltip();
        scene.set_cursor(CursorIcon::Default);
        self.phase = Phase::Idle;
        self.subscribed = false;
        self.shape = None;
        scene.request_redraw();
        info!("shape editing cleared");
    }

    /// Clear and reset the options to their defaults.
    pub fn destroy(&mut self, scene: &mut dyn Scene) {
        self.clear(scene);
        self.options = EditOptions::default();
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The shape currently under edit, reflecting all applied drags.
    pub fn shape(&self) -> Option<&EditableShape> {
        self.shape.as_ref()
    }

    pub(super) fn notify_update(&mut self) {
        if let (Some(callback), Some(shape)) = (self.options.on_update.as_mut(), self.shape.as_ref())
        {
            callback(shape);
        }
    }
}
