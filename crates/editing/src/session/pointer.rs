//! Pointer-driven hover/drag state machine for the edit session.

use geosketch_api::{EditorType, GizmoPart};
use glam::Vec2;
use tracing::{info, warn};

use super::{Phase, ShapeEditSession};
use crate::anchors::{self, Anchor, Drag, DragTarget};
use crate::scene::{CursorIcon, PickData, Scene};

/// A pointer event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    Pressed(Vec2),
    Released(Vec2),
}

impl ShapeEditSession {
    /// Feed one pointer event through the hover/drag state machine.
    ///
    /// Events arriving while no shape is under edit are ignored.
    pub fn handle_pointer(&mut self, scene: &mut dyn Scene, event: PointerEvent) {
        if self.shape.is_none() {
            return;
        }
        match event {
            PointerEvent::Moved(position) => {
                if matches!(self.phase, Phase::Dragging { .. }) {
                    self.drag_step(scene, position);
                } else {
                    self.probe_hover(scene, position);
                }
            }
            PointerEvent::Pressed(position) => {
                // A second press mid-drag (extra button, missed release)
                // must not drop the drag and its camera/dim side effects;
                // only pointer-up or clear/destroy end a drag.
                if matches!(self.phase, Phase::Dragging { .. }) {
                    return;
                }
                // Re-probe so a press lands on what is under the cursor now,
                // not on a stale hover.
                self.probe_hover(scene, position);
                self.press(scene, position);
            }
            PointerEvent::Released(_) => {
                if matches!(self.phase, Phase::Dragging { .. }) {
                    self.release(scene);
                }
            }
        }
    }

    /// Classify what is under the cursor and update hover feedback.
    fn probe_hover(&mut self, scene: &mut dyn Scene, position: Vec2) {
        let hits = scene.pick(position, self.options.pick_limit);

        // Rank the first anchor hit against the gizmo's pick priority by
        // position in the nearest-first list; labels never participate.
        let anchor_hit = hits.iter().enumerate().find_map(|(rank, hit)| match hit.data {
            Some(PickData::Anchor { editor_type, index }) if self.markers.contains(hit.handle) => {
                Some((rank, editor_type, index))
            }
            _ => None,
        });
        let gizmo_rank = self.gizmo.as_ref().and_then(|gizmo| {
            hits.iter().position(|hit| gizmo.contains(hit.handle))
        });

        let anchor_wins = match (anchor_hit, gizmo_rank) {
            (Some((anchor_rank, ..)), Some(gizmo_rank)) => anchor_rank < gizmo_rank,
            (Some(_), None) => true,
            _ => false,
        };

        if anchor_wins {
            if let Some((_, editor_type, index)) = anchor_hit {
                if let Some(anchor) = self.find_anchor(editor_type, index) {
                    self.hover_anchor(scene, position, anchor);
                    return;
                }
            }
        }
        if let Some(part) = self.gizmo_pick(&hits) {
            self.hover_gizmo(scene, position, part);
            return;
        }
        self.hover_nothing(scene);
    }

    fn gizmo_pick(&self, hits: &[crate::scene::PickHit]) -> Option<GizmoPart> {
        let part = self.gizmo.as_ref()?.highlight_pick_priority(hits);
        (!part.is_none()).then_some(part)
    }

    /// Current anchor matching a pick tag, with its present position.
    fn find_anchor(&self, editor_type: EditorType, index: usize) -> Option<Anchor> {
        let shape = self.shape.as_ref()?;
        anchors::anchor_points(shape)
            .iter()
            .find(|anchor| anchor.editor_type == editor_type && anchor.index == index)
            .copied()
    }

    fn hover_anchor(&mut self, scene: &mut dyn Scene, position: Vec2, anchor: Anchor) {
        if let Some(gizmo) = self.gizmo.as_mut() {
            gizmo.set_highlight(scene, GizmoPart::None);
        }
        let text = match anchor.editor_type {
            EditorType::Centroid if anchor.index > 0 => &self.options.tooltips.top_centroid,
            EditorType::Centroid => &self.options.tooltips.centroid,
            _ => &self.options.tooltips.vertex,
        };
        scene.show_tooltip(text, position);
        scene.set_cursor(CursorIcon::Grab);
        self.phase = Phase::Hovering {
            target: DragTarget::Anchor(anchor),
        };
    }

    fn hover_gizmo(&mut self, scene: &mut dyn Scene, position: Vec2, part: GizmoPart) {
        if let Some(gizmo) = self.gizmo.as_mut() {
            gizmo.set_highlight(scene, part);
        }
        scene.show_tooltip(&self.options.tooltips.axis, position);
        scene.set_cursor(CursorIcon::Grab);
        self.phase = Phase::Hovering {
            target: DragTarget::Gizmo(part),
        };
    }

    fn hover_nothing(&mut self, scene: &mut dyn Scene) {
        if let Some(gizmo) = self.gizmo.as_mut() {
            gizmo.set_highlight(scene, GizmoPart::None);
        }
        scene.hide_tooltip();
        scene.set_cursor(CursorIcon::Default);
        self.phase = Phase::Idle;
    }

    fn press(&mut self, scene: &mut dyn Scene, position: Vec2) {
        let Phase::Hovering { target } = self.phase else {
            return;
        };
        scene.set_camera_controls(false);
        scene.set_cursor(CursorIcon::Grabbing);
        scene.hide_tooltip();

        // Dim the shape while its base centroid is dragged so it does not
        // occlude the handle.
        let dimmed = matches!(
            target,
            DragTarget::Anchor(Anchor {
                editor_type: EditorType::Centroid,
                index: 0,
                ..
            })
        );
        if dimmed {
            if let Some(shape) = self.shape.as_mut() {
                shape.dim();
            }
            scene.request_redraw();
        }
        self.phase = Phase::Dragging {
            target,
            last: position,
            dimmed,
        };
        info!(?target, "drag started");
    }

    fn drag_step(&mut self, scene: &mut dyn Scene, position: Vec2) {
        let Phase::Dragging { target, last, .. } = self.phase else {
            return;
        };
        let drag = match target {
            DragTarget::Gizmo(part) => {
                let offset = match self.gizmo.as_ref() {
                    Some(gizmo) => gizmo.resolve_drag(scene, last, position, part),
                    None => return,
                };
                Drag::Offset(offset * self.options.axis_moving_scalar)
            }
            DragTarget::Anchor(Anchor {
                editor_type: EditorType::Centroid,
                index,
                ..
            }) if index > 0 => Drag::Screen {
                start: last,
                end: last + (position - last) * self.options.height_scalar,
            },
            DragTarget::Anchor(_) => match scene.screen_to_world(position) {
                Some(point) => Drag::World(point),
                None => {
                    // Cursor left the globe; hold the shape where it is.
                    self.advance_drag(position);
                    return;
                }
            },
        };

        let Some(shape) = self.shape.as_mut() else {
            return;
        };
        match anchors::apply_drag(scene, shape, target, drag) {
            Ok(set) => {
                let centroid = shape.centroid();
                self.markers.sync(scene, &set);
                if let Some(gizmo) = self.gizmo.as_mut() {
                    if gizmo.pivot().origin != centroid {
                        gizmo.move_to(scene, centroid);
                    }
                }
                scene.request_redraw();
                self.notify_update();
            }
            Err(error) => warn!(%error, "drag could not be applied"),
        }
        self.advance_drag(position);
    }

    fn advance_drag(&mut self, position: Vec2) {
        if let Phase::Dragging { last, .. } = &mut self.phase {
            *last = position;
        }
    }

    fn release(&mut self, scene: &mut dyn Scene) {
        let Phase::Dragging { dimmed, .. } = self.phase else {
            return;
        };
        scene.set_camera_controls(true);
        scene.set_cursor(CursorIcon::Default);
        if dimmed {
            if let Some(shape) = self.shape.as_mut() {
                shape.restore_dim();
            }
            scene.request_redraw();
        }
        self.phase = Phase::Idle;
        self.notify_update();
        info!("drag finished");
    }
}
