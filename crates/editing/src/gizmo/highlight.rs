//! Gizmo highlight state and pick priority.

use geosketch_api::GizmoPart;

use super::{AxisGizmo, HIGHLIGHT_COLOR};
use crate::scene::{PickHit, Scene};

impl AxisGizmo {
    /// Highlight one part, restoring every other part to its base color.
    ///
    /// At most one part is highlighted at a time. Calling this with the
    /// current value is a no-op and requests no redraw.
    pub fn set_highlight(&mut self, scene: &mut dyn Scene, part: GizmoPart) {
        if self.highlighted == part {
            return;
        }
        if !part.is_none() && self.part(part).is_none() {
            // Part not built (planes disabled); leave the state untouched.
            return;
        }
        if let Some(previous) = self.part(self.highlighted) {
            scene.set_color(previous.handle, previous.base_color);
        }
        if let Some(next) = self.part(part) {
            scene.set_color(next.handle, HIGHLIGHT_COLOR);
        }
        self.highlighted = part;
        scene.request_redraw();
    }

    /// Walk an ordered (nearest-first) pick list and return the first part
    /// belonging to this gizmo.
    ///
    /// Exception: without depth testing, two coplanar faces can occupy the
    /// same pixel and the nearest hit is then arbitrary, so a plane in
    /// second place wins over a non-plane first hit. This tie-break is a
    /// deliberate rule, not an accident of hit ordering.
    pub fn highlight_pick_priority(&self, hits: &[PickHit]) -> GizmoPart {
        if !self.depth_test && hits.len() >= 2 {
            if let Some(part) = self.own_part(&hits[1]) {
                let first_is_plane = self
                    .own_part(&hits[0])
                    .map(|p| p.is_plane())
                    .unwrap_or(false);
                if part.is_plane() && !first_is_plane {
                    return part;
                }
            }
        }
        hits.iter()
            .find_map(|hit| self.own_part(hit))
            .unwrap_or(GizmoPart::None)
    }
}
