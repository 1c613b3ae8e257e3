//! Pooled anchor markers.
//!
//! Markers are scene points reused across edits by flat anchor index, so a
//! drag that only moves anchors never reallocates renderer resources.

use geosketch_api::EditorType;

use crate::anchors::{Anchor, AnchorSet};
use crate::scene::{PickData, PrimitiveHandle, Scene};

const MARKER_PIXEL_SIZE: f32 = 10.0;

const CENTROID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const VERTEX_COLOR: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
const MID_VERTEX_COLOR: [f32; 4] = [1.0, 0.65, 0.0, 0.55];

fn marker_color(editor_type: EditorType) -> [f32; 4] {
    match editor_type {
        EditorType::Centroid => CENTROID_COLOR,
        EditorType::MiddleVertex => MID_VERTEX_COLOR,
        EditorType::Vertex | EditorType::TopVertex => VERTEX_COLOR,
    }
}

/// Marker pool keyed by flat anchor index.
#[derive(Default)]
pub(super) struct MarkerPool {
    pub(super) handles: Vec<PrimitiveHandle>,
}

impl MarkerPool {
    /// Reconcile the pool against a fresh anchor set: existing markers are
    /// repositioned and retagged in place, the pool grows or shrinks to
    /// match.
    pub(super) fn sync(&mut self, scene: &mut dyn Scene, set: &AnchorSet) {
        for (index, anchor) in set.iter().enumerate() {
            let data = PickData::Anchor {
                editor_type: anchor.editor_type,
                index: anchor.index,
            };
            let color = marker_color(anchor.editor_type);
            if let Some(&handle) = self.handles.get(index) {
                scene.set_position(handle, anchor.position);
                scene.set_color(handle, color);
                scene.set_pick_data(handle, data);
            } else {
                let handle = scene.create_point(anchor.position, color, MARKER_PIXEL_SIZE);
                scene.set_pick_data(handle, data);
                self.handles.push(handle);
            }
        }
        while self.handles.len() > set.len() {
            if let Some(handle) = self.handles.pop() {
                scene.remove(handle);
            }
        }
    }

    /// Reposition a single marker without touching the rest of the pool.
    pub(super) fn set_at(&self, scene: &mut dyn Scene, flat_index: usize, anchor: &Anchor) {
        if let Some(&handle) = self.handles.get(flat_index) {
            scene.set_position(handle, anchor.position);
        }
    }

    pub(super) fn contains(&self, handle: PrimitiveHandle) -> bool {
        self.handles.contains(&handle)
    }

    pub(super) fn clear(&mut self, scene: &mut dyn Scene) {
        for handle in self.handles.drain(..) {
            scene.remove(handle);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.handles.len()
    }
}
