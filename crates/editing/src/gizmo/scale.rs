//! Camera-distance display scaling with rounding hysteresis.

use tracing::trace;

use super::AxisGizmo;
use crate::scene::Scene;

/// Distance divisor tuned so the gizmo holds a comfortable apparent size.
const DISTANCE_DIVISOR: f32 = 20.0;

impl AxisGizmo {
    /// Recompute the display scale from the current camera distance; runs
    /// once per rendered frame via the session's pre-render hook.
    ///
    /// The candidate scale is rounded to one decimal before comparison, so
    /// the gizmo only rescales when the camera has moved appreciably instead
    /// of jittering every frame. Candidates outside
    /// `[minimum_scale, maximum_scale]` are ignored.
    pub fn update_scale_for_camera(&mut self, scene: &mut dyn Scene) {
        let distance = scene.camera_distance(self.pivot.origin);
        let proposed = round_to_decimal(distance / self.axis_length / DISTANCE_DIVISOR);
        if proposed == self.display_scale {
            return;
        }
        if proposed < self.minimum_scale || proposed > self.maximum_scale {
            return;
        }
        trace!(from = self.display_scale, to = proposed, "gizmo rescaled");
        self.display_scale = proposed;
        self.apply_placement(scene);
        scene.request_redraw();
    }

    /// Push the current placement matrix (uniform display scale about the
    /// pivot, in local space so the pivot stays fixed) to every primitive.
    pub(super) fn apply_placement(&self, scene: &mut dyn Scene) {
        let matrix = self.pivot.scale_about(self.display_scale);
        for part in &self.axes {
            scene.set_model_matrix(part.handle, matrix);
        }
        for (_, part) in &self.planes {
            scene.set_model_matrix(part.handle, matrix);
        }
    }
}

fn round_to_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
