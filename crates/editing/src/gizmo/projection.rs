//! Screen-drag to world-offset resolution.

use geosketch_api::GizmoPart;
use glam::{Vec2, Vec3};

use super::AxisGizmo;
use crate::scene::Scene;

/// Minimum projected axis length (in pixels) for a stable projection.
const MIN_SCREEN_AXIS_LENGTH: f32 = 1e-4;

impl AxisGizmo {
    /// Resolve a screen-space drag on `part` into a world-space offset.
    ///
    /// Each contributing axis (one for an axis arm, two for a plane face) is
    /// projected to screen space; the screen delta component along the
    /// projected axis is converted back to a world distance through the
    /// axis's world/screen length ratio, and the per-axis offsets are
    /// summed. An axis whose endpoints fail to project contributes zero; if
    /// every axis fails the result is the zero vector and the caller treats
    /// the frame as a no-op.
    pub fn resolve_drag(
        &self,
        scene: &dyn Scene,
        screen_start: Vec2,
        screen_end: Vec2,
        part: GizmoPart,
    ) -> Vec3 {
        let screen_delta = screen_end - screen_start;
        let mut offset = Vec3::ZERO;
        for &axis in part.axes() {
            let direction = self.pivot.axis_direction(axis);
            if let Some(displacement) = screen_displacement_along_axis(
                scene,
                self.pivot.origin,
                direction,
                self.axis_length,
                screen_delta,
            ) {
                offset += direction * displacement;
            }
        }
        offset
    }
}

/// Signed world-space displacement along one axis for a 2D screen delta.
///
/// Projects the axis's pivot point and tip to screen space, takes the screen
/// delta's component along the projected axis direction, and scales it by
/// the world-per-pixel ratio of that axis. `None` if either endpoint is not
/// projectable or the axis collapses to a point on screen.
pub(crate) fn screen_displacement_along_axis(
    scene: &dyn Scene,
    origin: Vec3,
    direction: Vec3,
    length: f32,
    screen_delta: Vec2,
) -> Option<f32> {
    let base = scene.project_to_screen(origin)?;
    let tip = scene.project_to_screen(origin + direction * length)?;
    let axis_screen = tip - base;
    let screen_length = axis_screen.length();
    if screen_length < MIN_SCREEN_AXIS_LENGTH {
        return None;
    }
    let along = screen_delta.dot(axis_screen) / screen_length;
    Some(along * length / screen_length)
}
