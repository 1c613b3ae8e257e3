//! Boundary trait for the external renderer/scene collaborator.
//!
//! The subsystem never touches the renderer directly: gizmos and sessions
//! receive a [`Scene`] reference per call, which lets tests substitute the
//! [`testing::FakeScene`] double for the real adapter.

use geosketch_api::{EditorType, GizmoPart};
use glam::{Mat4, Vec2, Vec3};

/// Handle to a renderable primitive owned by the external scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveHandle(pub u64);

/// Payload attached to a primitive so pick results identify what was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickData {
    /// A pickable part of a translation gizmo.
    Gizmo(GizmoPart),
    /// A draggable anchor marker, identified by group and index.
    Anchor { editor_type: EditorType, index: usize },
    /// A text label. Labels never participate in editing picks.
    Label,
}

/// One entry of an ordered (nearest-first) pick result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub handle: PrimitiveHandle,
    pub data: Option<PickData>,
    /// Secondary handle for composite primitives (outline, depth proxy).
    pub secondary: Option<PrimitiveHandle>,
}

/// Mouse cursor requested from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Grab,
    Grabbing,
}

/// The renderer/scene collaborator.
///
/// Projection queries may fail (point behind the camera or below the
/// horizon); callers treat a failed projection as a zero-displacement frame,
/// never as an error. The renderer is assumed not to auto-poll, so every
/// geometry mutation must be followed by [`Scene::request_redraw`].
pub trait Scene {
    /// World point to screen coordinates, `None` if not projectable.
    fn project_to_screen(&self, world: Vec3) -> Option<Vec2>;

    /// Screen point resolved to a world position on scene geometry or the
    /// globe surface, `None` if nothing is under the point.
    fn screen_to_world(&self, screen: Vec2) -> Option<Vec3>;

    /// Ordered (nearest-first) pick at a screen point, at most `limit` hits.
    fn pick(&self, screen: Vec2, limit: usize) -> Vec<PickHit>;

    fn create_line(&mut self, p0: Vec3, p1: Vec3, color: [f32; 4], width: f32) -> PrimitiveHandle;
    fn create_quad(&mut self, corners: [Vec3; 4], color: [f32; 4]) -> PrimitiveHandle;
    fn create_point(&mut self, position: Vec3, color: [f32; 4], pixel_size: f32)
    -> PrimitiveHandle;

    fn set_color(&mut self, handle: PrimitiveHandle, color: [f32; 4]);
    fn set_endpoints(&mut self, handle: PrimitiveHandle, p0: Vec3, p1: Vec3);
    fn set_corners(&mut self, handle: PrimitiveHandle, corners: [Vec3; 4]);
    fn set_position(&mut self, handle: PrimitiveHandle, position: Vec3);
    fn set_model_matrix(&mut self, handle: PrimitiveHandle, matrix: Mat4);
    fn set_pick_data(&mut self, handle: PrimitiveHandle, data: PickData);
    fn remove(&mut self, handle: PrimitiveHandle);

    /// Ask the renderer to redraw; it does not poll for changes.
    fn request_redraw(&mut self);

    fn camera_distance(&self, world: Vec3) -> f32;
    fn camera_position(&self) -> Vec3;

    /// Enable or disable camera navigation, so drags do not also pan or
    /// rotate the camera.
    fn set_camera_controls(&mut self, enabled: bool);

    fn set_cursor(&mut self, cursor: CursorIcon);
    fn show_tooltip(&mut self, text: &str, at: Vec2);
    fn hide_tooltip(&mut self);

    /// Whether the renderer has a drawable collection the session can attach
    /// markers to.
    fn has_drawables(&self) -> bool {
        true
    }
}
