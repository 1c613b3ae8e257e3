//! Shared UI-facing types for the geosketch editing subsystem
//!
//! Defines the identifiers and option structs exchanged between the editing
//! backend and the host UI layer: gizmo part ids, anchor editor types, and
//! tooltip configuration.

mod editing;
mod error;
mod gizmo;

pub use editing::{EditorType, TooltipSet};
pub use error::ApiError;
pub use gizmo::{GizmoAxis, GizmoPart, GizmoPlane};
