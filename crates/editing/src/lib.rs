//! Interactive axis-gizmo manipulation and shape anchor editing
//!
//! This crate provides the interactive editing core for geosketch:
//! - [`frame`] - local reference frames and gizmo pivots
//! - [`scene`] - the boundary trait for the external renderer
//! - [`gizmo`] - the translation gizmo (axis arms and plane faces)
//! - [`shapes`] - the editable shape sum type
//! - [`anchors`] - anchor derivation and per-shape drag rules
//! - [`session`] - the pointer-driven edit session state machine
//!
//! The renderer is a collaborator, not a dependency: everything here talks
//! to it through [`scene::Scene`], so the whole subsystem runs against a
//! fake scene in tests.

pub mod anchors;
pub mod error;
pub mod frame;
pub mod gizmo;
pub mod scene;
pub mod session;
pub mod shapes;

pub use anchors::*;
pub use error::*;
pub use frame::*;
pub use gizmo::*;
pub use scene::*;
pub use session::*;
pub use shapes::*;
