//! Error types for gizmo construction and shape editing.

use geosketch_api::EditorType;
use thiserror::Error;

/// Errors raised while attaching a gizmo to a target.
#[derive(Debug, Error)]
pub enum GizmoError {
    /// The target satisfies no known capability set (no finite placement,
    /// or no usable radius where one is required).
    #[error("unsupported gizmo target: {0}")]
    UnsupportedTarget(String),

    /// Derived or supplied axis length is not a positive finite number.
    #[error("axis length must be positive and finite, got {0}")]
    InvalidAxisLength(f32),

    /// A caller-supplied local frame is not orthonormal.
    #[error("local frame is not orthonormal")]
    NonOrthonormalFrame,
}

/// Errors raised by the shape mutation rules.
///
/// These only occur through direct misuse of [`crate::anchors::apply_drag`];
/// the pointer-driven session path never produces them.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("{editor_type:?} anchor at index {index} does not apply to a {kind}")]
    UnsupportedAnchor {
        editor_type: EditorType,
        index: usize,
        kind: &'static str,
    },

    #[error("drag payload does not match the target, expected {expected}")]
    MismatchedDrag { expected: &'static str },
}
