//! Anchor editor types and session tooltip configuration.

use serde::{Deserialize, Serialize};

/// Which semantic feature of a shape an anchor controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorType {
    /// The shape's center (index 0) or its extrusion-top height handle
    /// (index 1).
    Centroid,
    /// A primary boundary vertex: polygon vertex, rectangle corner, or a
    /// radius/axis tip point.
    Vertex,
    /// A mid-edge point between two polygon or polyline vertices.
    MiddleVertex,
    /// A vertex on the top face of an extruded volume.
    TopVertex,
}

/// Tooltip text shown while hovering editable features.
///
/// Hosts override individual fields to localize or rephrase; the defaults
/// are plain English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipSet {
    pub before_editing: String,
    pub centroid: String,
    pub top_centroid: String,
    pub vertex: String,
    pub axis: String,
}

impl Default for TooltipSet {
    fn default() -> Self {
        Self {
            before_editing: "Click a control point or axis to edit".to_string(),
            centroid: "Drag to move the shape".to_string(),
            top_centroid: "Drag to change the height".to_string(),
            vertex: "Drag to reshape".to_string(),
            axis: "Drag to translate along the axis".to_string(),
        }
    }
}
