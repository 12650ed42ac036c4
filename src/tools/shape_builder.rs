use egui::Pos2;

use super::{ToolKind, ToolSettings};
use crate::geometry::bounding_box;
use crate::shape::{Geometry, StyledShape};

/// Construct the geometry a tool produces for a drag from `anchor` to `current`.
///
/// Brush yields a single segment here; chaining segments and sliding the
/// anchor forward is the gesture controller's job.
pub fn build_geometry(tool: ToolKind, anchor: Pos2, current: Pos2) -> Geometry {
    match tool {
        ToolKind::Line | ToolKind::Brush => Geometry::Segment(anchor, current),
        ToolKind::Rectangle => {
            let (origin, width, height) = bounding_box(anchor, current);
            Geometry::Rectangle { origin, width, height }
        }
        ToolKind::Oval => {
            let (origin, width, height) = bounding_box(anchor, current);
            Geometry::Ellipse { origin, width, height }
        }
        ToolKind::Circle => {
            // Square box at the min corner, not a center/radius circle
            let (origin, width, height) = bounding_box(anchor, current);
            let diameter = width.max(height);
            Geometry::Ellipse { origin, width: diameter, height: diameter }
        }
        ToolKind::ObtuseTriangle => Geometry::Polygon(vec![
            anchor,
            current,
            Pos2::new(anchor.x, current.y),
        ]),
    }
}

/// Construct a styled shape using the color, thickness and fill in `settings`
pub fn build_shape(tool: ToolKind, anchor: Pos2, current: Pos2, settings: &ToolSettings) -> StyledShape {
    StyledShape::new(
        build_geometry(tool, anchor, current),
        settings.color(),
        settings.thickness(),
        settings.fill(),
    )
}
