use egui::{Color32, Pos2, Rect};

/// Geometry of a committed shape, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Straight segment between two points (may be zero-length)
    Segment(Pos2, Pos2),
    /// Axis-aligned box anchored at its top-left corner
    Rectangle { origin: Pos2, width: f32, height: f32 },
    /// Ellipse inscribed in the box `origin`/`width`/`height`
    Ellipse { origin: Pos2, width: f32, height: f32 },
    /// Closed polygon, at least three vertices
    Polygon(Vec<Pos2>),
}

impl Geometry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Segment(..) => "segment",
            Geometry::Rectangle { .. } => "rectangle",
            Geometry::Ellipse { .. } => "ellipse",
            Geometry::Polygon(_) => "polygon",
        }
    }

    /// Whether the geometry encloses an area that can be filled
    pub fn has_interior(&self) -> bool {
        !matches!(self, Geometry::Segment(..))
    }

    /// Tight bounding box of the geometry, ignoring stroke width
    pub fn bounds(&self) -> Rect {
        match self {
            Geometry::Segment(a, b) => Rect::from_two_pos(*a, *b),
            Geometry::Rectangle { origin, width, height }
            | Geometry::Ellipse { origin, width, height } => {
                Rect::from_min_size(*origin, egui::vec2(*width, *height))
            }
            Geometry::Polygon(points) => crate::geometry::calculate_bounds(points, 0.0),
        }
    }
}

/// Immutable drawable unit: geometry plus the style it was created with
#[derive(Debug, Clone, PartialEq)]
pub struct StyledShape {
    geometry: Geometry,
    color: Color32,
    stroke_width: u32,
    filled: bool,
}

impl StyledShape {
    pub fn new(geometry: Geometry, color: Color32, stroke_width: u32, filled: bool) -> Self {
        // Segments have no interior to paint
        let filled = filled && geometry.has_interior();
        Self {
            geometry,
            color,
            stroke_width: stroke_width.max(1),
            filled,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Bounding box grown by half the stroke width on each side
    pub fn painted_bounds(&self) -> Rect {
        self.geometry.bounds().expand(self.stroke_width as f32 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn segments_are_never_filled() {
        let shape = StyledShape::new(
            Geometry::Segment(pos2(0.0, 0.0), pos2(10.0, 0.0)),
            Color32::RED,
            3,
            true,
        );
        assert!(!shape.is_filled());
        assert_eq!(shape.stroke_width(), 3);
    }

    #[test]
    fn zero_stroke_width_is_raised_to_one() {
        let shape = StyledShape::new(
            Geometry::Rectangle { origin: pos2(1.0, 1.0), width: 4.0, height: 4.0 },
            Color32::BLACK,
            0,
            true,
        );
        assert_eq!(shape.stroke_width(), 1);
        assert!(shape.is_filled());
    }

    #[test]
    fn painted_bounds_include_half_the_stroke() {
        let shape = StyledShape::new(
            Geometry::Ellipse { origin: pos2(10.0, 20.0), width: 30.0, height: 10.0 },
            Color32::BLUE,
            4,
            false,
        );
        let bounds = shape.painted_bounds();
        assert_eq!(bounds.min, pos2(8.0, 18.0));
        assert_eq!(bounds.max, pos2(42.0, 32.0));
    }

    #[test]
    fn polygon_bounds_cover_every_vertex() {
        let geometry = Geometry::Polygon(vec![pos2(5.0, 5.0), pos2(25.0, 40.0), pos2(5.0, 40.0)]);
        let bounds = geometry.bounds();
        assert_eq!(bounds.min, pos2(5.0, 5.0));
        assert_eq!(bounds.max, pos2(25.0, 40.0));
        assert_eq!(geometry.kind_name(), "polygon");
    }
}
