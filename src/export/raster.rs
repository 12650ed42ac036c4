use egui::{Color32, Pos2, Rect};
use image::{Rgb, RgbImage};

use crate::geometry::{
    calculate_bounds, distance_to_line_segment, ellipse_outline, point_in_ellipse, point_in_polygon,
};
use crate::renderer::PaintTarget;
use crate::shape::Geometry;

/// Canvas background in exported images
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// CPU paint target writing hard-edged pixels into an RGB image.
///
/// A pixel is covered when its center lies inside the filled area, or when
/// its corner lies within half the stroke width of an outline.
pub struct Rasterizer {
    image: RgbImage,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Set every pixel near `bounds` whose sample point satisfies `covered`.
    ///
    /// Pixel (x, y) is sampled at (x + offset, y + offset).
    fn paint_where(&mut self, bounds: Rect, color: Color32, offset: f32, covered: impl Fn(Pos2) -> bool) {
        let (width, height) = self.image.dimensions();
        let min_x = (bounds.min.x - 1.0).floor().max(0.0) as u32;
        let min_y = (bounds.min.y - 1.0).floor().max(0.0) as u32;
        let max_x = ((bounds.max.x + 1.0).ceil().max(0.0) as u32).min(width);
        let max_y = ((bounds.max.y + 1.0).ceil().max(0.0) as u32).min(height);

        let pixel = Rgb([color.r(), color.g(), color.b()]);
        for y in min_y..max_y {
            for x in min_x..max_x {
                if covered(Pos2::new(x as f32 + offset, y as f32 + offset)) {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    fn stroke_segment(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        let half = width / 2.0;
        let bounds = Rect::from_two_pos(a, b).expand(half);
        // Outlines sample pixel corners so integer coordinates hit whole pixels
        self.paint_where(bounds, color, 0.0, |p| distance_to_line_segment(p, a, b) <= half);
    }

    fn stroke_closed(&mut self, points: &[Pos2], width: f32, color: Color32) {
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.stroke_segment(a, b, width, color);
        }
    }
}

fn box_corners(origin: Pos2, width: f32, height: f32) -> [Pos2; 4] {
    [
        origin,
        Pos2::new(origin.x + width, origin.y),
        Pos2::new(origin.x + width, origin.y + height),
        Pos2::new(origin.x, origin.y + height),
    ]
}

impl PaintTarget for Rasterizer {
    fn fill(&mut self, geometry: &Geometry, color: Color32) {
        match geometry {
            Geometry::Segment(..) => {}
            Geometry::Rectangle { origin, width, height } => {
                let rect = Rect::from_min_size(*origin, egui::vec2(*width, *height));
                self.paint_where(rect, color, 0.5, |p| rect.contains(p));
            }
            Geometry::Ellipse { origin, width, height } => {
                let rect = Rect::from_min_size(*origin, egui::vec2(*width, *height));
                self.paint_where(rect, color, 0.5, |p| point_in_ellipse(p, rect));
            }
            Geometry::Polygon(points) => {
                let bounds = calculate_bounds(points, 0.0);
                self.paint_where(bounds, color, 0.5, |p| point_in_polygon(p, points));
            }
        }
    }

    fn stroke(&mut self, geometry: &Geometry, width: f32, color: Color32) {
        match geometry {
            Geometry::Segment(a, b) => self.stroke_segment(*a, *b, width, color),
            Geometry::Rectangle { origin, width: w, height: h } => {
                self.stroke_closed(&box_corners(*origin, *w, *h), width, color);
            }
            Geometry::Ellipse { origin, width: w, height: h } => {
                let outline = ellipse_outline(Rect::from_min_size(*origin, egui::vec2(*w, *h)));
                self.stroke_closed(&outline, width, color);
            }
            Geometry::Polygon(points) => self.stroke_closed(points, width, color),
        }
    }
}
