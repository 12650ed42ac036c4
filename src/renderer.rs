// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::document::CanvasSnapshot;
use crate::geometry::ellipse_outline;
use crate::shape::{Geometry, StyledShape};

/// Surface that shapes are painted onto
pub trait PaintTarget {
    /// Paint the interior of a filled shape
    fn fill(&mut self, geometry: &Geometry, color: Color32);

    /// Paint the outline of a shape
    fn stroke(&mut self, geometry: &Geometry, width: f32, color: Color32);
}

/// Walks a canvas snapshot in paint order
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint a single shape: interior first (if filled), then the outline
    pub fn paint_shape(&self, target: &mut dyn PaintTarget, shape: &StyledShape) {
        if shape.is_filled() {
            target.fill(shape.geometry(), shape.color());
        }
        target.stroke(shape.geometry(), shape.stroke_width() as f32, shape.color());
    }

    /// Paint committed drawings in order, then the active drawing, then the
    /// live shape of an unfinished gesture (if any)
    pub fn render<'a>(
        &self,
        target: &mut dyn PaintTarget,
        snapshot: CanvasSnapshot<'a>,
        live_shape: Option<&'a StyledShape>,
    ) {
        for shape in snapshot.shapes().chain(live_shape) {
            self.paint_shape(target, shape);
        }
    }
}

/// Paints through an egui painter, offsetting canvas coordinates to the screen
pub struct EguiTarget<'p> {
    painter: &'p Painter,
    offset: Vec2,
}

impl<'p> EguiTarget<'p> {
    /// `canvas_rect` is where canvas coordinate (0, 0) lands on screen
    pub fn new(painter: &'p Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            offset: canvas_rect.min.to_vec2(),
        }
    }

    fn screen(&self, pos: Pos2) -> Pos2 {
        pos + self.offset
    }

    fn screen_rect(&self, origin: Pos2, width: f32, height: f32) -> Rect {
        Rect::from_min_size(self.screen(origin), egui::vec2(width, height))
    }
}

impl PaintTarget for EguiTarget<'_> {
    fn fill(&mut self, geometry: &Geometry, color: Color32) {
        match geometry {
            Geometry::Segment(..) => {}
            Geometry::Rectangle { origin, width, height } => {
                self.painter.rect_filled(self.screen_rect(*origin, *width, *height), 0.0, color);
            }
            Geometry::Ellipse { origin, width, height } => {
                let points = ellipse_outline(self.screen_rect(*origin, *width, *height));
                self.painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
            }
            Geometry::Polygon(points) => {
                let points = points.iter().map(|p| self.screen(*p)).collect();
                self.painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
            }
        }
    }

    fn stroke(&mut self, geometry: &Geometry, width: f32, color: Color32) {
        let stroke = Stroke::new(width, color);
        match geometry {
            Geometry::Segment(a, b) if a == b => {
                // Zero-length segment: a dot as wide as the stroke
                self.painter.circle_filled(self.screen(*a), width / 2.0, color);
            }
            Geometry::Segment(a, b) => {
                self.painter.line_segment([self.screen(*a), self.screen(*b)], stroke);
            }
            Geometry::Rectangle { origin, width: w, height: h } => {
                self.painter.rect_stroke(self.screen_rect(*origin, *w, *h), 0.0, stroke);
            }
            Geometry::Ellipse { origin, width: w, height: h } => {
                let points = ellipse_outline(self.screen_rect(*origin, *w, *h));
                self.painter.add(Shape::closed_line(points, stroke));
            }
            Geometry::Polygon(points) => {
                let points = points.iter().map(|p| self.screen(*p)).collect();
                self.painter.add(Shape::closed_line(points, stroke));
            }
        }
    }
}
