//! Press/drag/release handling for the canvas.
//!
//! Shape tools keep exactly one live shape per gesture, rebuilt from the
//! fixed press point on every motion and committed once on release. The
//! brush instead commits a segment per motion and slides its anchor forward.

use egui::Pos2;

use crate::document::Document;
use crate::input::InputEvent;
use crate::shape::{Geometry, StyledShape};
use crate::state::GestureState;
use crate::tools::{ToolSettings, build_shape};

#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Shape to preview on top of the document while a gesture is in progress
    pub fn live_shape(&self) -> Option<&StyledShape> {
        self.state.live_shape()
    }

    /// Route an input event to the matching transition
    pub fn handle_event(&mut self, event: InputEvent, settings: &ToolSettings, document: &mut Document) {
        match event {
            InputEvent::PointerDown { pos } => self.on_pointer_down(pos, settings, document),
            InputEvent::PointerMove { pos } => self.on_pointer_move(pos, settings, document),
            InputEvent::PointerUp { pos } => self.on_pointer_up(pos, settings, document),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings, document: &mut Document) {
        if let GestureState::Dragging { live_shape: Some(_), .. } = &self.state {
            log::warn!("Press during an unfinished gesture, discarding its live shape");
        }

        let tool = settings.tool();
        if tool.is_brush() {
            // A tap alone leaves a dot
            document.append_to_active(brush_segment(pos, pos, settings));
        }

        log::debug!("Gesture started: {} at {:?}", tool.name(), pos);
        self.state = GestureState::Dragging {
            tool,
            drag_start: pos,
            drag_end: pos,
            live_shape: None,
        };
    }

    pub fn on_pointer_move(&mut self, pos: Pos2, settings: &ToolSettings, document: &mut Document) {
        let GestureState::Dragging { tool, drag_start, drag_end, live_shape } = &mut self.state else {
            log::debug!("Ignoring motion without a press");
            return;
        };

        *drag_end = pos;
        if tool.is_brush() {
            document.append_to_active(brush_segment(*drag_start, pos, settings));
            *drag_start = pos;
        } else {
            *live_shape = Some(build_shape(*tool, *drag_start, pos, settings));
        }
    }

    pub fn on_pointer_up(&mut self, _pos: Pos2, settings: &ToolSettings, document: &mut Document) {
        let state = std::mem::take(&mut self.state);
        let GestureState::Dragging { tool, drag_start, drag_end, live_shape } = state else {
            log::debug!("Ignoring release without a press");
            return;
        };

        // Brush segments were committed as they were drawn
        if live_shape.is_some() {
            let shape = build_shape(tool, drag_start, drag_end, settings);
            log::debug!("Gesture finished: {} {}", tool.name(), shape.geometry().kind_name());
            document.append_to_active(shape);
        }
    }
}

fn brush_segment(from: Pos2, to: Pos2, settings: &ToolSettings) -> StyledShape {
    StyledShape::new(
        Geometry::Segment(from, to),
        settings.color(),
        settings.thickness(),
        false,
    )
}
