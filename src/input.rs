use egui::{Pos2, Rect, Response};

/// Pointer events delivered to the gesture controller, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button went down over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while the primary button is held
    PointerMove { pos: Pos2 },
    /// Primary button was released
    PointerUp { pos: Pos2 },
}

/// Turns raw egui pointer input into a press/drag/release sequence.
///
/// A press only counts when it lands on the canvas itself, not on a window
/// or popup above it. Once pressed, motion and release are reported even if
/// the pointer leaves the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen position to canvas-local position
    fn to_canvas(canvas_rect: Rect, pos: Pos2) -> Pos2 {
        (pos - canvas_rect.min).to_pos2()
    }

    /// Process this frame's pointer input for the canvas `response`
    pub fn process_input(&mut self, response: &Response) -> Vec<InputEvent> {
        let canvas_rect = response.rect;
        // egui clears both when another layer covers the pointer
        let press_on_canvas = response.hovered() || response.is_pointer_button_down_on();
        let mut events = Vec::new();

        response.ctx.input(|input| {
            let pointer = &input.pointer;
            let pos = pointer.interact_pos().or(self.last_pointer_pos);

            if pointer.primary_pressed() && press_on_canvas {
                if let Some(pos) = pos.filter(|p| canvas_rect.contains(*p)) {
                    events.push(InputEvent::PointerDown {
                        pos: Self::to_canvas(canvas_rect, pos),
                    });
                    self.pressed = true;
                    self.last_pointer_pos = Some(pos);
                }
            }

            if self.pressed && pointer.primary_down() {
                if let Some(pos) = pos {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            pos: Self::to_canvas(canvas_rect, pos),
                        });
                        self.last_pointer_pos = Some(pos);
                    }
                }
            }

            if self.pressed && (pointer.primary_released() || !pointer.primary_down()) {
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerUp {
                        pos: Self::to_canvas(canvas_rect, pos),
                    });
                }
                self.pressed = false;
                self.last_pointer_pos = None;
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, RawInput, pos2, vec2};

    const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, pos2(800.0, 600.0));

    /// Headless app: a full-screen canvas and, optionally, a window centered above it
    struct Harness {
        ctx: egui::Context,
        handler: InputHandler,
        with_window: bool,
        canvas_rect: Rect,
    }

    impl Harness {
        fn new(with_window: bool) -> Self {
            let mut harness = Self {
                ctx: egui::Context::default(),
                handler: InputHandler::new(),
                with_window,
                canvas_rect: Rect::NOTHING,
            };
            // Let egui lay out the canvas and the window before any click
            for _ in 0..3 {
                harness.frame(Vec::new());
            }
            harness
        }

        fn frame(&mut self, events: Vec<Event>) -> Vec<InputEvent> {
            let raw_input = RawInput {
                screen_rect: Some(SCREEN),
                events,
                ..Default::default()
            };
            let mut produced = Vec::new();
            let with_window = self.with_window;
            let handler = &mut self.handler;
            let canvas_rect = &mut self.canvas_rect;
            let _ = self.ctx.run(raw_input, |ctx| {
                egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
                    let (response, _painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                    *canvas_rect = response.rect;
                    produced = handler.process_input(&response);
                });
                if with_window {
                    egui::Window::new("Save Image")
                        .collapsible(false)
                        .resizable(false)
                        .anchor(egui::Align2::CENTER_CENTER, vec2(0.0, 0.0))
                        .show(ctx, |ui| {
                            ui.label("Image saved successfully!");
                            let _ = ui.button("OK");
                        });
                }
            });
            produced
        }

        fn hover(&mut self, pos: Pos2) -> Vec<InputEvent> {
            self.frame(vec![Event::PointerMoved(pos)])
        }

        fn button(&mut self, pos: Pos2, pressed: bool) -> Vec<InputEvent> {
            self.frame(vec![
                Event::PointerMoved(pos),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    modifiers: Modifiers::default(),
                },
            ])
        }

        fn local(&self, pos: Pos2) -> Pos2 {
            (pos - self.canvas_rect.min).to_pos2()
        }
    }

    #[test]
    fn test_press_drag_release_on_canvas() {
        let mut harness = Harness::new(false);
        let start = pos2(100.0, 120.0);
        let end = pos2(180.0, 90.0);

        assert!(harness.hover(start).is_empty());
        assert_eq!(
            harness.button(start, true),
            vec![InputEvent::PointerDown { pos: harness.local(start) }]
        );
        assert_eq!(
            harness.hover(end),
            vec![InputEvent::PointerMove { pos: harness.local(end) }]
        );
        assert_eq!(
            harness.button(end, false),
            vec![InputEvent::PointerUp { pos: harness.local(end) }]
        );
        // Nothing more once released
        assert!(harness.hover(pos2(10.0, 10.0)).is_empty());
    }

    #[test]
    fn test_hover_without_press_is_silent() {
        let mut harness = Harness::new(false);
        for x in [10.0, 200.0, 700.0] {
            assert!(harness.hover(pos2(x, 50.0)).is_empty());
        }
    }

    #[test]
    fn test_click_on_window_above_canvas_is_not_a_canvas_press() {
        let mut harness = Harness::new(true);
        let center = SCREEN.center();
        assert_ne!(
            harness.ctx.layer_id_at(center).map(|layer| layer.order),
            Some(egui::Order::Background)
        );

        assert!(harness.hover(center).is_empty());
        assert!(harness.button(center, true).is_empty());
        assert!(harness.hover(center + vec2(30.0, 20.0)).is_empty());
        assert!(harness.button(center + vec2(30.0, 20.0), false).is_empty());
    }

    #[test]
    fn test_canvas_outside_the_window_still_draws() {
        let mut harness = Harness::new(true);
        let corner = pos2(40.0, 40.0);

        harness.hover(corner);
        assert_eq!(
            harness.button(corner, true),
            vec![InputEvent::PointerDown { pos: harness.local(corner) }]
        );
        assert_eq!(
            harness.button(corner, false),
            vec![InputEvent::PointerUp { pos: harness.local(corner) }]
        );
    }
}
