use crate::command::{Command, CommandOutcome};
use crate::document::Document;
use crate::export::export_size;
use crate::gesture::GestureController;
use crate::input::InputHandler;
use crate::panels::{central_panel, drawings_panel, tools_panel};
use crate::renderer::{EguiTarget, Renderer};
use crate::tools::ToolSettings;

/// We derive Deserialize/Serialize so the toolbar selection survives a restart.
/// Drawings are deliberately not persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    settings: ToolSettings,
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    gestures: GestureController,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
    /// Canvas size in points, used as the exported image size
    #[serde(skip)]
    canvas_size: [u32; 2],
    /// Message shown in the notification window until dismissed
    #[serde(skip)]
    notification: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.settings = app.settings.sanitized();
        log::info!(
            "Starting with tool {}, thickness {}",
            app.settings.tool().name(),
            app.settings.thickness()
        );
        app
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Run a toolbar command and surface its result to the user
    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {}", command.label());
        match command.execute(&mut self.settings, &mut self.document) {
            Ok(CommandOutcome::Done) => {}
            Ok(CommandOutcome::ImageSaved(_)) => {
                self.notification = Some("Image saved successfully!".to_owned());
            }
            Err(err) => {
                log::error!("{} failed: {}", command.label(), err);
                self.notification = Some(format!("Error saving image: {err}"));
            }
        }
    }

    /// Ask for a destination file and export the canvas there
    pub fn save_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("drawing.png")
            .save_file()
        else {
            log::debug!("Save Image cancelled");
            return;
        };

        let size = self.canvas_size;
        self.execute_command(Command::SaveImage { path, size });
    }

    /// Feed this frame's pointer input on the canvas into the gesture controller.
    /// Returns true if anything was processed.
    pub fn handle_canvas_input(&mut self, response: &egui::Response) -> bool {
        self.canvas_size = export_size(response.rect.size());

        let events = self.input.process_input(response);
        for event in &events {
            self.gestures.handle_event(*event, &self.settings, &mut self.document);
        }
        !events.is_empty()
    }

    /// Paint the document and any live shape into `canvas_rect`
    pub fn render_canvas(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let mut target = EguiTarget::new(painter, canvas_rect);
        self.renderer
            .render(&mut target, self.document.snapshot(), self.gestures.live_shape());
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        drawings_panel(self, ctx);
        central_panel(self, ctx);

        // Show the notification window until the user dismisses it
        if let Some(message) = self.notification().map(str::to_owned) {
            egui::Window::new("Save Image")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.dismiss_notification();
                    }
                });
        }
    }
}
