use std::path::PathBuf;

use egui::Color32;

use crate::document::Document;
use crate::error::ExportResult;
use crate::export::ImageExporter;
use crate::tools::{ToolKind, ToolSettings};

/// Toolbar actions, one per user intent
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectTool(ToolKind),
    SelectColor(Color32),
    ToggleFill,
    SetThickness(u32),
    /// Discard the shapes of the active drawing
    Erase,
    /// Commit the active drawing and start a new one
    NewDrawing,
    /// Render the canvas at `size` pixels and write it as PNG to `path`
    SaveImage { path: PathBuf, size: [u32; 2] },
}

/// What the UI should tell the user after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    ImageSaved(PathBuf),
}

impl Command {
    /// Short label for logs and the status line
    pub fn label(&self) -> &'static str {
        match self {
            Command::SelectTool(_) => "Select Tool",
            Command::SelectColor(_) => "Select Color",
            Command::ToggleFill => "Fill",
            Command::SetThickness(_) => "Thickness",
            Command::Erase => "Erase",
            Command::NewDrawing => "New Drawing",
            Command::SaveImage { .. } => "Save Image",
        }
    }

    /// Apply the command. Only `SaveImage` can fail, and it never touches the document.
    pub fn execute(&self, settings: &mut ToolSettings, document: &mut Document) -> ExportResult<CommandOutcome> {
        match self {
            Command::SelectTool(tool) => {
                log::info!("Tool selected: {}", tool.name());
                settings.set_tool(*tool);
            }
            Command::SelectColor(color) => {
                log::info!("Color selected: {:?}", color);
                settings.set_color(*color);
            }
            Command::ToggleFill => {
                let fill = settings.toggle_fill();
                log::info!("Fill {}", if fill { "on" } else { "off" });
            }
            Command::SetThickness(thickness) => {
                settings.set_thickness(*thickness);
                log::info!("Thickness set to {}", settings.thickness());
            }
            Command::Erase => document.clear_active(),
            Command::NewDrawing => {
                if !document.commit_active() {
                    log::debug!("New Drawing ignored: active drawing is empty");
                }
            }
            Command::SaveImage { path, size } => {
                ImageExporter::new().export_png(document.snapshot(), *size, path)?;
                return Ok(CommandOutcome::ImageSaved(path.clone()));
            }
        }
        Ok(CommandOutcome::Done)
    }
}
