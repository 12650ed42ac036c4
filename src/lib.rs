#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use command::{Command, CommandOutcome};
pub use document::{CanvasSnapshot, Document, Drawing};
pub use error::{ExportError, ExportResult};
pub use export::ImageExporter;
pub use gesture::GestureController;
pub use input::{InputEvent, InputHandler};
pub use renderer::{PaintTarget, Renderer};
pub use shape::{Geometry, StyledShape};
pub use state::GestureState;
pub use tools::{ToolKind, ToolSettings};
