use egui::Color32;
use serde::{Deserialize, Serialize};

mod shape_builder;
pub use shape_builder::{build_geometry, build_shape};

/// Thinnest stroke the thickness slider allows
pub const MIN_THICKNESS: u32 = 1;
/// Thickest stroke the thickness slider allows
pub const MAX_THICKNESS: u32 = 10;

/// The drawing tools available from the toolbar
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Oval,
    Circle,
    Brush,
    ObtuseTriangle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Oval,
        ToolKind::Circle,
        ToolKind::Brush,
        ToolKind::ObtuseTriangle,
    ];

    /// Toolbar caption
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rect",
            Self::Oval => "Oval",
            Self::Circle => "Circle",
            Self::Brush => "Brush",
            Self::ObtuseTriangle => "Triangle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Line => "╱",
            Self::Rectangle => "▭",
            Self::Oval => "⬭",
            Self::Circle => "○",
            Self::Brush => "🖌",
            Self::ObtuseTriangle => "◺",
        }
    }

    /// Brush chains permanent segments; every other tool keeps one live shape
    pub fn is_brush(&self) -> bool {
        matches!(self, Self::Brush)
    }
}

/// Named colors offered as toolbar swatches
pub const PALETTE: [(&str, Color32); 3] = [
    ("Black", Color32::BLACK),
    ("Blue", Color32::BLUE),
    ("Red", Color32::RED),
];

/// Current toolbar selection, read by the gesture controller on every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    tool: ToolKind,
    color: Color32,
    thickness: u32,
    fill: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Line,
            color: Color32::BLACK,
            thickness: MIN_THICKNESS,
            fill: false,
        }
    }
}

impl ToolSettings {
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    /// Colors are opaque RGB; any alpha is dropped
    pub fn set_color(&mut self, color: Color32) {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        self.color = Color32::from_rgb(r, g, b);
    }

    /// Clamps to `MIN_THICKNESS..=MAX_THICKNESS`
    pub fn set_thickness(&mut self, thickness: u32) {
        self.thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }

    pub fn toggle_fill(&mut self) -> bool {
        self.fill = !self.fill;
        self.fill
    }

    /// Settings restored from storage may predate the current limits
    pub fn sanitized(mut self) -> Self {
        self.set_thickness(self.thickness);
        self.set_color(self.color);
        self
    }
}
