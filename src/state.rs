use egui::Pos2;

use crate::shape::StyledShape;
use crate::tools::ToolKind;

/// State of the single pointer gesture the canvas tracks.
///
/// ```text
///   Idle ──press──► Dragging ──release──► Idle
///                    │    ▲
///                    └drag┘
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Tool chosen when the gesture started
        tool: ToolKind,
        /// Anchor: fixed for shape tools, slides forward for the brush
        drag_start: Pos2,
        /// Most recent pointer position
        drag_end: Pos2,
        /// Provisional shape for non-brush tools, replaced on every motion
        live_shape: Option<StyledShape>,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Tool of the gesture in progress
    pub fn tool(&self) -> Option<ToolKind> {
        match self {
            Self::Dragging { tool, .. } => Some(*tool),
            Self::Idle => None,
        }
    }

    pub fn live_shape(&self) -> Option<&StyledShape> {
        match self {
            Self::Dragging { live_shape, .. } => live_shape.as_ref(),
            Self::Idle => None,
        }
    }

    pub fn anchor(&self) -> Option<Pos2> {
        match self {
            Self::Dragging { drag_start, .. } => Some(*drag_start),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
        }
    }
}
