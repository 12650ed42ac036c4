use crate::shape::StyledShape;

/// Ordered, append-only group of shapes. Insertion order is paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    name: String,
    shapes: Vec<StyledShape>,
}

impl Drawing {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shapes(&self) -> &[StyledShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Canvas state: committed drawings plus the one drawing still being edited.
///
/// The active drawing never appears in `committed` until `commit_active`
/// moves it there; committed drawings are only reachable through shared
/// references and so cannot change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    committed: Vec<Drawing>,
    active: Drawing,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            active: Drawing::new(drawing_name(1)),
        }
    }

    /// Append a shape to the active drawing
    pub fn append_to_active(&mut self, shape: StyledShape) {
        self.active.shapes.push(shape);
    }

    /// Move a non-empty active drawing into the committed sequence and start
    /// a fresh one. Returns false (and does nothing) if the active drawing is empty.
    pub fn commit_active(&mut self) -> bool {
        if self.active.is_empty() {
            return false;
        }

        let next = Drawing::new(drawing_name(self.committed.len() + 2));
        let finished = std::mem::replace(&mut self.active, next);
        log::info!("Committed {} with {} shapes", finished.name, finished.len());
        self.committed.push(finished);
        true
    }

    /// Discard the shapes of the active drawing; committed drawings are untouched
    pub fn clear_active(&mut self) {
        log::info!("Erasing {} shapes from {}", self.active.len(), self.active.name);
        self.active.shapes.clear();
    }

    pub fn snapshot(&self) -> CanvasSnapshot<'_> {
        CanvasSnapshot {
            committed: &self.committed,
            active: &self.active,
        }
    }

    pub fn committed(&self) -> &[Drawing] {
        &self.committed
    }

    pub fn active(&self) -> &Drawing {
        &self.active
    }
}

fn drawing_name(number: usize) -> String {
    format!("Drawing {number}")
}

/// Read-only view of the canvas for rendering
#[derive(Debug, Clone, Copy)]
pub struct CanvasSnapshot<'a> {
    committed: &'a [Drawing],
    active: &'a Drawing,
}

impl<'a> CanvasSnapshot<'a> {
    pub fn committed(&self) -> &'a [Drawing] {
        self.committed
    }

    pub fn active(&self) -> &'a Drawing {
        self.active
    }

    /// Every shape in paint order: committed drawings first, then the active one
    pub fn shapes(self) -> impl Iterator<Item = &'a StyledShape> + 'a {
        self.committed
            .iter()
            .chain(std::iter::once(self.active))
            .flat_map(|drawing| drawing.shapes.iter())
    }

    pub fn shape_count(&self) -> usize {
        self.committed.iter().map(Drawing::len).sum::<usize>() + self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }
}
