use super::{Cursor, Size};

/// Visual properties of an element.
///
/// Every field is optional so that styles can be layered: `None` means
/// "not set here", not "reset".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub width: Option<Size>,
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = Some(width);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Layer `over` on top of `self`. Keys set in `over` win.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            width: over.width.or(self.width),
            opacity: over.opacity.or(self.opacity),
            cursor: over.cursor.or(self.cursor),
        }
    }
}
