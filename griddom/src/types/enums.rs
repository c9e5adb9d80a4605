#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
}

/// Structural role of an element.
///
/// Roles are plain tags; consumers decide which roles count as rows, cells
/// or wrappers for their own purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Table,
    Head,
    Body,
    Row,
    HeaderCell,
    Cell,
    #[default]
    Group,
    Span,
    DragHandle,
    Custom(String),
}

impl Role {
    pub(crate) fn id_prefix(&self) -> &str {
        match self {
            Self::Table => "table",
            Self::Head => "head",
            Self::Body => "body",
            Self::Row => "row",
            Self::HeaderCell => "th",
            Self::Cell => "td",
            Self::Group => "group",
            Self::Span => "span",
            Self::DragHandle => "handle",
            Self::Custom(name) => name,
        }
    }
}

