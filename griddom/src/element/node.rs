use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::event::DragKind;
use crate::listener::{Action, Listener, Listeners};
use crate::types::{Cursor, Role, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Structural role used by consumers to classify the node.
    pub role: Role,

    // Content
    pub content: Content,

    // Visual
    pub style: Style,

    // Interaction
    pub draggable: bool,
    pub listeners: Listeners,

    // Custom data storage (for positional tags, handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: Role::Group,
            content: Content::None,
            style: Style::default(),
            draggable: false,
            listeners: Listeners::default(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    /// Create an element with the given role and a generated ID.
    pub fn new(role: Role) -> Self {
        Self {
            id: generate_id(role.id_prefix()),
            role,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            role: Role::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn table() -> Self {
        Self::new(Role::Table)
    }

    pub fn head() -> Self {
        Self::new(Role::Head)
    }

    pub fn body() -> Self {
        Self::new(Role::Body)
    }

    pub fn group() -> Self {
        Self::new(Role::Group)
    }

    pub fn row() -> Self {
        Self::new(Role::Row)
    }

    pub fn header_cell() -> Self {
        Self::new(Role::HeaderCell)
    }

    pub fn cell() -> Self {
        Self::new(Role::Cell)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = Some(opacity);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.style.cursor = Some(cursor);
        self
    }

    // Interaction
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Attach a listener for the given drag event kind.
    pub fn on(mut self, kind: DragKind, action: Action) -> Self {
        self.listeners.push(Listener::new(kind, action));
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Replace the content, keeping every other property.
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Direct children, or an empty slice for text and empty content.
    pub fn children_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn has_children(&self) -> bool {
        matches!(self.content, Content::Children(_))
    }

    /// Concatenated text of every descendant.
    pub fn text_content(&self) -> String {
        self.content.text()
    }

    /// Copy of this element with its content replaced by `content`.
    ///
    /// Used when rebuilding a wrapper around processed children.
    pub fn rebuild(&self, content: Content) -> Self {
        Self {
            id: self.id.clone(),
            role: self.role.clone(),
            content,
            style: self.style.clone(),
            draggable: self.draggable,
            listeners: self.listeners.clone(),
            data: self.data.clone(),
        }
    }
}
