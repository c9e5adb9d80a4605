use griddom::{Content, Element, Listeners, Size, Style};

use super::{COLUMN_INDEX_KEY, NodeKind, RowVisitor, classify};
use crate::column::ColumnIndex;
use crate::config::StructuralRoles;

/// Keeps one column slot per row and sizes its cells.
pub(super) struct Isolate<'a> {
    roles: &'a StructuralRoles,
    column: ColumnIndex,
    width: Option<u16>,
}

impl<'a> Isolate<'a> {
    pub(super) fn new(roles: &'a StructuralRoles, column: ColumnIndex, width: Option<u16>) -> Self {
        Self {
            roles,
            column,
            width,
        }
    }

    fn sized(&self, node: &Element) -> Element {
        match classify(node, self.roles) {
            NodeKind::Cell => {
                let mut cell = node.clone();
                let defaults = Style {
                    width: self.width.map(Size::Fixed),
                    ..Default::default()
                };
                cell.style = defaults.merge(&node.style);
                cell
            }
            NodeKind::Wrapper => node.rebuild(Content::Children(
                node.children_slice()
                    .iter()
                    .map(|child| self.sized(child))
                    .collect(),
            )),
            NodeKind::Row | NodeKind::Leaf => node.clone(),
        }
    }
}

impl RowVisitor for Isolate<'_> {
    fn visit_row(&mut self, row: &Element) -> Element {
        if !row.has_children() {
            return row.clone();
        }

        let children = row
            .children_slice()
            .get(self.column)
            .map(|slot| self.sized(slot))
            .into_iter()
            .collect();
        row.rebuild(Content::Children(children))
    }
}

/// Copy of `node` with no listeners, nothing draggable and no positional tags,
/// all the way down.
pub(super) fn inert(node: &Element) -> Element {
    let content = match &node.content {
        Content::Children(children) => Content::Children(children.iter().map(inert).collect()),
        other => other.clone(),
    };
    let mut node = node.rebuild(content);
    node.listeners = Listeners::default();
    node.draggable = false;
    node.data.remove(COLUMN_INDEX_KEY);
    node
}
