//! Column projection over caller content.
//!
//! The projector walks an arbitrary content tree, classifies each node by
//! structural role and hands every row it finds to a [`RowVisitor`]. Wrappers
//! are rebuilt unchanged around their processed children; anything it cannot
//! classify is passed through as given.
//!
//! Projection is pure: the caller's tree is never mutated.

mod decorate;
mod isolate;

use griddom::{Content, Element};

use crate::column::{ColumnIndex, ColumnMove, SortableSet};
use crate::config::StructuralRoles;

use decorate::Decorate;
use isolate::Isolate;

/// Data key holding a cell's current column index.
pub const COLUMN_INDEX_KEY: &str = "column-index";

/// Route fired when a drag starts on a handle.
pub const ROUTE_DRAG_START: &str = "sortgrid:drag-start";
/// Route fired when the pointer moves over a cell.
pub const ROUTE_DRAG_OVER: &str = "sortgrid:drag-over";
/// Route fired when the dragged column is dropped on a cell.
pub const ROUTE_DROP: &str = "sortgrid:drop";
/// Route fired when the gesture ends.
pub const ROUTE_DRAG_END: &str = "sortgrid:drag-end";

/// Structural classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Row,
    Cell,
    /// Intermediate node with children (table, body, grouping wrapper, ...).
    Wrapper,
    Leaf,
}

pub fn classify(element: &Element, roles: &StructuralRoles) -> NodeKind {
    if roles.is_row(element) {
        NodeKind::Row
    } else if roles.is_cell(element) {
        NodeKind::Cell
    } else if element.has_children() {
        NodeKind::Wrapper
    } else {
        NodeKind::Leaf
    }
}

/// Rebuilds rows found by [`walk`].
pub(crate) trait RowVisitor {
    fn visit_row(&mut self, row: &Element) -> Element;
}

pub(crate) fn walk<V: RowVisitor>(node: &Element, roles: &StructuralRoles, visitor: &mut V) -> Element {
    match classify(node, roles) {
        NodeKind::Row => visitor.visit_row(node),
        NodeKind::Wrapper => node.rebuild(Content::Children(
            node.children_slice()
                .iter()
                .map(|child| walk(child, roles, visitor))
                .collect(),
        )),
        NodeKind::Cell | NodeKind::Leaf => node.clone(),
    }
}

/// Inputs to a full projection.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionView<'a> {
    pub roles: &'a StructuralRoles,
    /// Provisional reorder to display.
    pub reorder: Option<ColumnMove>,
    /// Header widths captured at drag start, by original column. Empty when
    /// no drag is in progress.
    pub widths: &'a [u16],
    pub drag_opacity: f32,
}

/// Output of [`project`].
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub tree: Element,
    /// Columns found to contain a drag handle, by current index.
    pub sortable: SortableSet,
}

/// Reorder and decorate every row of `tree`.
pub fn project(tree: &Element, view: &ProjectionView<'_>) -> Projection {
    let mut visitor = Decorate::new(view);
    let tree = walk(tree, view.roles, &mut visitor);
    Projection {
        tree,
        sortable: visitor.into_sortable(),
    }
}

/// Reduce every row of `tree` to the single column at `column`.
///
/// The result is inert: no listeners, nothing draggable, no positional tags.
pub fn project_column(
    tree: &Element,
    roles: &StructuralRoles,
    column: ColumnIndex,
    width: Option<u16>,
) -> Element {
    let mut visitor = Isolate::new(roles, column, width);
    isolate::inert(&walk(tree, roles, &mut visitor))
}

/// Current column index tagged on an element, if any.
pub fn column_index(element: &Element) -> Option<ColumnIndex> {
    element.get_data(COLUMN_INDEX_KEY)?.parse().ok()
}
