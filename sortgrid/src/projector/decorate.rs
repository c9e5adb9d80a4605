use griddom::{Action, Content, Cursor, DragKind, Element, Listener, Size, Style};

use super::{
    COLUMN_INDEX_KEY, NodeKind, ProjectionView, ROUTE_DRAG_OVER, ROUTE_DRAG_START, ROUTE_DROP,
    RowVisitor, classify,
};
use crate::column::{ColumnIndex, ColumnMove, SortableSet};
use crate::handle::is_drag_handle;

/// Reorders row slots and decorates cells and handles.
pub(super) struct Decorate<'a> {
    view: &'a ProjectionView<'a>,
    sortable: SortableSet,
}

impl<'a> Decorate<'a> {
    pub(super) fn new(view: &'a ProjectionView<'a>) -> Self {
        Self {
            view,
            sortable: SortableSet::new(),
        }
    }

    pub(super) fn into_sortable(self) -> SortableSet {
        self.sortable
    }

    /// A row slot is a cell, or a wrapper whose cells all share the slot index.
    ///
    /// `reorder` is the move applied to the enclosing row, if any.
    fn slot(&mut self, node: &Element, index: ColumnIndex, reorder: Option<ColumnMove>) -> Element {
        match classify(node, self.view.roles) {
            NodeKind::Cell => self.cell(node, index, reorder),
            NodeKind::Wrapper => node.rebuild(Content::Children(
                node.children_slice()
                    .iter()
                    .map(|child| self.slot(child, index, reorder))
                    .collect(),
            )),
            NodeKind::Row | NodeKind::Leaf => node.clone(),
        }
    }

    fn cell(&mut self, node: &Element, index: ColumnIndex, reorder: Option<ColumnMove>) -> Element {
        let (content, has_handle) = Self::handles_in(&node.content, index);
        if has_handle {
            self.sortable.insert(index);
        }

        let mut cell = node.rebuild(content);
        cell.data
            .insert(COLUMN_INDEX_KEY.to_string(), index.to_string());
        cell.listeners
            .prepend(Listener::new(DragKind::Drop, Action::route(ROUTE_DROP)));
        cell.listeners
            .prepend(Listener::new(DragKind::DragOver, Action::route(ROUTE_DRAG_OVER)));

        let original = reorder.map_or(index, |mv| mv.original_index(index));
        let dragged = reorder.is_some_and(|mv| mv.to == index);

        let defaults = Style {
            width: self.view.widths.get(original).map(|w| Size::Fixed(*w)),
            opacity: Some(if dragged { self.view.drag_opacity } else { 1.0 }),
            ..Default::default()
        };
        cell.style = defaults.merge(&node.style);
        cell
    }

    fn handles_in(content: &Content, index: ColumnIndex) -> (Content, bool) {
        let Content::Children(children) = content else {
            return (content.clone(), false);
        };

        let mut found = false;
        let children = children
            .iter()
            .map(|child| {
                let (child, has) = Self::handle(child, index);
                found |= has;
                child
            })
            .collect();
        (Content::Children(children), found)
    }

    fn handle(node: &Element, index: ColumnIndex) -> (Element, bool) {
        if !is_drag_handle(node) {
            let (content, found) = Self::handles_in(&node.content, index);
            return (node.rebuild(content), found);
        }

        let mut handle = node.clone().draggable(true);
        handle
            .data
            .insert(COLUMN_INDEX_KEY.to_string(), index.to_string());
        handle.style = Style::new().cursor(Cursor::Grab).merge(&node.style);
        handle
            .listeners
            .prepend(Listener::new(DragKind::DragStart, Action::route(ROUTE_DRAG_START)));
        (handle, true)
    }
}

impl RowVisitor for Decorate<'_> {
    fn visit_row(&mut self, row: &Element) -> Element {
        if !row.has_children() {
            return row.clone();
        }

        let mut slots: Vec<&Element> = row.children_slice().iter().collect();
        // Rows too short for the move keep their order and plain styling.
        let reorder = self.view.reorder.filter(|mv| mv.fits(slots.len()));
        if let Some(mv) = reorder {
            mv.apply(&mut slots);
        }

        let children = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| self.slot(slot, index, reorder))
            .collect();
        row.rebuild(Content::Children(children))
    }
}
