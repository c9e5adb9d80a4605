//! Progressive row presentation.
//!
//! Large tables present only a prefix of their rows at first; the rest are
//! revealed on demand.

use griddom::{Content, Element};

use crate::config::StructuralRoles;
use crate::projector::{NodeKind, classify};

/// Consumer of projected trees.
pub trait RowRenderer {
    /// Present `tree`, rendering at least `minimum_render` rows immediately.
    fn present(&mut self, tree: Element, minimum_render: usize);
}

/// [`RowRenderer`] that keeps the latest tree and exposes a bounded prefix of
/// its rows.
#[derive(Debug, Clone, Default)]
pub struct ProgressiveRows {
    roles: StructuralRoles,
    tree: Option<Element>,
    budget: usize,
    total: usize,
}

impl ProgressiveRows {
    pub fn new(roles: StructuralRoles) -> Self {
        Self {
            roles,
            ..Default::default()
        }
    }

    /// The presented tree with rows past the budget removed.
    pub fn visible(&self) -> Option<Element> {
        let tree = self.tree.as_ref()?;
        let mut remaining = self.budget;
        truncate(tree, &self.roles, &mut remaining)
    }

    /// The presented tree with every row.
    pub fn full(&self) -> Option<&Element> {
        self.tree.as_ref()
    }

    pub fn total_rows(&self) -> usize {
        self.total
    }

    pub fn rendered_rows(&self) -> usize {
        self.budget.min(self.total)
    }

    pub fn deferred_rows(&self) -> usize {
        self.total.saturating_sub(self.budget)
    }

    pub fn is_complete(&self) -> bool {
        self.deferred_rows() == 0
    }

    /// Render `count` more rows.
    pub fn reveal(&mut self, count: usize) {
        self.budget = self.budget.saturating_add(count).min(self.total.max(self.budget));
    }

    pub fn reveal_all(&mut self) {
        self.budget = self.budget.max(self.total);
    }
}

impl RowRenderer for ProgressiveRows {
    fn present(&mut self, tree: Element, minimum_render: usize) {
        self.total = count_rows(&tree, &self.roles);
        self.budget = self.budget.max(minimum_render);
        self.tree = Some(tree);
    }
}

fn count_rows(node: &Element, roles: &StructuralRoles) -> usize {
    match classify(node, roles) {
        NodeKind::Row => 1,
        NodeKind::Wrapper => node
            .children_slice()
            .iter()
            .map(|child| count_rows(child, roles))
            .sum(),
        NodeKind::Cell | NodeKind::Leaf => 0,
    }
}

/// Copy of `node` keeping only the first `remaining` rows in document order.
fn truncate(node: &Element, roles: &StructuralRoles, remaining: &mut usize) -> Option<Element> {
    match classify(node, roles) {
        NodeKind::Row => {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
            Some(node.clone())
        }
        NodeKind::Wrapper => Some(node.rebuild(Content::Children(
            node.children_slice()
                .iter()
                .filter_map(|child| truncate(child, roles, remaining))
                .collect(),
        ))),
        NodeKind::Cell | NodeKind::Leaf => Some(node.clone()),
    }
}
