use std::sync::Arc;

use crate::event::{DragEvent, DragKind};

/// Caller-supplied event handler.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&mut DragEvent) + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn(&mut DragEvent) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, event: &mut DragEvent) {
        (self.0)(event)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback(...)")
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// What happens when a listener fires.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run a handler directly.
    Callback(Callback),
    /// Hand the event to whoever dispatches the tree, under the given route name.
    Route(String),
}

impl Action {
    pub fn callback(f: impl Fn(&mut DragEvent) + Send + Sync + 'static) -> Self {
        Self::Callback(Callback::new(f))
    }

    pub fn route(name: impl Into<String>) -> Self {
        Self::Route(name.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listener {
    pub kind: DragKind,
    pub action: Action,
}

impl Listener {
    pub fn new(kind: DragKind, action: Action) -> Self {
        Self { kind, action }
    }
}

/// Ordered listeners of an element. Listeners run in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: Listener) {
        self.0.push(listener);
    }

    /// Insert ahead of every existing listener.
    pub fn prepend(&mut self, listener: Listener) {
        self.0.insert(0, listener);
    }

    /// Actions registered for `kind`, in order.
    pub fn actions(&self, kind: DragKind) -> impl Iterator<Item = &Action> {
        self.0
            .iter()
            .filter(move |l| l.kind == kind)
            .map(|l| &l.action)
    }

    pub fn has_route(&self, kind: DragKind, name: &str) -> bool {
        self.actions(kind)
            .any(|a| matches!(a, Action::Route(r) if r == name))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
