//! Sortable table facade.

use std::sync::Arc;

use griddom::{Action, DragEvent, DragImage, DragKind, Element, path_to};
use log::{debug, trace};

use crate::column::{ColumnIndex, ColumnMove, SortableSet};
use crate::config::{ConfigError, TableConfig};
use crate::ghost::{GhostSurface, LayoutHost};
use crate::progressive::RowRenderer;
use crate::projector::{
    ProjectionView, ROUTE_DRAG_END, ROUTE_DRAG_OVER, ROUTE_DRAG_START, ROUTE_DROP, column_index,
    project, project_column,
};
use crate::reorder::{ReorderMachine, SessionState};
use crate::timer::{Scheduler, TimerTicket};

type OrderCallback = Box<dyn FnMut(ColumnIndex, ColumnIndex) + Send>;

/// A table whose columns can be reordered by dragging their handles.
///
/// The table owns the caller's content and re-projects it on every
/// [`render`](Self::render). Drag events from the UI layer go through
/// [`handle_event`](Self::handle_event); fired debounce timers through
/// [`on_timer`](Self::on_timer). Both return true when the table should be
/// rendered again.
///
/// The final order is reported through [`on_column_order`](Self::on_column_order)
/// and is never applied to the content: reordering the data is up to the
/// caller.
pub struct SortableTable<S: Scheduler> {
    config: TableConfig,
    machine: ReorderMachine<S>,
    host: Arc<dyn LayoutHost>,
    content: Element,
    root_id: String,
    on_column_order: Option<OrderCallback>,
}

impl<S: Scheduler> SortableTable<S> {
    pub fn new(
        config: TableConfig,
        scheduler: S,
        host: Arc<dyn LayoutHost>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let delay = config.debounce_delay();
        Ok(Self {
            config,
            machine: ReorderMachine::new(scheduler, delay),
            host,
            content: Element::table(),
            root_id: Element::group().id,
            on_column_order: None,
        })
    }

    /// Set the commit notification, called with `(from, to)` once per drop
    /// that changes the order.
    pub fn on_column_order(
        mut self,
        callback: impl FnMut(ColumnIndex, ColumnIndex) + Send + 'static,
    ) -> Self {
        self.on_column_order = Some(Box::new(callback));
        self
    }

    pub fn with_content(mut self, content: Element) -> Self {
        self.content = content;
        self
    }

    pub fn set_content(&mut self, content: Element) {
        self.content = content;
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn machine(&self) -> &ReorderMachine<S> {
        &self.machine
    }

    pub fn state(&self) -> &SessionState<S::Handle> {
        self.machine.state()
    }

    pub fn sortable(&self) -> &SortableSet {
        self.machine.sortable()
    }

    pub fn scheduler(&self) -> &S {
        self.machine.scheduler()
    }

    /// ID of the root element produced by [`render`](Self::render).
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Project the content in the current provisional order.
    ///
    /// Also rebuilds the sortable set from the handles found.
    pub fn render(&mut self) -> Element {
        let projection = {
            let view = ProjectionView {
                roles: &self.config.roles,
                reorder: self.machine.reorder(),
                widths: self.machine.widths(),
                drag_opacity: self.config.drag_opacity,
            };
            project(&self.content, &view)
        };
        trace!("Rendered sortable columns: {:?}", projection.sortable.to_vec());
        self.machine.set_sortable(projection.sortable);

        Element::group()
            .id(self.root_id.clone())
            .on(DragKind::DragEnd, Action::route(ROUTE_DRAG_END))
            .child(projection.tree)
    }

    /// Render and present through `renderer` with the configured row limit.
    pub fn render_into<R: RowRenderer>(&mut self, renderer: &mut R) {
        let tree = self.render();
        renderer.present(tree, self.config.ghost_rows_limit);
    }

    /// Start dragging `column`.
    ///
    /// Measures the header, mounts the ghost preview and returns the drag
    /// image to attach to the gesture.
    pub fn begin_drag(&mut self, column: ColumnIndex) -> DragImage {
        self.machine.teardown();

        let widths = self.host.header_cell_widths();
        let width = widths.get(column).copied();
        let preview = project_column(&self.content, &self.config.roles, column, width);
        let ghost = GhostSurface::acquire(self.host.clone(), preview, width);

        let (x, y) = ghost.pointer_offset();
        let image = DragImage {
            surface: ghost.id().to_string(),
            x,
            y,
        };
        self.machine.begin_drag(column, widths, Some(ghost));
        image
    }

    pub fn update_hover(&mut self, column: ColumnIndex) -> bool {
        self.machine.update_hover(column)
    }

    pub fn on_timer(&mut self, ticket: TimerTicket) -> bool {
        self.machine.on_timer(ticket)
    }

    /// Drop on `column`; notifies the caller if the order changes.
    pub fn drop(&mut self, column: ColumnIndex) -> Option<ColumnMove> {
        let commit = self.machine.drop(column);
        if let Some(mv) = commit {
            if let Some(callback) = self.on_column_order.as_mut() {
                callback(mv.from, mv.to);
            }
        }
        commit
    }

    pub fn end_drag(&mut self) {
        self.machine.end_drag();
    }

    /// Dispatch a drag event over the `rendered` tree.
    ///
    /// The event bubbles from its target to the root. At each element the
    /// listeners for the event kind run in order; caller callbacks and table
    /// routes are treated alike. Returns true when the table should be
    /// rendered again.
    pub fn handle_event(&mut self, rendered: &Element, event: &mut DragEvent) -> bool {
        let Some(path) = path_to(rendered, &event.target) else {
            trace!("Event target {} not in tree", event.target);
            return false;
        };

        let before = (self.machine.is_dragging(), self.machine.reorder());
        let kind = event.kind;

        for element in path.iter().rev() {
            for action in element.listeners.actions(kind) {
                match action {
                    Action::Callback(callback) => callback.call(event),
                    Action::Route(route) => self.route(route, element, event),
                }
            }
            if event.propagation_stopped() {
                break;
            }
        }

        before != (self.machine.is_dragging(), self.machine.reorder())
    }

    fn route(&mut self, route: &str, element: &Element, event: &mut DragEvent) {
        if route == ROUTE_DRAG_END {
            self.end_drag();
            return;
        }

        let Some(column) = column_index(element) else {
            debug!("Route {route} on untagged element {}", element.id);
            return;
        };

        match route {
            ROUTE_DRAG_START => {
                let image = self.begin_drag(column);
                event
                    .data_transfer
                    .set_drag_image(image.surface, image.x, image.y);
            }
            ROUTE_DRAG_OVER => {
                if self.update_hover(column) {
                    event.prevent_default();
                }
            }
            ROUTE_DROP => {
                self.drop(column);
            }
            _ => trace!("Unknown route {route}"),
        }
    }
}
