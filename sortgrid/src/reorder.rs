//! Drag session state machine.
//!
//! ```text
//! Idle --begin_drag--> Armed --timer--> Reordering
//!   ^                    |                  |
//!   +---- drop / end_drag / begin_drag -----+
//! ```
//!
//! Hover events never change the visible order directly. They only arm the
//! debounce slot; the order changes when a timer whose ticket still occupies
//! the slot fires.

use std::time::Duration;

use log::{debug, trace};

use crate::column::{ColumnIndex, ColumnMove, SortableSet};
use crate::ghost::GhostSurface;
use crate::timer::{Scheduler, TimerHandle, TimerTicket};

/// Debounce slot: the hover target awaiting confirmation and its timer.
///
/// Dropping the slot cancels the timer.
#[derive(Debug)]
pub struct PendingHover<H: TimerHandle> {
    ticket: TimerTicket,
    handle: H,
}

impl<H: TimerHandle> PendingHover<H> {
    pub fn ticket(&self) -> TimerTicket {
        self.ticket
    }
}

impl<H: TimerHandle> Drop for PendingHover<H> {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

/// State owned by one drag gesture.
#[derive(Debug)]
pub struct DragSession<H: TimerHandle> {
    source: ColumnIndex,
    hover: Option<ColumnIndex>,
    pending: Option<PendingHover<H>>,
    widths: Vec<u16>,
    ghost: Option<GhostSurface>,
}

impl<H: TimerHandle> DragSession<H> {
    fn new(source: ColumnIndex, widths: Vec<u16>, ghost: Option<GhostSurface>) -> Self {
        Self {
            source,
            hover: None,
            pending: None,
            widths,
            ghost,
        }
    }

    /// Column being dragged. Fixed for the session's lifetime.
    pub fn source(&self) -> ColumnIndex {
        self.source
    }

    /// Last sortable column the pointer was over.
    pub fn hover(&self) -> Option<ColumnIndex> {
        self.hover
    }

    pub fn pending(&self) -> Option<&PendingHover<H>> {
        self.pending.as_ref()
    }

    /// Header widths captured when the gesture began.
    pub fn widths(&self) -> &[u16] {
        &self.widths
    }

    pub fn ghost(&self) -> Option<&GhostSurface> {
        self.ghost.as_ref()
    }
}

/// Lifecycle of the (at most one) drag session.
#[derive(Debug)]
pub enum SessionState<H: TimerHandle> {
    Idle,
    /// Dragging, original order still displayed.
    Armed(DragSession<H>),
    /// Dragging, provisional reorder displayed.
    Reordering {
        session: DragSession<H>,
        reorder: ColumnMove,
    },
}

impl<H: TimerHandle> Default for SessionState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H: TimerHandle> SessionState<H> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    pub fn session(&self) -> Option<&DragSession<H>> {
        match self {
            Self::Idle => None,
            Self::Armed(session) | Self::Reordering { session, .. } => Some(session),
        }
    }

    fn session_mut(&mut self) -> Option<&mut DragSession<H>> {
        match self {
            Self::Idle => None,
            Self::Armed(session) | Self::Reordering { session, .. } => Some(session),
        }
    }

    pub fn reorder(&self) -> Option<ColumnMove> {
        match self {
            Self::Reordering { reorder, .. } => Some(*reorder),
            _ => None,
        }
    }

    /// Where the dragged column is currently displayed.
    pub fn current_position(&self) -> Option<ColumnIndex> {
        match self {
            Self::Idle => None,
            Self::Armed(session) => Some(session.source),
            Self::Reordering { reorder, .. } => Some(reorder.to),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Armed(_) => "armed",
            Self::Reordering { .. } => "reordering",
        }
    }
}

/// Drag lifecycle, debounce and provisional column order.
#[derive(Debug)]
pub struct ReorderMachine<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    state: SessionState<S::Handle>,
    sortable: SortableSet,
    next_ticket: u64,
}

impl<S: Scheduler> ReorderMachine<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            state: SessionState::Idle,
            sortable: SortableSet::new(),
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &SessionState<S::Handle> {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn session(&self) -> Option<&DragSession<S::Handle>> {
        self.state.session()
    }

    pub fn reorder(&self) -> Option<ColumnMove> {
        self.state.reorder()
    }

    pub fn source(&self) -> Option<ColumnIndex> {
        self.session().map(|s| s.source)
    }

    pub fn hover(&self) -> Option<ColumnIndex> {
        self.session().and_then(|s| s.hover)
    }

    /// Column the armed debounce timer will confirm, if any.
    pub fn pending_column(&self) -> Option<ColumnIndex> {
        self.session()
            .and_then(|s| s.pending.as_ref())
            .map(|p| p.ticket.column)
    }

    /// Captured header widths; empty when idle.
    pub fn widths(&self) -> &[u16] {
        self.session().map(|s| s.widths()).unwrap_or_default()
    }

    pub fn sortable(&self) -> &SortableSet {
        &self.sortable
    }

    /// Replace the sortable set discovered by the latest render.
    pub fn set_sortable(&mut self, sortable: SortableSet) {
        self.sortable = sortable;
    }

    pub fn is_sortable(&self, column: ColumnIndex) -> bool {
        self.sortable.contains(column)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Start a session dragging `column`, replacing any existing one.
    pub fn begin_drag(
        &mut self,
        column: ColumnIndex,
        widths: Vec<u16>,
        ghost: Option<GhostSurface>,
    ) {
        self.teardown();
        debug!("Drag started on column {column} (widths: {widths:?})");
        self.state = SessionState::Armed(DragSession::new(column, widths, ghost));
    }

    /// Pointer moved over `column`.
    ///
    /// Returns true when `column` accepts the drop, i.e. the caller should
    /// suppress the platform's "not droppable" feedback.
    pub fn update_hover(&mut self, column: ColumnIndex) -> bool {
        if !self.sortable.contains(column) {
            trace!("Hover on column {column} ignored: not sortable");
            return false;
        }
        let Some(current) = self.state.current_position() else {
            return false;
        };
        let Some(session) = self.state.session_mut() else {
            return false;
        };

        session.hover = Some(column);

        if column == current {
            // Already displayed there; a timer in flight is stale.
            session.pending = None;
            trace!("Hover on column {column}: already in place");
            return true;
        }

        let ticket = TimerTicket {
            id: self.next_ticket,
            column,
        };
        self.next_ticket += 1;

        session.pending = None;
        let handle = self.scheduler.schedule(self.delay, ticket);
        session.pending = Some(PendingHover { ticket, handle });
        trace!("Hover on column {column}: timer {} armed", ticket.id);
        true
    }

    /// Debounce timer fired. Returns true when the displayed order changed.
    pub fn on_timer(&mut self, ticket: TimerTicket) -> bool {
        let committed = self.state.reorder().map(|r| r.to);
        let Some(session) = self.state.session_mut() else {
            trace!("Timer {} fired with no session", ticket.id);
            return false;
        };

        let current = session.pending.as_ref().map(|p| p.ticket);
        if current != Some(ticket) || session.hover != Some(ticket.column) {
            trace!("Timer {} is stale", ticket.id);
            return false;
        }
        if committed == Some(ticket.column) {
            session.pending = None;
            return false;
        }

        session.pending = None;
        let reorder = ColumnMove::new(session.source, ticket.column);

        self.state = match std::mem::take(&mut self.state) {
            SessionState::Armed(session) | SessionState::Reordering { session, .. } => {
                SessionState::Reordering { session, reorder }
            }
            SessionState::Idle => SessionState::Idle,
        };
        debug!("Provisional reorder {} -> {}", reorder.from, reorder.to);
        true
    }

    /// Dragged column released over `column`. Always ends the session.
    ///
    /// Returns the move to commit, if the drop changes the order.
    pub fn drop(&mut self, column: ColumnIndex) -> Option<ColumnMove> {
        let commit = self
            .source()
            .filter(|&source| source != column && self.sortable.contains(column))
            .map(|source| ColumnMove::new(source, column));

        match commit {
            Some(mv) => debug!("Drop commits {} -> {}", mv.from, mv.to),
            None => debug!("Drop on column {column} commits nothing"),
        }

        self.teardown();
        commit
    }

    /// Gesture ended without a drop.
    pub fn end_drag(&mut self) {
        self.teardown();
    }

    /// Return to idle, cancelling the timer and releasing the ghost.
    ///
    /// Safe to call when idle.
    pub fn teardown(&mut self) {
        let previous = std::mem::take(&mut self.state);
        if previous.is_dragging() {
            debug!("Tearing down {} session", previous.name());
        }
    }
}
