//! Column drag-reorder engine for data grids.
//!
//! [`SortableTable`] ties together the pieces: the [`ReorderMachine`] tracks
//! the drag session and its debounced provisional reorder, the
//! [`projector`] re-projects the caller's content tree in the provisional
//! order, and the [`progressive`] renderer presents a bounded prefix of rows.

pub mod column;
pub mod config;
pub mod ghost;
pub mod handle;
pub mod progressive;
pub mod projector;
pub mod reorder;
pub mod table;
pub mod timer;

pub use column::{ColumnIndex, ColumnMove, SortableSet};
pub use config::{ConfigError, StructuralRoles, TableConfig};
pub use ghost::{GhostSurface, LayoutHost, MemoryHost, SurfaceId};
pub use handle::{drag_handle, drag_handle_with};
pub use progressive::{ProgressiveRows, RowRenderer};
pub use projector::{Projection, project, project_column};
pub use reorder::{DragSession, ReorderMachine, SessionState};
pub use table::SortableTable;
pub use timer::{ManualScheduler, Scheduler, TimerHandle, TimerTicket, TokioScheduler};

pub mod prelude {
    pub use crate::column::{ColumnIndex, ColumnMove};
    pub use crate::config::TableConfig;
    pub use crate::ghost::MemoryHost;
    pub use crate::handle::drag_handle;
    pub use crate::table::SortableTable;
    pub use crate::timer::{ManualScheduler, TokioScheduler};

    pub use griddom::{DragEvent, DragKind, Element};
}
