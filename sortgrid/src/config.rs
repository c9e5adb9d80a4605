//! Table configuration.

use std::time::Duration;

use griddom::{Element, Role};
use serde::Deserialize;
use thiserror::Error;

/// Default opacity of the dragged column's cells.
pub const DEFAULT_DRAG_OPACITY: f32 = 0.1;

/// Default number of rows rendered before the rest are deferred.
pub const DEFAULT_GHOST_ROWS_LIMIT: usize = 16;

/// Default hover stabilization delay in milliseconds.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 40;

/// Errors produced while building or loading a [`TableConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("drag opacity must be a finite value in [0, 1], got {0}")]
    InvalidOpacity(f32),

    #[error("invalid table config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which element roles count as rows and cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralRoles {
    pub rows: Vec<Role>,
    pub cells: Vec<Role>,
}

impl Default for StructuralRoles {
    fn default() -> Self {
        Self {
            rows: vec![Role::Row],
            cells: vec![Role::HeaderCell, Role::Cell],
        }
    }
}

impl StructuralRoles {
    pub fn is_row(&self, element: &Element) -> bool {
        self.rows.contains(&element.role)
    }

    pub fn is_cell(&self, element: &Element) -> bool {
        self.cells.contains(&element.role)
    }

    /// Add a role that should be treated as a row.
    pub fn row(mut self, role: Role) -> Self {
        self.rows.push(role);
        self
    }

    /// Add a role that should be treated as a cell.
    pub fn cell(mut self, role: Role) -> Self {
        self.cells.push(role);
        self
    }
}

/// Configuration for a [`SortableTable`](crate::SortableTable).
///
/// Deserializes from camelCase keys (`dragOpacity`, `ghostRowsLimit`,
/// `debounceDelayMs`); missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Opacity applied to the dragged column's cells.
    pub drag_opacity: f32,

    /// Number of rows rendered immediately; the rest are deferred.
    pub ghost_rows_limit: usize,

    /// Delay before a stable hover becomes a provisional reorder.
    pub debounce_delay_ms: u64,

    /// Structural roles used to find rows and cells.
    #[serde(skip)]
    pub roles: StructuralRoles,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            drag_opacity: DEFAULT_DRAG_OPACITY,
            ghost_rows_limit: DEFAULT_GHOST_ROWS_LIMIT,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            roles: StructuralRoles::default(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of options and validate it.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn drag_opacity(mut self, opacity: f32) -> Self {
        self.drag_opacity = opacity;
        self
    }

    pub fn ghost_rows_limit(mut self, limit: usize) -> Self {
        self.ghost_rows_limit = limit;
        self
    }

    pub fn debounce_delay_ms(mut self, delay: u64) -> Self {
        self.debounce_delay_ms = delay;
        self
    }

    pub fn roles(mut self, roles: StructuralRoles) -> Self {
        self.roles = roles;
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_opacity.is_finite() || !(0.0..=1.0).contains(&self.drag_opacity) {
            return Err(ConfigError::InvalidOpacity(self.drag_opacity));
        }
        Ok(())
    }
}
