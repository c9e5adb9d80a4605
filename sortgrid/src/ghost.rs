//! Off-screen ghost preview of the dragged column.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use griddom::Element;
use log::debug;

/// Identifier of a surface mounted off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__ghost_{}", self.0)
    }
}

/// Layout capabilities the embedding environment provides.
pub trait LayoutHost: Send + Sync {
    /// Rendered width of each header cell, in display order.
    fn header_cell_widths(&self) -> Vec<u16>;

    /// Mount inert content outside the visible area.
    fn mount_offscreen(&self, content: Element, width: Option<u16>) -> SurfaceId;

    /// Remove a surface created by [`LayoutHost::mount_offscreen`].
    fn unmount(&self, surface: SurfaceId);
}

/// Scoped off-screen surface. Unmounted when dropped.
pub struct GhostSurface {
    host: Arc<dyn LayoutHost>,
    id: SurfaceId,
    width: Option<u16>,
}

impl GhostSurface {
    pub fn acquire(host: Arc<dyn LayoutHost>, content: Element, width: Option<u16>) -> Self {
        let id = host.mount_offscreen(content, width);
        debug!("Mounted ghost surface {id}");
        Self { host, id, width }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn width(&self) -> Option<u16> {
        self.width
    }

    /// Pointer offset into the ghost: horizontally centred, top edge.
    pub fn pointer_offset(&self) -> (u16, u16) {
        (self.width.unwrap_or(0) / 2, 0)
    }
}

impl Drop for GhostSurface {
    fn drop(&mut self) {
        debug!("Releasing ghost surface {}", self.id);
        self.host.unmount(self.id);
    }
}

impl std::fmt::Debug for GhostSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhostSurface")
            .field("id", &self.id)
            .field("width", &self.width)
            .finish()
    }
}

/// Content mounted on a [`MemoryHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct MountedSurface {
    pub content: Element,
    pub width: Option<u16>,
}

/// In-process [`LayoutHost`] with fixed header widths.
#[derive(Debug, Default)]
pub struct MemoryHost {
    widths: Mutex<Vec<u16>>,
    surfaces: Mutex<HashMap<SurfaceId, MountedSurface>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_widths(widths: impl Into<Vec<u16>>) -> Self {
        Self {
            widths: Mutex::new(widths.into()),
            ..Default::default()
        }
    }

    pub fn set_widths(&self, widths: impl Into<Vec<u16>>) {
        if let Ok(mut guard) = self.widths.lock() {
            *guard = widths.into();
        }
    }

    pub fn surface(&self, id: SurfaceId) -> Option<MountedSurface> {
        self.surfaces.lock().ok()?.get(&id).cloned()
    }

    pub fn mounted_count(&self) -> usize {
        self.surfaces.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl LayoutHost for MemoryHost {
    fn header_cell_widths(&self) -> Vec<u16> {
        self.widths.lock().map(|w| w.clone()).unwrap_or_default()
    }

    fn mount_offscreen(&self, content: Element, width: Option<u16>) -> SurfaceId {
        let id = SurfaceId::new();
        if let Ok(mut surfaces) = self.surfaces.lock() {
            surfaces.insert(id, MountedSurface { content, width });
        }
        id
    }

    fn unmount(&self, surface: SurfaceId) {
        if let Ok(mut surfaces) = self.surfaces.lock() {
            surfaces.remove(&surface);
        }
    }
}
