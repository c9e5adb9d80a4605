/// Kind of pointer drag event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// Gesture started on a draggable element.
    DragStart,
    /// Pointer moved over an element while dragging.
    DragOver,
    /// Dragged item released over an element.
    Drop,
    /// Gesture finished, whether or not a drop happened.
    DragEnd,
}

/// Drag image attached to a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragImage {
    /// Identifier of the off-screen surface to show under the pointer.
    pub surface: String,
    /// Pointer offset into the image.
    pub x: u16,
    pub y: u16,
}

/// Payload carried alongside a drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    drag_image: Option<DragImage>,
}

impl DataTransfer {
    pub fn set_drag_image(&mut self, surface: impl Into<String>, x: u16, y: u16) {
        self.drag_image = Some(DragImage {
            surface: surface.into(),
            x,
            y,
        });
    }

    pub fn drag_image(&self) -> Option<&DragImage> {
        self.drag_image.as_ref()
    }
}

/// A drag event targeted at an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    pub kind: DragKind,
    /// ID of the innermost element under the pointer.
    pub target: String,
    pub data_transfer: DataTransfer,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DragEvent {
    pub fn new(kind: DragKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            data_transfer: DataTransfer::default(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn drag_start(target: impl Into<String>) -> Self {
        Self::new(DragKind::DragStart, target)
    }

    pub fn drag_over(target: impl Into<String>) -> Self {
        Self::new(DragKind::DragOver, target)
    }

    pub fn drop(target: impl Into<String>) -> Self {
        Self::new(DragKind::Drop, target)
    }

    pub fn drag_end(target: impl Into<String>) -> Self {
        Self::new(DragKind::DragEnd, target)
    }

    /// Suppress the platform default (for `DragOver`: the "not droppable" cursor).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop the event from bubbling to ancestors of the current element.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
