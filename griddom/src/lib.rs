pub mod element;
pub mod event;
pub mod listener;
pub mod types;

pub use element::{find_element, path_to, Content, Element};
pub use event::{DataTransfer, DragEvent, DragImage, DragKind};
pub use listener::{Action, Callback, Listener, Listeners};
pub use types::*;
