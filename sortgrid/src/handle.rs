//! Drag handle marker.
//!
//! Wrapping content in a handle makes its enclosing column draggable.

use griddom::{Element, Role};

/// Glyph shown by a handle created without content.
pub const DEFAULT_GLYPH: &str = "<>";

/// A drag handle showing the default glyph.
pub fn drag_handle() -> Element {
    drag_handle_with(Element::text(DEFAULT_GLYPH))
}

/// A drag handle around caller content.
pub fn drag_handle_with(content: Element) -> Element {
    Element::new(Role::DragHandle).child(content)
}

pub fn is_drag_handle(element: &Element) -> bool {
    element.role == Role::DragHandle
}

/// Whether `element` or any descendant is a drag handle.
pub fn contains_drag_handle(element: &Element) -> bool {
    is_drag_handle(element) || element.children_slice().iter().any(contains_drag_handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyph() {
        let handle = drag_handle();
        assert!(is_drag_handle(&handle));
        assert_eq!(handle.text_content(), "<>");
    }

    #[test]
    fn test_custom_content() {
        let handle = drag_handle_with(Element::text("::"));
        assert_eq!(handle.text_content(), "::");
    }

    #[test]
    fn test_contains_nested() {
        let cell = Element::header_cell()
            .child(Element::text("Joe"))
            .child(Element::group().child(drag_handle()));
        assert!(contains_drag_handle(&cell));
        assert!(!contains_drag_handle(&Element::cell().child(Element::text("x"))));
    }
}
