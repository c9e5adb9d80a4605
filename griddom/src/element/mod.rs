mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.children_slice() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the chain of elements from `root` down to the element with `id`.
///
/// The first entry is `root`, the last is the target. Returns None if no
/// element in the tree has the given ID.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);

    if element.id == id {
        return true;
    }

    for child in element.children_slice() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}
