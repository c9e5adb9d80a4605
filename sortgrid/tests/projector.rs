use griddom::{Action, Callback, Cursor, DragKind, Element, Role, Size, Style};
use sortgrid::projector::{
    COLUMN_INDEX_KEY, ProjectionView, ROUTE_DRAG_OVER, ROUTE_DRAG_START, ROUTE_DROP, column_index,
};
use sortgrid::{ColumnMove, StructuralRoles, drag_handle, project, project_column};

const HEADERS: [&str; 4] = ["Dave", "Jamie", "Joe", "No sorting"];
const BODY: [[&str; 4]; 2] = [
    ["foo", "bar", "Bam", "Action"],
    ["whizz", "woop", "binary star system", "Action"],
];

/// Four columns; the first three carry a handle.
fn table() -> Element {
    let header = Element::row().children(HEADERS.iter().enumerate().map(|(i, name)| {
        let cell = Element::header_cell().child(Element::text(*name));
        if i < 3 { cell.child(drag_handle()) } else { cell }
    }));
    let body = Element::body().children(BODY.iter().map(|row| {
        Element::row().children(row.iter().map(|v| Element::cell().child(Element::text(*v))))
    }));
    Element::table()
        .child(Element::head().child(header))
        .child(body)
}

fn rows(node: &Element) -> Vec<&Element> {
    fn collect<'a>(node: &'a Element, out: &mut Vec<&'a Element>) {
        if node.role == Role::Row {
            out.push(node);
            return;
        }
        for child in node.children_slice() {
            collect(child, out);
        }
    }
    let mut out = Vec::new();
    collect(node, &mut out);
    out
}

/// Text of each row slot, handles removed.
fn texts(node: &Element) -> Vec<Vec<String>> {
    rows(node)
        .iter()
        .map(|row| {
            row.children_slice()
                .iter()
                .map(|cell| cell.text_content().replace("<>", ""))
                .collect()
        })
        .collect()
}

fn view<'a>(
    roles: &'a StructuralRoles,
    reorder: Option<ColumnMove>,
    widths: &'a [u16],
) -> ProjectionView<'a> {
    ProjectionView {
        roles,
        reorder,
        widths,
        drag_opacity: 0.1,
    }
}

/// No listener, draggable flag or column tag anywhere under `node`.
fn assert_inert(node: &Element) {
    assert!(node.listeners.is_empty(), "{} has listeners", node.id);
    assert!(!node.draggable, "{} is draggable", node.id);
    assert_eq!(column_index(node), None, "{} is tagged", node.id);
    for child in node.children_slice() {
        assert_inert(child);
    }
}

fn handle_of(cell: &Element) -> Option<&Element> {
    cell.children_slice()
        .iter()
        .find(|child| child.role == Role::DragHandle)
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_no_reorder_keeps_order() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, None, &[]));

    assert_eq!(texts(&projection.tree)[0], HEADERS);
    assert_eq!(texts(&projection.tree)[1], BODY[0]);
    assert_eq!(projection.sortable.to_vec(), vec![0, 1, 2]);
}

#[test]
fn test_reorder_applies_to_every_row() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, Some(ColumnMove::new(2, 1)), &[]));
    let texts = texts(&projection.tree);

    assert_eq!(texts[0], ["Dave", "Joe", "Jamie", "No sorting"]);
    assert_eq!(texts[1], ["foo", "Bam", "bar", "Action"]);
    assert_eq!(texts[2], ["whizz", "binary star system", "woop", "Action"]);
}

#[test]
fn test_reorder_is_list_move() {
    let roles = StructuralRoles::default();
    let source = table();
    let original = texts(&source);

    for from in 0..4 {
        for to in 0..4 {
            let mv = ColumnMove::new(from, to);
            let projected = texts(&project(&source, &view(&roles, Some(mv), &[])).tree);
            for (row, expected) in projected.iter().zip(&original) {
                let mut expected = expected.clone();
                let moved = expected.remove(from);
                expected.insert(to, moved);
                assert_eq!(row, &expected, "move {from} -> {to}");
            }
        }
    }
}

#[test]
fn test_input_tree_is_not_mutated() {
    let roles = StructuralRoles::default();
    let source = table();
    let before = source.clone();
    project(&source, &view(&roles, Some(ColumnMove::new(0, 3)), &[1, 2, 3, 4]));
    assert_eq!(source, before);
}

// ============================================================================
// Decoration
// ============================================================================

#[test]
fn test_cells_tagged_with_current_index() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, Some(ColumnMove::new(2, 1)), &[]));

    for row in rows(&projection.tree) {
        for (i, cell) in row.children_slice().iter().enumerate() {
            assert_eq!(column_index(cell), Some(i));
            assert!(cell.listeners.has_route(DragKind::DragOver, ROUTE_DRAG_OVER));
            assert!(cell.listeners.has_route(DragKind::Drop, ROUTE_DROP));
        }
    }
}

#[test]
fn test_handles_decorated() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, Some(ColumnMove::new(2, 0)), &[]));
    let header = rows(&projection.tree)[0];

    for (i, cell) in header.children_slice().iter().enumerate().take(3) {
        let handle = handle_of(cell).expect("handle");
        assert!(handle.draggable);
        assert_eq!(handle.style.cursor, Some(Cursor::Grab));
        assert_eq!(handle.get_data(COLUMN_INDEX_KEY), Some(&i.to_string()));
        assert!(handle.listeners.has_route(DragKind::DragStart, ROUTE_DRAG_START));
    }
    assert!(handle_of(&header.children_slice()[3]).is_none());
}

#[test]
fn test_sortable_set_uses_current_indices() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, Some(ColumnMove::new(3, 0)), &[]));
    assert_eq!(projection.sortable.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_nested_handle_found() {
    let roles = StructuralRoles::default();
    let header = Element::row()
        .child(Element::header_cell().child(Element::group().child(drag_handle())))
        .child(Element::header_cell().child(Element::text("plain")));
    let projection = project(&Element::table().child(header), &view(&roles, None, &[]));
    assert_eq!(projection.sortable.to_vec(), vec![0]);
}

#[test]
fn test_idle_styles() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, None, &[]));

    for row in rows(&projection.tree) {
        for cell in row.children_slice() {
            assert_eq!(cell.style.opacity, Some(1.0));
            assert_eq!(cell.style.width, None);
        }
    }
}

#[test]
fn test_dragged_column_styles() {
    let roles = StructuralRoles::default();
    let widths = [5, 12, 30, 3];
    let projection = project(&table(), &view(&roles, Some(ColumnMove::new(2, 1)), &widths));

    for row in rows(&projection.tree) {
        let cells = row.children_slice();
        let opacities: Vec<_> = cells.iter().map(|c| c.style.opacity).collect();
        assert_eq!(opacities, [Some(1.0), Some(0.1), Some(1.0), Some(1.0)]);

        // Widths follow the column, not the position.
        let widths: Vec<_> = cells.iter().map(|c| c.style.width).collect();
        assert_eq!(
            widths,
            [
                Some(Size::Fixed(5)),
                Some(Size::Fixed(30)),
                Some(Size::Fixed(12)),
                Some(Size::Fixed(3)),
            ]
        );
    }
}

#[test]
fn test_missing_width_left_unset() {
    let roles = StructuralRoles::default();
    let projection = project(&table(), &view(&roles, Some(ColumnMove::new(0, 1)), &[7]));
    let header = rows(&projection.tree)[0];
    assert_eq!(header.children_slice()[1].style.width, Some(Size::Fixed(7)));
    assert_eq!(header.children_slice()[2].style.width, None);
}

#[test]
fn test_caller_style_wins() {
    let roles = StructuralRoles::default();
    let header = Element::row()
        .child(
            Element::header_cell()
                .style(Style::new().opacity(0.5).width(Size::Fixed(99)))
                .child(drag_handle()),
        )
        .child(Element::header_cell().child(drag_handle()));
    let tree = Element::table().child(header);

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(1, 0)), &[1, 2]));
    let cells = rows(&projection.tree)[0].children_slice();

    // The styled cell moved to position 1.
    assert_eq!(cells[1].style.opacity, Some(0.5));
    assert_eq!(cells[1].style.width, Some(Size::Fixed(99)));
    assert_eq!(cells[0].style.opacity, Some(0.1));
}

#[test]
fn test_caller_listeners_kept_after_routes() {
    let roles = StructuralRoles::default();
    let own = Callback::new(|_| {});
    let header = Element::row().child(
        Element::header_cell()
            .on(DragKind::DragOver, Action::Callback(own.clone()))
            .child(drag_handle()),
    );
    let projection = project(&Element::table().child(header), &view(&roles, None, &[]));
    let cell = &rows(&projection.tree)[0].children_slice()[0];

    let actions: Vec<_> = cell.listeners.actions(DragKind::DragOver).collect();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], &Action::route(ROUTE_DRAG_OVER));
    assert_eq!(actions[1], &Action::Callback(own));
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_wrappers_preserved() {
    let roles = StructuralRoles::default();
    let row = |a: &str, b: &str| {
        Element::row()
            .child(Element::cell().child(Element::text(a)))
            .child(Element::cell().child(Element::text(b)))
    };
    let tree = Element::table().child(
        Element::body()
            .id("body")
            .child(Element::group().id("section").child(row("a", "b")))
            .child(row("c", "d")),
    );

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(0, 1)), &[]));
    let body = &projection.tree.children_slice()[0];
    assert_eq!(body.id, "body");
    assert_eq!(body.children_slice()[0].id, "section");
    assert_eq!(texts(&projection.tree), [["b", "a"], ["d", "c"]]);
}

#[test]
fn test_wrapped_cells_share_slot_index() {
    let roles = StructuralRoles::default();
    let row = Element::row()
        .child(Element::cell().child(Element::text("first")))
        .child(
            Element::group()
                .id("slot")
                .child(Element::cell().child(Element::text("second"))),
        );
    let tree = Element::table().child(row);

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(1, 0)), &[]));
    let slots = rows(&projection.tree)[0].children_slice();
    assert_eq!(slots[0].id, "slot");
    assert_eq!(column_index(&slots[0].children_slice()[0]), Some(0));
    assert_eq!(column_index(&slots[1]), Some(1));
}

#[test]
fn test_malformed_content_passes_through() {
    let roles = StructuralRoles::default();
    let tree = Element::table()
        .child(Element::row().with_content(griddom::Content::Text("loose".into())))
        .child(Element::cell().child(Element::text("orphan")))
        .child(Element::text("note"));

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(0, 1)), &[]));
    assert_eq!(projection.tree, tree);
    assert!(projection.sortable.is_empty());
}

#[test]
fn test_out_of_range_reorder_leaves_short_rows() {
    let roles = StructuralRoles::default();
    let tree = Element::table()
        .child(
            Element::row()
                .child(Element::cell().child(Element::text("a")))
                .child(Element::cell().child(Element::text("b")))
                .child(Element::cell().child(Element::text("c"))),
        )
        .child(Element::row().child(Element::cell().child(Element::text("x"))));

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(2, 0)), &[]));
    assert_eq!(texts(&projection.tree), vec![vec!["c", "a", "b"], vec!["x"]]);
}

#[test]
fn test_short_rows_keep_plain_styles() {
    let roles = StructuralRoles::default();
    let tree = Element::table()
        .child(
            Element::row()
                .child(Element::cell().child(Element::text("a")))
                .child(Element::cell().child(Element::text("b")))
                .child(Element::cell().child(Element::text("c"))),
        )
        .child(Element::row().child(Element::cell().child(Element::text("x"))));

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(2, 0)), &[5, 12, 30]));
    let rows = rows(&projection.tree);

    let full = rows[0].children_slice();
    assert_eq!(full[0].style.opacity, Some(0.1));
    assert_eq!(full[0].style.width, Some(Size::Fixed(30)));

    let short = &rows[1].children_slice()[0];
    assert_eq!(short.style.opacity, Some(1.0));
    assert_eq!(short.style.width, Some(Size::Fixed(5)));
    assert_eq!(column_index(short), Some(0));
}

#[test]
fn test_custom_roles() {
    let roles = StructuralRoles {
        rows: vec![Role::Custom("line".into())],
        cells: vec![Role::Custom("field".into())],
    };
    let field = |v: &str| Element::new(Role::Custom("field".into())).child(Element::text(v));
    let tree = Element::group().child(
        Element::new(Role::Custom("line".into()))
            .child(field("a"))
            .child(field("b").child(drag_handle())),
    );

    let projection = project(&tree, &view(&roles, Some(ColumnMove::new(1, 0)), &[]));
    let line = &projection.tree.children_slice()[0];
    assert_eq!(line.children_slice()[0].text_content(), "b<>");
    assert_eq!(projection.sortable.to_vec(), vec![0]);
}

// ============================================================================
// Single column
// ============================================================================

#[test]
fn test_project_column_isolates_one_column() {
    let roles = StructuralRoles::default();
    let ghost = project_column(&table(), &roles, 2, Some(30));
    let rows = rows(&ghost);

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.children_slice().len(), 1);
    }
    assert_eq!(texts(&ghost), [["Joe"], ["Bam"], ["binary star system"]]);
}

#[test]
fn test_project_column_is_inert() {
    let roles = StructuralRoles::default();
    let decorated = project(&table(), &view(&roles, None, &[])).tree;
    let ghost = project_column(&decorated, &roles, 0, Some(5));

    for row in rows(&ghost) {
        let cell = &row.children_slice()[0];
        assert_eq!(cell.style.width, Some(Size::Fixed(5)));
        assert_eq!(column_index(cell), None);
    }
    assert_inert(&ghost);
}

#[test]
fn test_project_column_strips_nested_and_outer_listeners() {
    let roles = StructuralRoles::default();
    let header = Element::row().child(
        Element::header_cell().child(
            Element::group()
                .on(DragKind::Drop, Action::callback(|_| {}))
                .child(drag_handle().on(DragKind::DragStart, Action::route(ROUTE_DRAG_START))),
        ),
    );
    let tree = Element::table()
        .on(DragKind::DragOver, Action::callback(|_| {}))
        .child(Element::head().child(header));

    let ghost = project_column(&tree, &roles, 0, None);
    assert_inert(&ghost);
    assert_eq!(ghost.text_content(), "<>");
}

#[test]
fn test_project_column_out_of_range() {
    let roles = StructuralRoles::default();
    let ghost = project_column(&table(), &roles, 9, None);
    for row in rows(&ghost) {
        assert!(row.children_slice().is_empty());
    }
}
