use std::fs::File;
use std::sync::{Arc, Mutex};

use griddom::{DragEvent, Element, Role};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use sortgrid::prelude::*;
use sortgrid::{ProgressiveRows, RowRenderer};

const HEADERS: [&str; 4] = ["Dave", "Jamie", "Joe", "No sorting"];
const WIDTHS: [u16; 4] = [5, 12, 30, 3];

fn content() -> Element {
    let header = Element::row().children(HEADERS.iter().enumerate().map(|(i, name)| {
        let cell = Element::header_cell()
            .id(format!("h{i}"))
            .child(Element::text(format!("{name} ")));
        // The last column stays put
        if i < 3 {
            cell.child(drag_handle().id(format!("handle-{i}")))
        } else {
            cell
        }
    }));

    let rows = [
        ["foo", "bar", "Bam", "Action"],
        ["whizz", "woop", "binary star system", "Action"],
    ];
    let body = Element::body().children(rows.iter().map(|row| {
        Element::row().children(
            row.iter()
                .map(|value| Element::cell().child(Element::text(*value))),
        )
    }));

    Element::table()
        .child(Element::head().child(header))
        .child(body)
}

fn header_cells(rendered: &Element) -> Vec<&Element> {
    fn walk<'a>(node: &'a Element, out: &mut Vec<&'a Element>) {
        if node.role == Role::HeaderCell {
            out.push(node);
            return;
        }
        for child in node.children_slice() {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    walk(rendered, &mut out);
    out
}

fn header_order(rendered: &Element) -> Vec<String> {
    header_cells(rendered)
        .iter()
        .map(|cell| cell.text_content().replace("<>", "").trim().to_string())
        .collect()
}

/// ID of the header cell displayed at `position`.
fn header_id_at(rendered: &Element, position: usize) -> String {
    header_cells(rendered)
        .get(position)
        .map(|cell| cell.id.clone())
        .unwrap_or_default()
}

fn parse_args() -> (usize, usize) {
    let args: Vec<usize> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    match args.as_slice() {
        [from, to, ..] => (*from, *to),
        _ => (2, 1),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_file = File::create("sortgrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let (from, to) = parse_args();
    info!("Scripted drag of column {from} onto {to}");
    let commits = Arc::new(Mutex::new(Vec::new()));
    let sink = commits.clone();

    let host = Arc::new(MemoryHost::with_widths(WIDTHS));
    let (scheduler, mut timers) = TokioScheduler::new();
    let mut table = match SortableTable::new(TableConfig::default(), scheduler, host) {
        Ok(table) => table
            .with_content(content())
            .on_column_order(move |from, to| {
                if let Ok(mut guard) = sink.lock() {
                    guard.push((from, to));
                }
            }),
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut rows = ProgressiveRows::new(table.config().roles.clone());
    table.render_into(&mut rows);
    let mut rendered = table.render();
    println!("initial: {:?}", header_order(&rendered));
    println!(
        "rows: {} rendered, {} deferred",
        rows.rendered_rows(),
        rows.deferred_rows()
    );

    let mut start = DragEvent::drag_start(format!("handle-{from}"));
    if table.handle_event(&rendered, &mut start) {
        rendered = table.render();
    }
    if let Some(image) = start.data_transfer.drag_image() {
        println!("ghost: {} at ({}, {})", image.surface, image.x, image.y);
    }

    let mut over = DragEvent::drag_over(header_id_at(&rendered, to));
    table.handle_event(&rendered, &mut over);
    println!("drop allowed on {to}: {}", over.default_prevented());

    if over.default_prevented() && from != to {
        if let Some(ticket) = timers.recv().await {
            if table.on_timer(ticket) {
                rendered = table.render();
            }
        }
    }
    println!("provisional: {:?}", header_order(&rendered));

    let mut drop = DragEvent::drop(header_id_at(&rendered, to));
    table.handle_event(&rendered, &mut drop);
    let mut end = DragEvent::drag_end(format!("handle-{from}"));
    table.handle_event(&rendered, &mut end);

    rendered = table.render();
    rows.present(rendered.clone(), table.config().ghost_rows_limit);
    println!("after drop: {:?}", header_order(&rendered));

    info!("Demo finished");
    match commits.lock() {
        Ok(guard) if !guard.is_empty() => println!("committed: {:?}", *guard),
        _ => println!("committed: nothing"),
    }
}
