//! Text rendering of the vertex table.

use std::fmt::Write;

use crate::vertex::{COMPONENTS, Vertex, VertexTable};

/// Shortest decimal that round-trips, always carrying a fractional part.
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// One vertex as `a, b, ..., j,`.
pub fn format_row(vertex: &Vertex) -> String {
    let mut row = vertex
        .as_slice()
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>()
        .join(", ");
    row.push(',');
    row
}

/// The component grouping, e.g. `3, 2, 4, 1`.
pub fn components_line() -> String {
    COMPONENTS
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row per vertex followed by a blank line.
pub fn vertex_block(table: &VertexTable) -> Vec<String> {
    let mut lines: Vec<String> = table.vertices().iter().map(format_row).collect();
    lines.push(String::new());
    lines
}

/// Rows plus the layout summary, for pasting by hand.
pub fn print_report(table: &VertexTable) -> String {
    let mut out = String::new();
    for vertex in table.vertices() {
        out.push_str(&format_row(vertex));
        out.push('\n');
    }
    // Writing into a String cannot fail.
    let _ = writeln!(out, "components: [{}]", components_line());
    let _ = writeln!(out, "vertex count: {}", table.len());
    out
}
