//! Named sections inside a line-oriented text file.
//!
//! A section starts at a marker line `<prefix> <name>` and runs until the next
//! marker line or the end of the file. There is no end marker.

use crate::format;
use crate::vertex::VertexTable;

pub const COMPONENTS_SECTION: &str = "vertex components";
pub const VERTICES_SECTION: &str = "vertices";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub body: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Section name carried by `line`, if it is a marker line.
pub fn parse_marker<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix).map(str::trim)
}

pub fn marker_line(prefix: &str, name: &str) -> String {
    format!("{prefix} {name}")
}

/// Drops every section whose name is in `names`. All other lines, including
/// those before the first marker, are kept verbatim and in order.
pub fn strip_sections<S: AsRef<str>>(lines: &[S], prefix: &str, names: &[&str]) -> Vec<String> {
    let mut kept = Vec::with_capacity(lines.len());
    let mut skipping = false;

    for line in lines {
        let line = line.as_ref();
        if let Some(name) = parse_marker(line, prefix) {
            skipping = names.contains(&name);
        }
        if !skipping {
            kept.push(line.to_string());
        }
    }

    kept
}

/// Removes the sections named in `sections` and appends fresh copies of them,
/// in the given order, after the remaining lines.
pub fn replace_sections<S: AsRef<str>>(
    lines: &[S],
    prefix: &str,
    sections: &[Section],
) -> Vec<String> {
    let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    let mut out = strip_sections(lines, prefix, &names);

    for section in sections {
        out.push(marker_line(prefix, &section.name));
        out.extend(section.body.iter().cloned());
    }

    out
}

/// The component layout and vertex rows as two sections.
pub fn generated_sections(table: &VertexTable) -> [Section; 2] {
    [
        Section::new(
            COMPONENTS_SECTION,
            vec![format::components_line(), String::new()],
        ),
        Section::new(VERTICES_SECTION, format::vertex_block(table)),
    ]
}

/// Joins lines with a newline after each one.
pub fn join_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Applies the generated sections to `content` and returns the new file text.
pub fn render_patched(content: &str, prefix: &str, table: &VertexTable) -> String {
    let lines: Vec<&str> = content.lines().collect();
    join_lines(&replace_sections(&lines, prefix, &generated_sections(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MARKER_PREFIX, GeneratorConfig};

    const P: &str = DEFAULT_MARKER_PREFIX;

    #[test]
    fn marker_requires_prefix() {
        assert_eq!(parse_marker("### vertices", P), Some("vertices"));
        assert_eq!(parse_marker("###   vertex components ", P), Some("vertex components"));
        assert_eq!(parse_marker("## vertices", P), None);
        assert_eq!(parse_marker(" ### vertices", P), None);
    }

    #[test]
    fn strip_keeps_foreign_sections_in_order() {
        let lines = [
            "header",
            "### shader",
            "void main() {}",
            "### vertices",
            "1.0, 2.0,",
            "",
            "### indices",
            "0, 1, 2",
            "### vertex components",
            "3, 2, 4, 1",
        ];
        let kept = strip_sections(&lines, P, &[COMPONENTS_SECTION, VERTICES_SECTION]);
        assert_eq!(
            kept,
            vec!["header", "### shader", "void main() {}", "### indices", "0, 1, 2"]
        );
    }

    #[test]
    fn replace_appends_sections_after_kept_lines() {
        let lines = ["intro", "### old", "x", "### vertices", "stale"];
        let sections = [
            Section::new("vertex components", vec!["3, 2, 4, 1".into(), String::new()]),
            Section::new("vertices", vec!["row,".into(), String::new()]),
        ];
        let out = replace_sections(&lines, P, &sections);
        assert_eq!(
            out,
            vec![
                "intro",
                "### old",
                "x",
                "### vertex components",
                "3, 2, 4, 1",
                "",
                "### vertices",
                "row,",
                "",
            ]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let table = VertexTable::generate(&GeneratorConfig::default());
        let original = "# cube asset\n### shader\nmain\n### vertices\nold,\n";

        let once = render_patched(original, P, &table);
        let twice = render_patched(&once, P, &table);

        assert_eq!(once, twice);
        assert!(once.starts_with("# cube asset\n### shader\nmain\n### vertex components\n3, 2, 4, 1\n\n### vertices\n"));
        assert!(once.ends_with(",\n\n"));
        assert!(!once.contains("old,"));
    }

    #[test]
    fn custom_prefix_ignores_default_markers() {
        let table = VertexTable::generate(&GeneratorConfig::default());
        let patched = render_patched("### vertices\nkeep\n", "//!", &table);

        assert!(patched.starts_with("### vertices\nkeep\n//! vertex components\n"));
    }
}
