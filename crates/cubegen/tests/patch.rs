use std::fs;

use cubegen::{
    AttributePolicy, GeneratorConfig, PatchError, PatchOptions, VertexTable, patch_file,
};
use tempfile::tempdir;

const ASSET: &str = "\
# textured cube
### vertex shader
#version 430 core
layout(location = 0) in vec3 pos;
### vertices
0.0, 0.0,

### fragment shader
void main() {}
";

fn white_split_table() -> VertexTable {
    VertexTable::generate(&GeneratorConfig::with_policy(AttributePolicy::WhiteSplit))
}

#[test]
fn test_patch_rewrites_generated_sections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.txt");
    fs::write(&path, ASSET).unwrap();

    let outcome = patch_file(&path, &PatchOptions::default(), &white_split_table()).unwrap();
    assert!(outcome.changed);
    assert!(outcome.written);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, outcome.content);

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        &lines[..6],
        &[
            "# textured cube",
            "### vertex shader",
            "#version 430 core",
            "layout(location = 0) in vec3 pos;",
            "### fragment shader",
            "void main() {}",
        ]
    );
    assert_eq!(&lines[6..9], &["### vertex components", "3, 2, 4, 1", ""]);
    assert_eq!(lines[9], "### vertices");
    assert_eq!(lines.len(), 10 + 36 + 1);
    assert_eq!(lines[10], "-0.5, -0.5, 0.5, 0.0006510416666666666, 0.4990234375, 1.0, 1.0, 1.0, 1.0, 0.0,");
    assert_eq!(lines.last(), Some(&""));
}

#[test]
fn test_patch_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.txt");
    fs::write(&path, ASSET).unwrap();
    let table = white_split_table();

    patch_file(&path, &PatchOptions::default(), &table).unwrap();
    let first = fs::read(&path).unwrap();

    let outcome = patch_file(&path, &PatchOptions::default(), &table).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert!(!outcome.changed);
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.txt");
    fs::write(&path, ASSET).unwrap();

    let options = PatchOptions {
        dry_run: true,
        ..Default::default()
    };
    let outcome = patch_file(&path, &options, &white_split_table()).unwrap();

    assert!(outcome.changed);
    assert!(!outcome.written);
    assert!(outcome.content.contains("### vertex components\n3, 2, 4, 1\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), ASSET);
}

#[test]
fn test_missing_file_fails_to_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = patch_file(&path, &PatchOptions::default(), &white_split_table()).unwrap_err();

    assert!(matches!(err, PatchError::Read { .. }));
    assert!(err.to_string().contains("missing.txt"));
    assert!(!path.exists());
}

#[test]
fn test_shipped_asset_is_current() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/cube_vertices.txt");
    let content = fs::read_to_string(path).unwrap();

    let patched = cubegen::render_patched(
        &content,
        cubegen::DEFAULT_MARKER_PREFIX,
        &white_split_table(),
    );

    assert_eq!(patched, content);
}
