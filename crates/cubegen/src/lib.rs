pub mod attributes;
pub mod config;
pub mod format;
pub mod geometry;
pub mod patch;
pub mod section;
pub mod vertex;

pub use attributes::{AttributePolicy, Color};
pub use config::{DEFAULT_MARKER_PREFIX, GeneratorConfig, PatchOptions};
pub use format::{components_line, format_row, format_value, print_report, vertex_block};
pub use geometry::{
    AtlasLayout, CORNER_COUNT, CORNERS, FACE_CORNERS, FACE_COUNT, FaceVertex, GeometryError,
    UV_SELECTORS, VERTICES_PER_FACE, face_vertex, try_face_vertex,
};
pub use patch::{PatchError, PatchOutcome, patch_file};
pub use section::{
    COMPONENTS_SECTION, Section, VERTICES_SECTION, generated_sections, render_patched,
    replace_sections, strip_sections,
};
pub use vertex::{COMPONENT_COUNT, COMPONENTS, UvRangeWarning, VERTEX_COUNT, Vertex, VertexTable};
