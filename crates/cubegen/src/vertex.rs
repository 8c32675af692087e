use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use crate::config::GeneratorConfig;
use crate::geometry::{self, FACE_COUNT, FaceVertex, VERTICES_PER_FACE};

/// Per-vertex component grouping: position, tex_coords, color, blend.
pub const COMPONENTS: [usize; 4] = [3, 2, 4, 1];
pub const COMPONENT_COUNT: usize = 10;
pub const VERTEX_COUNT: usize = FACE_COUNT * VERTICES_PER_FACE;

/// Vertex with position, atlas texture coordinates, color and texture/color blend.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f64; 3],
    pub tex_coords: [f64; 2],
    pub color: [f64; 4],
    pub blend: f64,
}

impl Vertex {
    pub fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

/// A normalized texture coordinate that landed past the atlas edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRangeWarning {
    pub face: usize,
    pub index: usize,
    pub tex_coords: DVec2,
}

impl std::fmt::Display for UvRangeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "face={}, vertex={}, tx={}, ty={}",
            self.face, self.index, self.tex_coords.x, self.tex_coords.y
        )
    }
}

#[derive(Debug, Clone)]
pub struct VertexTable {
    vertices: Vec<Vertex>,
    warnings: Vec<UvRangeWarning>,
}

impl VertexTable {
    pub fn generate(config: &GeneratorConfig) -> Self {
        let mut vertices = Vec::with_capacity(VERTEX_COUNT);
        let mut warnings = Vec::new();

        for face_vertex in geometry::face_vertices(&config.atlas) {
            if face_vertex.uv_out_of_range() {
                let warning = UvRangeWarning {
                    face: face_vertex.face,
                    index: face_vertex.index,
                    tex_coords: face_vertex.tex_coords,
                };
                log::warn!("texture coordinate out of range: {}", warning);
                warnings.push(warning);
            }
            vertices.push(Self::build_vertex(&face_vertex, config));
        }

        log::debug!(
            "generated {} vertices with policy {}",
            vertices.len(),
            config.policy.as_str()
        );

        Self { vertices, warnings }
    }

    fn build_vertex(face_vertex: &FaceVertex, config: &GeneratorConfig) -> Vertex {
        let (color, blend) = config.policy.assign(face_vertex.position);
        Vertex {
            position: face_vertex.position.to_array(),
            tex_coords: face_vertex.tex_coords.to_array(),
            color,
            blend,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn warnings(&self) -> &[UvRangeWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All components of all vertices, in emission order.
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(&self.vertices)
    }
}
