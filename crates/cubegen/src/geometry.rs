use glam::{DVec2, DVec3};

pub const FACE_COUNT: usize = 6;
pub const VERTICES_PER_FACE: usize = 6;
pub const CORNER_COUNT: usize = 8;

const LO: f64 = -0.5;
const HI: f64 = 0.5;

/// Corners of the unit cube centered at the origin.
///
/// The index encodes the sign of each axis as `x << 2 | y << 1 | z`, with a
/// set bit meaning `+0.5`.
pub const CORNERS: [DVec3; CORNER_COUNT] = [
    DVec3::new(LO, LO, LO),
    DVec3::new(LO, LO, HI),
    DVec3::new(LO, HI, LO),
    DVec3::new(LO, HI, HI),
    DVec3::new(HI, LO, LO),
    DVec3::new(HI, LO, HI),
    DVec3::new(HI, HI, LO),
    DVec3::new(HI, HI, HI),
];

/// Corner indices for the two triangles of each face. Entries 0/3 and 2/4
/// are the shared diagonal.
#[rustfmt::skip]
pub const FACE_CORNERS: [[usize; VERTICES_PER_FACE]; FACE_COUNT] = [
    [1, 3, 7, 1, 7, 5], // +Z
    [5, 7, 6, 5, 6, 4], // +X
    [4, 6, 2, 4, 2, 0], // -Z
    [0, 2, 3, 0, 3, 1], // -X
    [3, 2, 6, 3, 6, 7], // +Y
    [0, 1, 5, 0, 5, 4], // -Y
];

/// Per-vertex choice between the low (0) and high (1) inset texel of a cell,
/// shared by every face.
pub const UV_SELECTORS: [[usize; 2]; VERTICES_PER_FACE] =
    [[0, 1], [0, 0], [1, 0], [0, 1], [1, 0], [1, 1]];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("face {0} out of range (expected < {max})", max = FACE_COUNT)]
    FaceOutOfRange(usize),
    #[error("vertex index {0} out of range (expected < {max})", max = VERTICES_PER_FACE)]
    IndexOutOfRange(usize),
}

/// Texture atlas holding one square cell per cube face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasLayout {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub columns: usize,
    /// Distance in texels kept from each cell edge to avoid sampling seams.
    pub inset: f64,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            width: 768.0,
            height: 512.0,
            cell_size: 256.0,
            columns: 3,
            inset: 0.5,
        }
    }
}

impl AtlasLayout {
    /// Top-left texel of the cell assigned to `face`.
    pub fn cell_origin(&self, face: usize) -> DVec2 {
        DVec2::new(
            (face % self.columns) as f64 * self.cell_size,
            (face / self.columns) as f64 * self.cell_size,
        )
    }

    /// Inset texel coordinate for vertex `index` of `face`, in atlas pixels.
    pub fn texel(&self, face: usize, index: usize) -> DVec2 {
        let origin = self.cell_origin(face);
        let far = self.cell_size - self.inset;
        let xs = [origin.x + self.inset, origin.x + far];
        let ys = [origin.y + self.inset, origin.y + far];
        let [sx, sy] = UV_SELECTORS[index];
        DVec2::new(xs[sx], ys[sy])
    }

    /// Texel coordinate normalized by the atlas size.
    pub fn tex_coords(&self, face: usize, index: usize) -> DVec2 {
        let texel = self.texel(face, index);
        DVec2::new(texel.x / self.width, texel.y / self.height)
    }
}

pub fn corner_index(face: usize, index: usize) -> usize {
    FACE_CORNERS[face][index]
}

pub fn corner_position(face: usize, index: usize) -> DVec3 {
    CORNERS[corner_index(face, index)]
}

/// Geometry of one vertex before colors are assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertex {
    pub face: usize,
    pub index: usize,
    pub corner: usize,
    pub position: DVec3,
    pub tex_coords: DVec2,
}

impl FaceVertex {
    /// True when either normalized coordinate falls past the atlas edge.
    pub fn uv_out_of_range(&self) -> bool {
        self.tex_coords.x > 1.0 || self.tex_coords.y > 1.0
    }
}

/// Panics if `face` or `index` is out of range; see [`try_face_vertex`].
pub fn face_vertex(face: usize, index: usize, atlas: &AtlasLayout) -> FaceVertex {
    let corner = corner_index(face, index);
    FaceVertex {
        face,
        index,
        corner,
        position: CORNERS[corner],
        tex_coords: atlas.tex_coords(face, index),
    }
}

pub fn try_face_vertex(
    face: usize,
    index: usize,
    atlas: &AtlasLayout,
) -> Result<FaceVertex, GeometryError> {
    if face >= FACE_COUNT {
        return Err(GeometryError::FaceOutOfRange(face));
    }
    if index >= VERTICES_PER_FACE {
        return Err(GeometryError::IndexOutOfRange(index));
    }
    Ok(face_vertex(face, index, atlas))
}

/// Every face vertex in emission order: face by face, six per face.
pub fn face_vertices(atlas: &AtlasLayout) -> impl Iterator<Item = FaceVertex> + '_ {
    (0..FACE_COUNT).flat_map(move |face| {
        (0..VERTICES_PER_FACE).map(move |index| face_vertex(face, index, atlas))
    })
}
