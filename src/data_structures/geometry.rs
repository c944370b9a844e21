//! The lessons' vertex data as flat component arrays.
//!
//! Positions and colors use three components per vertex, UVs two. The cube
//! is deliberately unindexed: six faces of two triangles each, 36 vertices,
//! exactly as the lessons spell it out.

/// Clip-space triangle for the first lesson (three points on the z=0 plane).
#[rustfmt::skip]
pub const TRIANGLE_POSITIONS: [f32; 9] = [
    0.0, -1.0, 0.0,
    0.0, 1.0, 0.0,
    1.0, -1.0, 0.0,
];

/// Triangle for the vertex-attribute lesson.
#[rustfmt::skip]
pub const COLOR_TRIANGLE_POSITIONS: [f32; 9] = [
    0.0, 1.0, 0.0,
    1.0, -1.0, 0.0,
    -1.0, -1.0, 0.0,
];

/// One primary color per triangle vertex.
#[rustfmt::skip]
pub const COLOR_TRIANGLE_COLORS: [f32; 9] = [
    1.0, 0.0, 0.0, // V1.color
    0.0, 1.0, 0.0, // V2.color
    0.0, 0.0, 1.0, // V3.color
];

pub const CUBE_FACES: usize = 6;
pub const VERTICES_PER_FACE: usize = 6;

/// Unit cube centered on the origin, 36 vertices.
#[rustfmt::skip]
pub const CUBE_POSITIONS: [f32; 108] = [
    // Front
    0.5, 0.5, 0.5,
    0.5, -0.5, 0.5,
    -0.5, 0.5, 0.5,
    -0.5, 0.5, 0.5,
    0.5, -0.5, 0.5,
    -0.5, -0.5, 0.5,

    // Left
    -0.5, 0.5, 0.5,
    -0.5, -0.5, 0.5,
    -0.5, 0.5, -0.5,
    -0.5, 0.5, -0.5,
    -0.5, -0.5, 0.5,
    -0.5, -0.5, -0.5,

    // Back
    -0.5, 0.5, -0.5,
    -0.5, -0.5, -0.5,
    0.5, 0.5, -0.5,
    0.5, 0.5, -0.5,
    -0.5, -0.5, -0.5,
    0.5, -0.5, -0.5,

    // Right
    0.5, 0.5, -0.5,
    0.5, -0.5, -0.5,
    0.5, 0.5, 0.5,
    0.5, 0.5, 0.5,
    0.5, -0.5, 0.5,
    0.5, -0.5, -0.5,

    // Top
    0.5, 0.5, 0.5,
    0.5, 0.5, -0.5,
    -0.5, 0.5, 0.5,
    -0.5, 0.5, 0.5,
    0.5, 0.5, -0.5,
    -0.5, 0.5, -0.5,

    // Bottom
    0.5, -0.5, 0.5,
    0.5, -0.5, -0.5,
    -0.5, -0.5, 0.5,
    -0.5, -0.5, 0.5,
    0.5, -0.5, -0.5,
    -0.5, -0.5, -0.5,
];

/// UV pattern for one quad face, matching the triangle winding above.
#[rustfmt::skip]
const FACE_UVS: [f32; 12] = [
    1.0, 1.0, // top right
    1.0, 0.0, // bottom right
    0.0, 1.0, // top left

    0.0, 1.0, // top left
    1.0, 0.0, // bottom right
    0.0, 0.0, // bottom left
];

/// The face UV pattern repeated for all six cube faces.
pub fn cube_uvs() -> Vec<f32> {
    FACE_UVS
        .iter()
        .copied()
        .cycle()
        .take(FACE_UVS.len() * CUBE_FACES)
        .collect()
}

/// Expand one color per face to all six vertices of that face.
pub fn face_colors(colors: &[[f32; 3]; CUBE_FACES]) -> Vec<f32> {
    let mut data = Vec::with_capacity(CUBE_FACES * VERTICES_PER_FACE * 3);
    for color in colors {
        for _ in 0..VERTICES_PER_FACE {
            data.extend_from_slice(color);
        }
    }
    data
}

/// Six random face colors drawn from `rng`, expanded per vertex.
pub fn random_face_colors<R: rand::Rng>(rng: &mut R) -> Vec<f32> {
    let colors: [[f32; 3]; CUBE_FACES] = core::array::from_fn(|_| {
        [
            rng.gen_range(0.0f32..1.0),
            rng.gen_range(0.0f32..1.0),
            rng.gen_range(0.0f32..1.0),
        ]
    });
    face_colors(&colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn cube_has_six_vertices_per_face() {
        assert_eq!(CUBE_POSITIONS.len() / 3, CUBE_FACES * VERTICES_PER_FACE);
    }

    #[test]
    fn cube_uvs_repeat_the_face_pattern() {
        let uvs = cube_uvs();
        assert_eq!(uvs.len(), FACE_UVS.len() * CUBE_FACES);
        for face in 0..CUBE_FACES {
            assert_eq!(uvs[face * FACE_UVS.len()..(face + 1) * FACE_UVS.len()], FACE_UVS);
        }
    }

    #[test]
    fn face_colors_are_shared_by_all_face_vertices() {
        let palette = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
        ];
        let colors = face_colors(&palette);
        assert_eq!(colors.len(), CUBE_POSITIONS.len());
        for (face, expected) in palette.iter().enumerate() {
            for vertex in 0..VERTICES_PER_FACE {
                let at = (face * VERTICES_PER_FACE + vertex) * 3;
                assert_eq!(&colors[at..at + 3], expected);
            }
        }
    }

    #[test]
    fn random_face_colors_stay_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = random_face_colors(&mut rng);
        assert_eq!(colors.len(), CUBE_POSITIONS.len());
        assert!(colors.iter().all(|c| (0.0..1.0).contains(c)));
    }
}
