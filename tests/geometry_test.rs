use wgpu_primer::data_structures::{geometry, mesh};

#[test]
fn cube_vertex_count_matches_flattened_length() {
    let colors = geometry::face_colors(&[[1.0, 0.0, 0.0]; geometry::CUBE_FACES]);
    let vertices = mesh::color_vertices(&geometry::CUBE_POSITIONS, &colors).unwrap();
    assert_eq!(
        vertices.len(),
        geometry::CUBE_POSITIONS.len() / mesh::POSITION_COMPONENTS
    );
    assert_eq!(vertices.len(), 36);
}

#[test]
fn cube_uvs_cover_every_vertex() {
    let uvs = geometry::cube_uvs();
    assert_eq!(
        uvs.len() / mesh::UV_COMPONENTS,
        geometry::CUBE_POSITIONS.len() / mesh::POSITION_COMPONENTS
    );
    let vertices = mesh::tex_vertices(&geometry::CUBE_POSITIONS, &uvs).unwrap();
    assert_eq!(vertices.len(), 36);
}

#[test]
fn triangle_lessons_draw_exactly_three_vertices() {
    let plain = mesh::plain_vertices(&geometry::TRIANGLE_POSITIONS).unwrap();
    assert_eq!(plain.len(), 3);

    let colored = mesh::color_vertices(
        &geometry::COLOR_TRIANGLE_POSITIONS,
        &geometry::COLOR_TRIANGLE_COLORS,
    )
    .unwrap();
    assert_eq!(colored.len(), 3);
}

#[test]
fn cube_positions_stay_on_the_unit_cube() {
    assert!(geometry::CUBE_POSITIONS.iter().all(|c| c.abs() == 0.5));
}

#[test]
fn mismatched_cube_attributes_are_rejected() {
    // One face of colors for six faces of positions.
    let short = geometry::face_colors(&[[1.0, 0.0, 0.0]; geometry::CUBE_FACES]);
    let short = &short[..geometry::VERTICES_PER_FACE * 3];
    assert!(mesh::color_vertices(&geometry::CUBE_POSITIONS, short).is_err());
}
