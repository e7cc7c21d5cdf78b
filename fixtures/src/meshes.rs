use surface_particles::{Mesh, Vec3};

/// Regular grid over the unit square with `resolution`² cells, two
/// triangles each. A resolution of 100 yields 20000 triangles, in the
/// ballpark of a typical decoded display mesh.
pub fn tessellated_quad(resolution: usize) -> Mesh {
    let step = 1.0 / resolution as f32;

    let mut positions = Vec::with_capacity((resolution + 1) * (resolution + 1));
    for y in 0..(resolution + 1) {
        for x in 0..(resolution + 1) {
            positions.push(Vec3::new(x as f32 * step, y as f32 * step, 0.0));
        }
    }

    let row_stride = (resolution + 1) as u32;
    let mut indices = Vec::with_capacity(resolution * resolution * 2);
    for y in 0..resolution as u32 {
        for x in 0..resolution as u32 {
            let corner = y * row_stride + x;
            indices.push([corner, corner + 1, corner + row_stride + 1]);
            indices.push([corner, corner + row_stride + 1, corner + row_stride]);
        }
    }

    Mesh::new(positions, indices).unwrap()
}
