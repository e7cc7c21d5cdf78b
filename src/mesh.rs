use cgmath::prelude::*;
use cgmath::Vector3;
use error::MeshError;

pub type Vec3 = Vector3<f32>;

/// Triangle defined by its three corner positions, CCW winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TupleTriangle(pub Vec3, pub Vec3, pub Vec3);

impl TupleTriangle {
    /// Surface area, half the magnitude of the edge cross product.
    /// Zero for degenerate triangles with collinear or coincident corners.
    pub fn area(&self) -> f32 {
        let TupleTriangle(a, b, c) = *self;
        0.5 * (b - a).cross(c - a).magnitude()
    }

    pub fn centroid(&self) -> Vec3 {
        let TupleTriangle(a, b, c) = *self;
        (a + b + c) / 3.0
    }

    /// Point at barycentric coordinates `(u, v)` along the edges `B - A`
    /// and `C - A`, that is `A + u*(B-A) + v*(C-A)`.
    pub fn interpolate(&self, u: f32, v: f32) -> Vec3 {
        let TupleTriangle(a, b, c) = *self;
        a + u * (b - a) + v * (c - a)
    }

    /// Barycentric coordinates `(u, v)` of a point in the triangle plane,
    /// the inverse of `interpolate`. The point lies inside the triangle
    /// exactly if `u >= 0`, `v >= 0` and `u + v <= 1`.
    pub fn barycentric_at(&self, point: Vec3) -> (f32, f32) {
        let TupleTriangle(a, b, c) = *self;
        let ab = b - a;
        let ac = c - a;
        let ap = point - a;

        let d00 = ab.dot(ab);
        let d01 = ab.dot(ac);
        let d11 = ac.dot(ac);
        let d20 = ap.dot(ab);
        let d21 = ap.dot(ac);

        let denominator = d00 * d11 - d01 * d01;
        let u = (d11 * d20 - d01 * d21) / denominator;
        let v = (d00 * d21 - d01 * d20) / denominator;

        (u, v)
    }
}

/// Triangulated mesh as handed over by the external asset pipeline:
/// vertex positions plus triangle indices, immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    material: Option<String>,
}

impl Mesh {
    /// Builds a mesh from decoded vertex positions and triangle indices.
    /// Every index must refer to an existing vertex.
    pub fn new(positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Result<Mesh, MeshError> {
        for (triangle, corner_indices) in indices.iter().enumerate() {
            for &index in corner_indices.iter() {
                if index as usize >= positions.len() {
                    return Err(MeshError::IndexOutOfBounds {
                        triangle,
                        index,
                        vertex_count: positions.len(),
                    });
                }
            }
        }

        Ok(Mesh {
            positions,
            indices,
            material: None,
        })
    }

    /// Attaches the name of the material slot the source asset referenced.
    /// Stored for downstream shading setup, uninterpreted by this crate.
    pub fn with_material(mut self, material: &str) -> Mesh {
        self.material = Some(String::from(material));
        self
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_ref().map(|m| m.as_str())
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangles<'a>(&'a self) -> impl Iterator<Item = TupleTriangle> + 'a {
        self.indices.iter().map(move |&[i0, i1, i2]| {
            TupleTriangle(
                self.positions[i0 as usize],
                self.positions[i1 as usize],
                self.positions[i2 as usize],
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_right_triangle_area() {
        let tri = TupleTriangle(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        assert_relative_eq!(0.5, tri.area());
    }

    #[test]
    fn test_degenerate_triangle_has_zero_area() {
        let collinear = TupleTriangle(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
        );

        assert_relative_eq!(0.0, collinear.area());
    }

    #[test]
    fn test_barycentric_inverts_interpolation() {
        let tri = TupleTriangle(
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, 0.0, 1.0),
            Vec3::new(0.5, 0.0, -2.0),
        );

        let point = tri.interpolate(0.25, 0.5);
        let (u, v) = tri.barycentric_at(point);

        assert_relative_eq!(0.25, u, epsilon = 0.0001);
        assert_relative_eq!(0.5, v, epsilon = 0.0001);

        // The centroid sits at equal barycentric weights
        let (u, v) = tri.barycentric_at(tri.centroid());
        assert_relative_eq!(1.0 / 3.0, u, epsilon = 0.0001);
        assert_relative_eq!(1.0 / 3.0, v, epsilon = 0.0001);
    }

    #[test]
    fn test_mesh_yields_indexed_triangles() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        ).unwrap();

        assert_eq!(2, mesh.triangle_count());

        let total_area: f32 = mesh.triangles().map(|t| t.area()).sum();
        assert_relative_eq!(1.0, total_area);
    }

    #[test]
    fn test_out_of_bounds_index_is_rejected() {
        let result = Mesh::new(
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)],
            vec![[0, 1, 2]],
        );

        assert_eq!(
            Err(MeshError::IndexOutOfBounds {
                triangle: 0,
                index: 2,
                vertex_count: 2,
            }),
            result
        );
    }

    #[test]
    fn test_material_slot_is_carried_through() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        ).unwrap()
            .with_material("wireframe-red");

        assert_eq!(Some("wireframe-red"), mesh.material());
    }
}
