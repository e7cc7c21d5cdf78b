use error::SamplerError;
use mesh::{Mesh, TupleTriangle, Vec3};
use rand::Rng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Draws random points on the surface of a mesh, uniformly distributed by
/// surface area. Selection is weighted with a cumulative area table over
/// all triangles, so large triangles receive proportionally more points
/// than small ones, regardless of how the surface is tessellated. This is
/// what distinguishes the sampler from naive per-triangle-uniform picking.
pub struct SurfaceSampler {
    triangles: Vec<TupleTriangle>,
    /// Running sum of triangle areas, parallel to `triangles`.
    /// Non-decreasing, degenerate triangles form runs of equal values.
    cumulative_areas: Vec<f32>,
    total_area: f32,
}

impl SurfaceSampler {
    /// Precomputes the cumulative area table in O(n) over the triangle
    /// count. Fails if the mesh offers no surface to sample, that is,
    /// when it has no triangles or all of them are degenerate.
    pub fn build(mesh: &Mesh) -> Result<SurfaceSampler, SamplerError> {
        let triangles: Vec<TupleTriangle> = mesh.triangles().collect();

        if triangles.is_empty() {
            return Err(SamplerError::EmptyMesh);
        }

        let areas: Vec<f32> = triangles.par_iter().map(|tri| tri.area()).collect();

        let mut cumulative_areas = Vec::with_capacity(areas.len());
        let mut total_area = 0.0_f32;
        for area in areas {
            total_area += area;
            cumulative_areas.push(total_area);
        }

        if total_area <= 0.0 {
            return Err(SamplerError::ZeroArea);
        }

        debug!(
            "built surface sampler over {} triangles, total area {}",
            triangles.len(),
            total_area
        );

        Ok(SurfaceSampler {
            triangles,
            cumulative_areas,
            total_area,
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn total_area(&self) -> f32 {
        self.total_area
    }

    /// Draws one point on the surface in O(log n): picks a triangle by
    /// searching the cumulative area table with a uniform random value in
    /// [0, total_area), then maps two more uniform randoms into the
    /// triangle with the square-to-triangle fold, reflecting `(u, v)` to
    /// `(1-u, 1-v)` whenever `u + v > 1`.
    ///
    /// All randomness comes from the caller-supplied rng, so a seeded rng
    /// reproduces the exact same point sequence.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let tri = self.select_triangle(rng.gen::<f32>() * self.total_area);
        let (u, v) = fold(rng.gen::<f32>(), rng.gen::<f32>());

        tri.interpolate(u, v)
    }

    /// First triangle whose cumulative area strictly exceeds `r`.
    /// Degenerate triangles occupy zero-width intervals in the table and
    /// can therefore never be selected.
    fn select_triangle(&self, r: f32) -> &TupleTriangle {
        let mut idx = self
            .cumulative_areas
            .binary_search_by(|cumulative| {
                if *cumulative <= r {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            })
            .unwrap_err();

        if idx >= self.triangles.len() {
            // Rounding in r = random * total_area can reach total_area
            // itself. Walk back to the last area-contributing triangle.
            idx = self.triangles.len() - 1;
            while idx > 0 && self.cumulative_areas[idx] <= self.cumulative_areas[idx - 1] {
                idx -= 1;
            }
        }

        &self.triangles[idx]
    }
}

/// Maps a point of the unit square into the lower-left barycentric
/// triangle by reflecting `(u, v)` to `(1 - u, 1 - v)` whenever
/// `u + v > 1`. Keeps the distribution uniform since the reflection is
/// area-preserving.
fn fold(u: f32, v: f32) -> (f32, f32) {
    if u + v > 1.0 {
        (1.0 - u, 1.0 - v)
    } else {
        (u, v)
    }
}
