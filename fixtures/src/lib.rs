/// Contains functionality to create representative test meshes.
///
/// Provides shared functionality for benchmarks.
extern crate surface_particles;

pub mod meshes;
