#![feature(test)]

extern crate fixtures;
extern crate rand;
extern crate surface_particles;
extern crate test;

use fixtures::meshes::tessellated_quad;
use surface_particles::{ParticleSetBuilder, SurfaceSampler};

#[bench]
fn build_sampler_over_20_000_triangles(b: &mut test::Bencher) {
    let mesh = tessellated_quad(100);

    b.iter(|| SurfaceSampler::build(&mesh).unwrap().triangle_count())
}

#[bench]
fn sample_20_000_points(b: &mut test::Bencher) {
    let mesh = tessellated_quad(100);
    let sampler = SurfaceSampler::build(&mesh).unwrap();
    let mut rng = rand::thread_rng();

    b.iter(|| {
        ParticleSetBuilder::new()
            .count(20_000)
            .build(&sampler, &mut rng)
            .len()
    })
}

#[bench]
fn sample_20_000_points_without_jitter(b: &mut test::Bencher) {
    let mesh = tessellated_quad(100);
    let sampler = SurfaceSampler::build(&mesh).unwrap();
    let mut rng = rand::thread_rng();

    b.iter(|| {
        ParticleSetBuilder::new()
            .count(20_000)
            .jitter(false)
            .build(&sampler, &mut rng)
            .len()
    })
}
