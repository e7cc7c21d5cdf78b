use mesh::Vec3;
use rand::Rng;
use sampler::SurfaceSampler;

/// Default number of points per particle cloud, dense enough for display
/// meshes of typical complexity.
pub const DEFAULT_PARTICLE_COUNT: usize = 20_000;

/// Flat particle buffers sampled from a mesh surface, laid out for direct
/// upload as GPU vertex attributes.
///
/// Positions are point-major, three components per point. The optional
/// jitter buffer is parallel to the positions and holds one random vector
/// per point with components uniform in [-1, 1], consumed downstream as
/// per-point animation seeds.
///
/// A set is sampled once when a model finishes loading and reused for the
/// entity's whole lifetime, it is never re-sampled on activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet {
    positions: Vec<f32>,
    jitter: Option<Vec<f32>>,
    count: usize,
}

impl ParticleSet {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn jitter(&self) -> Option<&[f32]> {
        self.jitter.as_ref().map(|j| j.as_slice())
    }

    /// Reassembles the position of a single point from the flat buffer.
    ///
    /// Panics if `index` is not less than `len()`.
    pub fn position(&self, index: usize) -> Vec3 {
        let offset = index * 3;
        Vec3::new(
            self.positions[offset],
            self.positions[offset + 1],
            self.positions[offset + 2],
        )
    }
}

pub struct ParticleSetBuilder {
    count: usize,
    jitter: bool,
}

impl ParticleSetBuilder {
    pub fn new() -> ParticleSetBuilder {
        ParticleSetBuilder {
            count: DEFAULT_PARTICLE_COUNT,
            jitter: true,
        }
    }

    pub fn count(mut self, count: usize) -> ParticleSetBuilder {
        self.count = count;
        self
    }

    pub fn jitter(mut self, jitter: bool) -> ParticleSetBuilder {
        self.jitter = jitter;
        self
    }

    /// Draws `count` independent surface samples into a fresh buffer,
    /// interleaving one jitter vector per point when jitter is enabled.
    /// Pure function of the builder settings and the rng stream, so a
    /// seeded rng reproduces the exact same set. A count of zero yields an
    /// empty set.
    pub fn build<R: Rng>(self, sampler: &SurfaceSampler, rng: &mut R) -> ParticleSet {
        let mut positions = Vec::with_capacity(self.count * 3);
        let mut jitter = if self.jitter {
            Some(Vec::with_capacity(self.count * 3))
        } else {
            None
        };

        for _ in 0..self.count {
            let point = sampler.sample(rng);
            positions.push(point.x);
            positions.push(point.y);
            positions.push(point.z);

            if let Some(ref mut jitter) = jitter {
                for _ in 0..3 {
                    jitter.push(rng.gen::<f32>() * 2.0 - 1.0);
                }
            }
        }

        ParticleSet {
            positions,
            jitter,
            count: self.count,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mesh::Mesh;
    use rand::{SeedableRng, XorShiftRng};

    #[test]
    fn test_point_major_layout() {
        let sampler = unit_square_sampler();
        let mut rng = XorShiftRng::from_seed([9, 9, 9, 9]);

        let set = ParticleSetBuilder::new()
            .count(100)
            .build(&sampler, &mut rng);

        assert_eq!(100, set.len());
        assert_eq!(300, set.positions().len());
        assert_eq!(300, set.jitter().unwrap().len());

        for i in 0..set.len() {
            let point = set.position(i);
            assert!(point.x >= 0.0 && point.x <= 1.0);
            assert!(point.y >= 0.0 && point.y <= 1.0);
            assert_relative_eq!(0.0, point.z);
        }
    }

    #[test]
    fn test_jitter_components_stay_in_range() {
        let sampler = unit_square_sampler();
        let mut rng = XorShiftRng::from_seed([3, 1, 4, 1]);

        let set = ParticleSetBuilder::new()
            .count(500)
            .build(&sampler, &mut rng);

        assert!(
            set.jitter()
                .unwrap()
                .iter()
                .all(|&j| j >= -1.0 && j <= 1.0)
        );
    }

    #[test]
    fn test_jitter_can_be_disabled() {
        let sampler = unit_square_sampler();
        let mut rng = XorShiftRng::from_seed([1, 1, 1, 1]);

        let set = ParticleSetBuilder::new()
            .count(10)
            .jitter(false)
            .build(&sampler, &mut rng);

        assert!(set.jitter().is_none());
    }

    #[test]
    fn test_zero_count_builds_an_empty_set() {
        let sampler = unit_square_sampler();
        let mut rng = XorShiftRng::from_seed([8, 6, 7, 5]);

        let set = ParticleSetBuilder::new().count(0).build(&sampler, &mut rng);

        assert!(set.is_empty());
        assert!(set.positions().is_empty());
        assert!(set.jitter().unwrap().is_empty());
    }

    #[test]
    fn test_fixed_seed_reproduces_identical_sets() {
        // Two triangles covering the unit square, 1000 points: the same
        // seed must reproduce the set bit for bit across runs.
        let sampler = unit_square_sampler();

        let mut first_rng = XorShiftRng::from_seed([42, 42, 42, 42]);
        let first = ParticleSetBuilder::new()
            .count(1000)
            .build(&sampler, &mut first_rng);

        let mut second_rng = XorShiftRng::from_seed([42, 42, 42, 42]);
        let second = ParticleSetBuilder::new()
            .count(1000)
            .build(&sampler, &mut second_rng);

        assert_eq!(first, second);
    }

    #[test]
    fn test_default_count() {
        let sampler = unit_square_sampler();
        let mut rng = XorShiftRng::from_seed([2, 4, 6, 8]);

        let set = ParticleSetBuilder::new().build(&sampler, &mut rng);

        assert_eq!(DEFAULT_PARTICLE_COUNT, set.len());
    }

    fn unit_square_sampler() -> SurfaceSampler {
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        ).unwrap();

        SurfaceSampler::build(&mesh).unwrap()
    }
}
