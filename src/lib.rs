extern crate cgmath;
extern crate rand;
extern crate rayon;
extern crate thiserror;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate approx;

mod config;
mod error;
mod mesh;
mod model;
mod particles;
mod sampler;
mod transition;

pub use config::{Color, ModelConfig, ModelConfigBuilder, RevealPolicy};
pub use error::{MeshError, ModelError, SamplerError};
pub use mesh::{Mesh, TupleTriangle, Vec3};
pub use model::{Model, ModelState};
pub use particles::{ParticleSet, ParticleSetBuilder, DEFAULT_PARTICLE_COUNT};
pub use sampler::SurfaceSampler;
pub use transition::{
    Animation, AnimationHandle, Channel, Easing, SceneRegistry, Target, Tweener, REVEAL_OFFSET,
    SCALE_IN_DELAY, TRANSITION_DURATION,
};
