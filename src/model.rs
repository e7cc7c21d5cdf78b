use config::ModelConfig;
use error::ModelError;
use mesh::Mesh;
use particles::{ParticleSet, ParticleSetBuilder};
use rand::Rng;
use sampler::SurfaceSampler;
use transition::{AnimationHandle, SceneRegistry, TransitionController, Tweener};

/// Lifecycle state of a model entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// The external loader has not delivered the asset yet.
    Loading,
    /// Loaded and sampled, currently not shown.
    Idle,
    /// Shown, or in the middle of a hide whose animations still run.
    Active,
    /// Loading or sampling failed, permanently unusable.
    Failed,
}

/// One mesh asset's particle representation together with its visibility
/// lifecycle.
///
/// The host drives the entity from the outside: the asset pipeline calls
/// `finish_load`/`fail_load`, user interaction calls `activate` and
/// `deactivate`, and the animation driver's completion callbacks are fed
/// back through `complete`. Scene registry and tween driver are passed in
/// per call, the entity never owns them.
pub struct Model {
    config: ModelConfig,
    state: ModelState,
    mesh: Option<Mesh>,
    particles: Option<ParticleSet>,
    transition: TransitionController,
    attached: bool,
    load_failure: Option<String>,
}

impl Model {
    /// A fresh entity in `Loading` state, waiting for the external asset
    /// pipeline to deliver its mesh.
    pub fn new(config: ModelConfig) -> Model {
        let transition = TransitionController::new(&config.name, config.reveal);

        Model {
            config,
            state: ModelState::Loading,
            mesh: None,
            particles: None,
            transition,
            attached: false,
            load_failure: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The decoded mesh, available once loading has finished.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// The sampled particle cloud, available once loading has finished.
    pub fn particles(&self) -> Option<&ParticleSet> {
        self.particles.as_ref()
    }

    /// Accepts the decoded mesh from the external loader, samples the
    /// particle set once and moves to `Idle`. The set is reused for the
    /// entity's whole lifetime, activations never re-sample.
    ///
    /// When the config marks this model as the default, it activates
    /// immediately. An unsampleable mesh fails the entity permanently.
    pub fn finish_load<R, S, T>(
        &mut self,
        mesh: Mesh,
        rng: &mut R,
        registry: &mut S,
        tweener: &mut T,
    ) -> Result<(), ModelError>
    where
        R: Rng,
        S: SceneRegistry,
        T: Tweener,
    {
        if self.state != ModelState::Loading {
            return Err(ModelError::AlreadyLoaded(self.config.name.clone()));
        }

        let sampler = match SurfaceSampler::build(&mesh) {
            Ok(sampler) => sampler,
            Err(source) => {
                self.state = ModelState::Failed;
                self.load_failure = Some(format!("{}", source));
                return Err(ModelError::InvalidMesh {
                    name: self.config.name.clone(),
                    source,
                });
            }
        };

        let particles = ParticleSetBuilder::new()
            .count(self.config.particle_count)
            .build(&sampler, rng);

        info!(
            "model {}: sampled {} particles over {} triangles",
            self.config.name,
            particles.len(),
            sampler.triangle_count()
        );

        self.mesh = Some(mesh);
        self.particles = Some(particles);
        self.state = ModelState::Idle;

        if self.config.default_active {
            self.activate(registry, tweener)?;
        }

        Ok(())
    }

    /// Marks the entity as failed after the external loader reported a
    /// fetch or decode error. Permanent, retrying is a caller concern.
    pub fn fail_load(&mut self, reason: &str) {
        warn!("model {}: load failed: {}", self.config.name, reason);
        self.state = ModelState::Failed;
        self.load_failure = Some(String::from(reason));
    }

    /// Shows the entity: attaches it to the scene (only if not attached
    /// yet), restarts the scale-in ramp and, on the first activation of a
    /// streak, plays the reveal rotation and backdrop crossfade.
    ///
    /// Activating while a hide is still in flight supersedes the hide, the
    /// stale detach will not fire.
    pub fn activate<S, T>(&mut self, registry: &mut S, tweener: &mut T) -> Result<(), ModelError>
    where
        S: SceneRegistry,
        T: Tweener,
    {
        self.ensure_ready()?;

        if !self.attached {
            registry.attach(&self.config.name);
            self.attached = true;
        }

        self.transition.begin_show(tweener, self.config.background);
        self.state = ModelState::Active;

        Ok(())
    }

    /// Starts hiding the entity. Detachment and the flip to `Idle` only
    /// happen once the hide's scale ramp completes, reported through
    /// `complete`. Hiding an entity that is already idle is a no-op.
    pub fn deactivate<T: Tweener>(&mut self, tweener: &mut T) -> Result<(), ModelError> {
        self.ensure_ready()?;

        if self.state == ModelState::Idle {
            debug!("model {}: deactivate while idle, nothing to hide", self.config.name);
            return Ok(());
        }

        self.transition.begin_hide(tweener);

        Ok(())
    }

    /// Completion entry point, called by the host whenever the external
    /// animation driver reports one of this entity's requests as finished.
    ///
    /// Completions of superseded requests are dropped silently, that is
    /// the interruption guarantee: a hide that was interrupted by a new
    /// activate must not detach the entity afterwards.
    pub fn complete<S: SceneRegistry>(&mut self, handle: &AnimationHandle, registry: &mut S) {
        if !self.transition.is_current(handle) {
            debug!(
                "model {}: dropping stale {:?} completion of generation {}",
                self.config.name, handle.channel, handle.generation
            );
            return;
        }

        if self.transition.settle(handle) {
            if self.attached {
                registry.detach(&self.config.name);
                self.attached = false;
            }
            self.state = ModelState::Idle;
            info!("model {}: hide settled, detached from scene", self.config.name);
        }
    }

    fn ensure_ready(&self) -> Result<(), ModelError> {
        match self.state {
            ModelState::Loading => Err(ModelError::NotReady(self.config.name.clone())),
            ModelState::Failed => Err(ModelError::LoadFailed {
                name: self.config.name.clone(),
                reason: self
                    .load_failure
                    .clone()
                    .unwrap_or_else(|| String::from("unknown")),
            }),
            ModelState::Idle | ModelState::Active => Ok(()),
        }
    }
}
