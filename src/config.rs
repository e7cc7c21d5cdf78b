use particles::DEFAULT_PARTICLE_COUNT;
use std::path::PathBuf;

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
}

/// Controls when the one-time reveal rotation and backdrop crossfade play.
///
/// The scale ramp always replays on activation, only reveal and crossfade
/// are subject to this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Once per activation streak: replays only after a hide has settled,
    /// re-activating a still-active entity does not restart it.
    PerStreak,
    /// On every activate call, also while the entity is already active.
    Always,
    /// Suppressed entirely.
    Never,
}

impl Default for RevealPolicy {
    fn default() -> RevealPolicy {
        RevealPolicy::PerStreak
    }
}

/// Per-model options handed in by the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub name: String,
    /// Asset path, resolved and decoded by the external loader.
    pub file: PathBuf,
    /// Activate this model as soon as loading completes.
    pub default_active: bool,
    /// Tint pair for the particle shading downstream.
    pub color_a: Color,
    pub color_b: Color,
    /// Ambient crossfade target for the surrounding page or scene.
    pub background: Color,
    pub reveal: RevealPolicy,
    pub particle_count: usize,
}

pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    pub fn new(name: &str, file: &str) -> ModelConfigBuilder {
        ModelConfigBuilder {
            config: ModelConfig {
                name: String::from(name),
                file: PathBuf::from(file),
                default_active: false,
                color_a: Color::new(1.0, 1.0, 1.0),
                color_b: Color::new(1.0, 1.0, 1.0),
                background: Color::new(0.0, 0.0, 0.0),
                reveal: RevealPolicy::default(),
                particle_count: DEFAULT_PARTICLE_COUNT,
            },
        }
    }

    pub fn default_active(mut self, default_active: bool) -> ModelConfigBuilder {
        self.config.default_active = default_active;
        self
    }

    pub fn color_a(mut self, color_a: Color) -> ModelConfigBuilder {
        self.config.color_a = color_a;
        self
    }

    pub fn color_b(mut self, color_b: Color) -> ModelConfigBuilder {
        self.config.color_b = color_b;
        self
    }

    pub fn background(mut self, background: Color) -> ModelConfigBuilder {
        self.config.background = background;
        self
    }

    pub fn reveal(mut self, reveal: RevealPolicy) -> ModelConfigBuilder {
        self.config.reveal = reveal;
        self
    }

    pub fn particle_count(mut self, particle_count: usize) -> ModelConfigBuilder {
        self.config.particle_count = particle_count;
        self
    }

    pub fn build(self) -> ModelConfig {
        self.config
    }
}
