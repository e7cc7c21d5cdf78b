use thiserror::Error;

/// Raised when a sampler cannot be built over a mesh. Both cases are fatal
/// for the affected model entity, there is no fallback point cloud.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SamplerError {
    #[error("mesh has no triangles, cannot sample its surface")]
    EmptyMesh,
    #[error("mesh has zero total surface area, cannot sample its surface")]
    ZeroArea,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error(
        "triangle {triangle} refers to vertex {index}, but the mesh has only {vertex_count} vertices"
    )]
    IndexOutOfBounds {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The asset has not finished loading, the entity cannot be shown or
    /// hidden yet.
    #[error("model \"{0}\" is still loading")]
    NotReady(String),
    /// The external loader reported a fetch or decode failure. The entity
    /// stays failed, retrying is up to the caller.
    #[error("model \"{name}\" failed to load: {reason}")]
    LoadFailed { name: String, reason: String },
    /// `finish_load` may only be called once per entity.
    #[error("model \"{0}\" already finished loading")]
    AlreadyLoaded(String),
    /// The decoded mesh cannot be sampled, see `SamplerError`.
    #[error("model \"{name}\" has an unusable mesh: {source}")]
    InvalidMesh {
        name: String,
        source: SamplerError,
    },
}
