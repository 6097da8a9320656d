//! Error types for the frame generation engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Node {0} not found in model")]
    NodeNotFound(u32),

    #[error("Material {0} not found in catalog")]
    MaterialNotFound(u32),

    #[error("Section {0} not found in catalog")]
    SectionNotFound(u32),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Model is unstable: {0}")]
    Unstable(String),

    #[error("Singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
