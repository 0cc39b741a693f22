use thiserror::Error;

/// Top-level error type for route import.
#[derive(Debug, Error)]
pub enum RouteImportError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors raised while validating a route record.
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("path coordinate lengths differ: x = {x}, y = {y}, z = {z}")]
    LengthMismatch { x: usize, y: usize, z: usize },

    #[error("malformed world scale {input:?}: {reason}")]
    MalformedScale { input: String, reason: String },

    #[error("route path has no points")]
    EmptyPath,
}

/// Errors from reading or parsing the source document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed route document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read route document: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the scene store.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("object is already linked to this collection")]
    AlreadyLinked,

    #[error("object is not a curve")]
    NotACurve,
}

/// Errors related to import-menu registration and dispatch.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("operator `{0}` is already registered")]
    AlreadyRegistered(String),

    #[error("operator `{0}` is not registered")]
    NotRegistered(String),

    #[error("no importer handles extension {extension:?}")]
    UnsupportedFormat { extension: String },
}

/// Convenience type alias for results using [`RouteImportError`].
pub type Result<T> = std::result::Result<T, RouteImportError>;
