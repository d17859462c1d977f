use thiserror::Error;

/// Error types for the render CLI
#[derive(Error, Debug)]
pub enum RenderError {
    /// The snapshot file could not be read
    #[error("Failed to read snapshot '{path}': {source}")]
    ReadSnapshot {
        path: String,
        source: std::io::Error,
    },

    /// The snapshot is not a valid analytics snapshot
    #[error("Invalid snapshot JSON in '{path}': {source}")]
    ParseSnapshot {
        path: String,
        source: serde_json::Error,
    },

    /// The rendered output could not be written
    #[error("Failed to write output '{path}': {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    /// A snapshot could not be serialized
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
