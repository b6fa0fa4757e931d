//! Error types for the simpledoc library.

use std::io;
use thiserror::Error;

/// Result type alias for simpledoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document simplification.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document model JSON could not be deserialized.
    #[error("Invalid document model: {0}")]
    Model(String),

    /// The requested recipe name is not registered.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// Error serializing the simplified document.
    #[error("Rendering error: {0}")]
    Render(String),
}
