use miette::Diagnostic;
use thiserror::Error;

/// Main error type for retint operations
#[derive(Error, Diagnostic, Debug)]
pub enum RetintError {
    #[error("IO error: {0}")]
    #[diagnostic(code(retint::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(retint::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// Source bytes are not a valid raster image. Fails the single
    /// sprite without aborting the batch.
    #[error("Failed to decode {name}: {message}")]
    #[diagnostic(code(retint::decode))]
    Decode { name: String, message: String },

    /// Output could not be encoded or written. Fails the single sprite.
    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(retint::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(retint::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(retint::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RetintError>;
