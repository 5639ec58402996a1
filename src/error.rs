use miette::Diagnostic;
use thiserror::Error;

/// Main error type for devsprite operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(devsprite::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(devsprite::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(devsprite::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(devsprite::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Font error with {path}: {message}")]
    #[diagnostic(code(devsprite::font))]
    Font {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(devsprite::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
