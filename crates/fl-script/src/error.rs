use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script configuration error: {0}")]
    Config(String),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
