use fl_script::ScriptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("driver configuration error: {0}")]
    Config(String),

    #[error("script error: {0}")]
    Script(#[from] ScriptError),
}

pub type DriverResult<T> = Result<T, DriverError>;
