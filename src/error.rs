// src/error.rs
use thiserror::Error;

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Empty sample set")]
    EmptyInput,

    #[error("Trial generator exceeded {attempts} attempts without a success")]
    GeneratorStalled { attempts: u64 },
}
