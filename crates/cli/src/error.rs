// crates/cli/src/error.rs
use keyword_histogram_engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid arguments: {0}")]
    Config(String),
}

impl AppError {
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        match self {
            Self::Engine(e) => e.is_configuration(),
            Self::Config(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_DISCOVERY: u8 = 3;
pub const EXIT_EXTRACTION: u8 = 4;

/// Process exit status for an error, from the first classified cause in its
/// chain.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(app) = cause.downcast_ref::<AppError>() {
            if app.is_configuration() {
                return EXIT_CONFIG;
            }
            if let AppError::Engine(engine) = app {
                return engine_exit_code(engine);
            }
        }
        if let Some(engine) = cause.downcast_ref::<EngineError>() {
            return engine_exit_code(engine);
        }
    }
    EXIT_FAILURE
}

const fn engine_exit_code(err: &EngineError) -> u8 {
    if err.is_configuration() {
        EXIT_CONFIG
    } else if err.is_discovery() {
        EXIT_DISCOVERY
    } else if err.is_extraction() {
        EXIT_EXTRACTION
    } else {
        EXIT_FAILURE
    }
}
