use crate::model::PlantId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantbookError {
    #[error("Plant not found: {0}")]
    PlantNotFound(PlantId),

    #[error("Plant name is required")]
    NameRequired,

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PlantbookError>;
