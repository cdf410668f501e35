use thiserror::Error;

use tradelens_core::{IngestError, ValidationError};
use tradelens_warehouse::WarehouseError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Ingest(_) => 3,
            Self::Warehouse(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Command(_) | Self::Csv(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
