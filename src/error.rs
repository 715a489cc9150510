use compute::error::ComputeError;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures that abort a report request
#[derive(Error, Debug)]
pub enum ReportError {
    /// Opening or closing the per-request transaction failed
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// One of the report lookups failed
    #[error("Report computation error: {0}")]
    Compute(#[from] ComputeError),

    /// Chart data could not be serialized for the page
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}
