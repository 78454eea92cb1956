// Domain layer - receipt validation, scoring and the submission service.
// No HTTP concerns live here; the api module translates these results.

pub mod validation;
pub mod scoring;
pub mod service;

// Domain error type - no HTTP concerns
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptError {
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to generate a unique ID after {attempts} attempts")]
    IdentifierSpaceExhausted { attempts: u8 },
}

impl ReceiptError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ReceiptError::InvalidReceipt(reason.into())
    }
}

// Re-export commonly used types and functions
pub use validation::validate_receipt;
pub use scoring::{calculate_points, points_breakdown};
pub use service::ReceiptService;
