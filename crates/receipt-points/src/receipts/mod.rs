//! Receipt intake, storage contract, and reward-points scoring.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ReceiptSubmission, ValidationError};
pub use repository::{ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{
    DescriptionBonus, PointsOutcome, ScoreBreakdown, ScoringConfig, ScoringEngine, ScoringError,
};
pub use service::{ReceiptService, ReceiptServiceError};
