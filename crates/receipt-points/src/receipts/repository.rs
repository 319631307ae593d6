use super::domain::{Receipt, ReceiptId};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, receipt: Receipt) -> Result<Receipt, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError>;
    /// All stored receipts in insertion order.
    fn list(&self) -> Result<Vec<Receipt>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("receipt already exists")]
    Conflict,
    #[error("receipt not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
