use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::domain::{Receipt, ReceiptId, ReceiptSubmission, ValidationError};
use super::repository::{ReceiptRepository, RepositoryError};
use super::scoring::{PointsOutcome, ScoringConfig, ScoringEngine, ScoringError};

/// Service composing the receipt store with the scoring engine.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

fn next_receipt_id() -> ReceiptId {
    ReceiptId(Uuid::new_v4().to_string())
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    /// Validate a submission, assign it a fresh identifier, and store it.
    pub fn process(&self, submission: ReceiptSubmission) -> Result<Receipt, ReceiptServiceError> {
        submission.validate()?;
        let receipt = submission.into_receipt(next_receipt_id());
        let stored = self.repository.insert(receipt)?;
        info!(receipt_id = %stored.id, items = stored.items.len(), "receipt stored");
        Ok(stored)
    }

    pub fn get(&self, id: &ReceiptId) -> Result<Receipt, ReceiptServiceError> {
        let receipt = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(receipt)
    }

    pub fn list(&self) -> Result<Vec<Receipt>, ReceiptServiceError> {
        Ok(self.repository.list()?)
    }

    /// Score a stored receipt and log its breakdown.
    pub fn points(&self, id: &ReceiptId) -> Result<PointsOutcome, ReceiptServiceError> {
        let receipt = self.get(id)?;

        let outcome = match self.engine.score(&receipt) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(receipt_id = %id, %error, "receipt could not be scored");
                return Err(error.into());
            }
        };

        for line in self.engine.breakdown_lines(&outcome) {
            info!(receipt_id = %id, "{line}");
        }

        Ok(outcome)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
