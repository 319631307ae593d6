use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ReceiptSubmission};
use crate::receipts::repository::{ReceiptRepository, RepositoryError};
use crate::receipts::{receipt_router, ReceiptService, ScoringConfig};

pub(super) fn target_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

pub(super) fn corner_market_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
    }
}

pub(super) fn receipt(id: &str, submission: ReceiptSubmission) -> Receipt {
    submission.into_receipt(ReceiptId(id.to_string()))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    receipts: Arc<Mutex<Vec<Receipt>>>,
}

impl ReceiptRepository for MemoryRepository {
    fn insert(&self, receipt: Receipt) -> Result<Receipt, RepositoryError> {
        let mut guard = self.receipts.lock().expect("lock");
        if guard.iter().any(|stored| stored.id == receipt.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(receipt.clone());
        Ok(receipt)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError> {
        let guard = self.receipts.lock().expect("lock");
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Receipt>, RepositoryError> {
        Ok(self.receipts.lock().expect("lock").clone())
    }
}

impl MemoryRepository {
    /// Seeds a receipt directly, bypassing intake validation.
    pub(super) fn seed(&self, receipt: Receipt) {
        self.receipts.lock().expect("lock").push(receipt);
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _receipt: Receipt) -> Result<Receipt, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Receipt>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReceiptService::new(repository.clone(), ScoringConfig::default());
    (service, repository)
}

pub(super) fn router_with_service(service: ReceiptService<MemoryRepository>) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
