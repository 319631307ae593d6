use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{Receipt, ReceiptId, ReceiptRepository, RepositoryError};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime receipt store. Receipts keep their insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReceiptRepository {
    receipts: Arc<Mutex<Vec<Receipt>>>,
}

impl InMemoryReceiptRepository {
    fn guard(&self) -> Result<MutexGuard<'_, Vec<Receipt>>, RepositoryError> {
        self.receipts
            .lock()
            .map_err(|_| RepositoryError::Unavailable("receipt store mutex poisoned".to_string()))
    }
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn insert(&self, receipt: Receipt) -> Result<Receipt, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.iter().any(|stored| stored.id == receipt.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(receipt.clone());
        Ok(receipt)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Receipt>, RepositoryError> {
        Ok(self.guard()?.clone())
    }
}
