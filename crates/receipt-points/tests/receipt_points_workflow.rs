//! End-to-end scenarios for receipt intake and scoring through the public service facade.

mod common {
    use std::sync::{Arc, Mutex};

    use receipt_points::receipts::{
        Item, Receipt, ReceiptId, ReceiptRepository, ReceiptService, ReceiptSubmission,
        RepositoryError, ScoringConfig,
    };

    #[derive(Default)]
    pub(super) struct VecRepository {
        receipts: Mutex<Vec<Receipt>>,
    }

    impl ReceiptRepository for VecRepository {
        fn insert(&self, receipt: Receipt) -> Result<Receipt, RepositoryError> {
            self.receipts.lock().expect("lock").push(receipt.clone());
            Ok(receipt)
        }

        fn fetch(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError> {
            let guard = self.receipts.lock().expect("lock");
            Ok(guard.iter().find(|receipt| &receipt.id == id).cloned())
        }

        fn list(&self) -> Result<Vec<Receipt>, RepositoryError> {
            Ok(self.receipts.lock().expect("lock").clone())
        }
    }

    pub(super) fn service() -> ReceiptService<VecRepository> {
        ReceiptService::new(Arc::new(VecRepository::default()), ScoringConfig::default())
    }

    pub(super) fn walgreens() -> ReceiptSubmission {
        ReceiptSubmission {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", "1.25"),
                Item::new("Dasani", "1.40"),
            ],
        }
    }
}

use receipt_points::receipts::{ReceiptServiceError, ScoringEngine, ScoringError};

#[test]
fn processed_receipt_can_be_listed_fetched_and_scored() {
    let service = common::service();

    let stored = service.process(common::walgreens()).expect("receipt stored");
    let fetched = service.get(&stored.id).expect("receipt fetched");
    assert_eq!(fetched, stored);
    assert_eq!(service.list().expect("list succeeds"), vec![stored.clone()]);

    let outcome = service.points(&stored.id).expect("receipt scores");

    // 9 retailer + 5 pair + 1 for "Dasani" (1.40 * 0.2 = 0.28)
    assert_eq!(outcome.total_points, 15);
    assert_eq!(outcome.breakdown.description_bonuses.len(), 1);
    assert_eq!(outcome.breakdown.description_bonuses[0].trimmed_length, 6);
}

#[test]
fn afternoon_purchase_earns_window_bonus() {
    let service = common::service();
    let mut submission = common::walgreens();
    submission.purchase_time = "14:01".to_string();

    let stored = service.process(submission).expect("receipt stored");
    let outcome = service.points(&stored.id).expect("receipt scores");

    assert_eq!(outcome.breakdown.afternoon_points, 10);
    assert_eq!(outcome.total_points, 25);
}

#[test]
fn out_of_range_hour_passes_intake_but_fails_scoring() {
    let service = common::service();
    let mut submission = common::walgreens();
    submission.purchase_time = "26:00".to_string();

    let stored = service.process(submission).expect("shape is valid");

    match service.points(&stored.id) {
        Err(ReceiptServiceError::Scoring(ScoringError::InvalidHour { hour, .. })) => {
            assert_eq!(hour, 26)
        }
        other => panic!("expected fatal scoring error, got {other:?}"),
    }
}

#[test]
fn breakdown_lines_end_with_total() {
    let service = common::service();
    let stored = service.process(common::walgreens()).expect("receipt stored");
    let engine = ScoringEngine::default();

    let outcome = engine.score(&stored).expect("receipt scores");
    let lines = engine.breakdown_lines(&outcome);

    assert_eq!(lines.last().map(String::as_str), Some("  = 15 points"));
    assert!(lines
        .iter()
        .any(|line| line.contains("2 items (1 group of 2 @ 5 points each)")));
}
