use super::common::*;
use crate::receipts::domain::{ReceiptId, ValidationError};
use crate::receipts::repository::{ReceiptRepository, RepositoryError};
use crate::receipts::{ReceiptService, ReceiptServiceError, ScoringConfig, ScoringError};
use std::sync::Arc;

#[test]
fn process_assigns_fresh_identifiers() {
    let (service, repository) = build_service();

    let first = service.process(target_submission()).expect("first stored");
    let second = service.process(target_submission()).expect("second stored");

    assert_ne!(first.id, second.id);
    assert!(!first.id.as_str().is_empty());
    let stored = repository.list().expect("list succeeds");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[1].id, second.id);
}

#[test]
fn process_rejects_invalid_submission_before_storage() {
    let (service, repository) = build_service();
    let mut submission = target_submission();
    submission.total = String::new();

    match service.process(submission) {
        Err(ReceiptServiceError::Validation(ValidationError::MissingField("total"))) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(repository.list().expect("list succeeds").is_empty());
}

#[test]
fn get_reports_missing_receipts() {
    let (service, _) = build_service();

    match service.get(&ReceiptId("555".to_string())) {
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn points_scores_stored_receipts() {
    let (service, _) = build_service();
    let stored = service
        .process(corner_market_submission())
        .expect("receipt stored");

    let outcome = service.points(&stored.id).expect("receipt scores");

    assert_eq!(outcome.receipt_id, stored.id);
    assert_eq!(outcome.total_points, 109);
}

#[test]
fn points_propagates_fatal_time_errors() {
    let (service, repository) = build_service();
    let mut submission = target_submission();
    submission.purchase_time = "26:00".to_string();
    repository.seed(receipt("late", submission));

    match service.points(&ReceiptId("late".to_string())) {
        Err(ReceiptServiceError::Scoring(ScoringError::InvalidHour { hour: 26, .. })) => {}
        other => panic!("expected fatal scoring error, got {other:?}"),
    }
}

#[test]
fn repository_outages_surface_as_repository_errors() {
    let service = ReceiptService::new(Arc::new(UnavailableRepository), ScoringConfig::default());

    assert!(matches!(
        service.process(target_submission()),
        Err(ReceiptServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(matches!(
        service.list(),
        Err(ReceiptServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}
