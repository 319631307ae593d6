use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    PointsOutcome, ReceiptId, ReceiptServiceError, ReceiptSubmission, ScoringConfig,
    ScoringEngine,
};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document shaped like the intake payload
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the scoring outcome as JSON instead of the text breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { receipt, json } = args;

    let raw = std::fs::read_to_string(&receipt)?;
    let engine = ScoringEngine::new(ScoringConfig::default());
    let outcome = score_document(&engine, receipt_id_for(&receipt), &raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        for line in engine.breakdown_lines(&outcome) {
            println!("{line}");
        }
    }

    Ok(())
}

fn receipt_id_for(path: &Path) -> ReceiptId {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "receipt".to_string());
    ReceiptId(stem)
}

fn score_document(
    engine: &ScoringEngine,
    id: ReceiptId,
    raw: &str,
) -> Result<PointsOutcome, AppError> {
    let submission: ReceiptSubmission = serde_json::from_str(raw)?;
    submission.validate().map_err(ReceiptServiceError::from)?;
    let receipt = submission.into_receipt(id);
    Ok(engine.score(&receipt)?)
}
