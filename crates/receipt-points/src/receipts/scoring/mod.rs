mod config;
pub mod rules;

pub use config::ScoringConfig;

use super::domain::{Receipt, ReceiptId};
use serde::{Deserialize, Serialize};

/// Stateless engine applying the scoring rules to one receipt at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores the receipt. Fails only when the purchase time cannot be interpreted.
    pub fn score(&self, receipt: &Receipt) -> Result<PointsOutcome, ScoringError> {
        let (breakdown, total_points) = rules::score_receipt(receipt, &self.config)?;

        Ok(PointsOutcome {
            receipt_id: receipt.id.clone(),
            total_points,
            breakdown,
        })
    }

    /// Human-readable breakdown listing every rule that contributed, then the total.
    pub fn breakdown_lines(&self, outcome: &PointsOutcome) -> Vec<String> {
        let breakdown = &outcome.breakdown;
        let mut lines = vec![format!("Breakdown for receipt {}:", outcome.receipt_id)];

        if breakdown.alphanumeric_points > 0 {
            lines.push(format!(
                "{:>6} points - retailer name has {} alphanumeric characters",
                breakdown.alphanumeric_points, breakdown.alphanumeric_points
            ));
        }
        if breakdown.round_dollar_points > 0 {
            lines.push(format!(
                "{:>6} points - total is a round dollar amount",
                breakdown.round_dollar_points
            ));
        }
        if breakdown.total_multiple_points > 0 {
            lines.push(format!(
                "{:>6} points - total is a multiple of {:.2}",
                breakdown.total_multiple_points, self.config.total_multiple
            ));
        }
        if breakdown.item_group_points > 0 {
            let groups = if breakdown.item_groups == 1 {
                "group"
            } else {
                "groups"
            };
            lines.push(format!(
                "{:>6} points - {} items ({} {} of {} @ {} points each)",
                breakdown.item_group_points,
                breakdown.item_count,
                breakdown.item_groups,
                groups,
                self.config.item_group_size,
                self.config.points_per_item_group
            ));
        }
        for bonus in &breakdown.description_bonuses {
            lines.push(format!(
                "{:>6} points - {:?} is {} characters (a multiple of {})",
                bonus.points,
                bonus.description.trim(),
                bonus.trimmed_length,
                self.config.description_length_divisor
            ));
            lines.push(format!(
                "{:16}item price of {} * {} = {:.2}, rounded up is {} points",
                "",
                bonus.price,
                self.config.description_price_multiplier,
                bonus.raw_value,
                bonus.points
            ));
        }
        if breakdown.odd_day_points > 0 {
            lines.push(format!(
                "{:>6} points - purchase day is odd",
                breakdown.odd_day_points
            ));
        }
        if breakdown.afternoon_points > 0 {
            lines.push(format!(
                "{:>6} points - purchase time is after 2:00pm and before 4:00pm",
                breakdown.afternoon_points
            ));
        }

        lines.push("  + ---------".to_string());
        lines.push(format!("  = {} points", outcome.total_points));
        lines
    }
}

/// Result of scoring a single receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsOutcome {
    pub receipt_id: ReceiptId,
    pub total_points: u64,
    pub breakdown: ScoreBreakdown,
}

/// Per-rule contributions for one scoring call. Rules that did not fire record zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub alphanumeric_points: u64,
    pub round_dollar_points: u64,
    pub total_multiple_points: u64,
    pub item_count: usize,
    pub item_groups: usize,
    pub item_group_points: u64,
    pub description_bonuses: Vec<DescriptionBonus>,
    pub odd_day_points: u64,
    pub afternoon_points: u64,
}

impl ScoreBreakdown {
    /// Sum of every contribution, saturating at `u64::MAX`. Description bonuses are
    /// rounded per item.
    pub fn total(&self) -> u64 {
        let rule_points = [
            self.alphanumeric_points,
            self.round_dollar_points,
            self.total_multiple_points,
            self.item_group_points,
            self.odd_day_points,
            self.afternoon_points,
        ];

        rule_points
            .into_iter()
            .chain(self.description_bonuses.iter().map(|bonus| bonus.points))
            .fold(0u64, u64::saturating_add)
    }
}

/// An item whose trimmed description length earned a price-based bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionBonus {
    pub description: String,
    pub price: String,
    pub trimmed_length: usize,
    pub raw_value: f64,
    pub points: u64,
}

/// Fatal scoring failure. Only the purchase time rule produces these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("could not read purchase time '{value}' as HH:MM")]
    UnreadableTime { value: String },
    #[error("purchase time '{value}' has invalid hour {hour}")]
    InvalidHour { value: String, hour: i64 },
    #[error("purchase time '{value}' has invalid minute {minute}")]
    InvalidMinute { value: String, minute: i64 },
}
