use serde::{Deserialize, Serialize};

/// Point weights and thresholds applied by the scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub round_dollar_points: u64,
    pub total_multiple: f64,
    pub total_multiple_points: u64,
    pub item_group_size: usize,
    pub points_per_item_group: u64,
    pub description_length_divisor: usize,
    pub description_price_multiplier: f64,
    pub odd_day_points: u64,
    pub afternoon_points: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            round_dollar_points: 50,
            total_multiple: 0.25,
            total_multiple_points: 25,
            item_group_size: 2,
            points_per_item_group: 5,
            description_length_divisor: 3,
            description_price_multiplier: 0.2,
            odd_day_points: 6,
            afternoon_points: 10,
        }
    }
}
