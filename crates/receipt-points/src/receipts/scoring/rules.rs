use chrono::{Datelike, NaiveDate};

use super::super::domain::{Item, Receipt};
use super::config::ScoringConfig;
use super::{DescriptionBonus, ScoreBreakdown, ScoringError};

const MAX_HOUR: i64 = 24;
const MAX_MINUTE: i64 = 59;
// 2^64; any bonus at or above this cannot be counted in points.
const MAX_BONUS_VALUE: f64 = u64::MAX as f64;

/// One point per ASCII letter or digit in the retailer name.
pub fn alphanumeric_points(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(|character| character.is_ascii_alphanumeric())
        .count() as u64
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// True when the total parses and carries no cents. Unparsable totals are not round.
pub fn is_round_dollar(total: &str) -> bool {
    parse_amount(total).is_some_and(|amount| amount.fract() == 0.0)
}

/// True when the total parses and leaves no remainder against `multiple`.
pub fn is_multiple_of(total: &str, multiple: f64) -> bool {
    parse_amount(total).is_some_and(|amount| amount % multiple == 0.0)
}

/// Number of complete groups of `group_size` items. A zero group size forms no groups.
pub fn item_groups(items: &[Item], group_size: usize) -> usize {
    items.len().checked_div(group_size).unwrap_or(0)
}

/// Returns the trimmed description length and the raw (unrounded) price bonus.
///
/// The bonus is `price * multiplier` when the trimmed length is a positive multiple of
/// `divisor`, and zero otherwise, including when the price does not parse or the
/// product is too large to count as points.
pub fn description_bonus(item: &Item, divisor: usize, multiplier: f64) -> (usize, f64) {
    let trimmed_length = item.short_description.trim().chars().count();

    if trimmed_length == 0 || trimmed_length.checked_rem(divisor) != Some(0) {
        return (trimmed_length, 0.0);
    }

    let value = parse_amount(&item.price)
        .map(|price| price * multiplier)
        .filter(|value| *value < MAX_BONUS_VALUE)
        .unwrap_or(0.0);
    (trimmed_length, value)
}

/// True when the date parses as `YYYY-MM-DD` and falls on an odd day of the month.
pub fn is_odd_purchase_day(purchase_date: &str) -> bool {
    NaiveDate::parse_from_str(purchase_date.trim(), "%Y-%m-%d")
        .map(|date| date.day() % 2 == 1)
        .unwrap_or(false)
}

/// True strictly after 14:00 and strictly before 16:00.
///
/// Unlike the other rules, an unreadable or out-of-range time is an error rather than
/// a zero contribution.
pub fn is_afternoon_window(purchase_time: &str) -> Result<bool, ScoringError> {
    let (hour, minute) = parse_clock(purchase_time)?;
    Ok((hour > 14 || (hour == 14 && minute >= 1)) && hour < 16)
}

fn parse_clock(raw: &str) -> Result<(i64, i64), ScoringError> {
    let unreadable = || ScoringError::UnreadableTime {
        value: raw.to_string(),
    };

    let (hour, minute) = raw.trim().split_once(':').ok_or_else(unreadable)?;
    let hour = hour.trim().parse::<i64>().map_err(|_| unreadable())?;
    let minute = minute.trim().parse::<i64>().map_err(|_| unreadable())?;

    if !(0..=MAX_HOUR).contains(&hour) {
        return Err(ScoringError::InvalidHour {
            value: raw.to_string(),
            hour,
        });
    }
    if !(0..=MAX_MINUTE).contains(&minute) {
        return Err(ScoringError::InvalidMinute {
            value: raw.to_string(),
            minute,
        });
    }

    Ok((hour, minute))
}

pub(crate) fn score_receipt(
    receipt: &Receipt,
    config: &ScoringConfig,
) -> Result<(ScoreBreakdown, u64), ScoringError> {
    let alphanumeric_points = alphanumeric_points(&receipt.retailer);

    let round_dollar_points = if is_round_dollar(&receipt.total) {
        config.round_dollar_points
    } else {
        0
    };

    let total_multiple_points = if is_multiple_of(&receipt.total, config.total_multiple) {
        config.total_multiple_points
    } else {
        0
    };

    let groups = item_groups(&receipt.items, config.item_group_size);
    let item_group_points = groups as u64 * config.points_per_item_group;

    let mut description_bonuses = Vec::new();
    for item in &receipt.items {
        let (trimmed_length, raw_value) = description_bonus(
            item,
            config.description_length_divisor,
            config.description_price_multiplier,
        );
        if raw_value > 0.0 {
            description_bonuses.push(DescriptionBonus {
                description: item.short_description.clone(),
                price: item.price.clone(),
                trimmed_length,
                raw_value,
                points: raw_value.ceil() as u64,
            });
        }
    }

    let odd_day_points = if is_odd_purchase_day(&receipt.purchase_date) {
        config.odd_day_points
    } else {
        0
    };

    let afternoon_points = if is_afternoon_window(&receipt.purchase_time)? {
        config.afternoon_points
    } else {
        0
    };

    let breakdown = ScoreBreakdown {
        alphanumeric_points,
        round_dollar_points,
        total_multiple_points,
        item_count: receipt.items.len(),
        item_groups: groups,
        item_group_points,
        description_bonuses,
        odd_day_points,
        afternoon_points,
    };
    let total_points = breakdown.total();

    Ok((breakdown, total_points))
}
