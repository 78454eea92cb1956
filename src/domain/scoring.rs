use chrono::{Datelike, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{PointsBreakdown, ValidItem, ValidReceipt};

const ROUND_TOTAL_POINTS: i64 = 50;
const QUARTER_TOTAL_POINTS: i64 = 25;
const ITEM_PAIR_POINTS: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;

/// Multiplier applied to an item's price when its trimmed description
/// length is a multiple of three
const DESCRIPTION_PRICE_MULTIPLIER: Decimal = dec!(0.2);

/// Calculate the total points for a validated receipt
pub fn calculate_points(receipt: &ValidReceipt) -> i64 {
    points_breakdown(receipt).total()
}

/// Calculate the points awarded by each rule
///
/// Every rule is independent of the others:
/// 1. One point per ASCII alphanumeric character in the retailer name
/// 2. 50 points if the total is a round dollar amount
/// 3. 25 points if the total is a multiple of 0.25
/// 4. 5 points for every two items
/// 5. ceil(price * 0.2) for each item whose trimmed description length is a multiple of 3
/// 6. 6 points if the purchase day is odd
/// 7. 10 points if the purchase time is in [14:00, 16:00)
pub fn points_breakdown(receipt: &ValidReceipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: if receipt.total.is_whole() { ROUND_TOTAL_POINTS } else { 0 },
        quarter_total: if receipt.total.is_multiple_of_quarter() { QUARTER_TOTAL_POINTS } else { 0 },
        item_pairs: (receipt.items.len() / 2) as i64 * ITEM_PAIR_POINTS,
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, i64::saturating_add),
        odd_day: if receipt.purchase_date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 },
        afternoon: if is_afternoon(receipt.purchase_time) { AFTERNOON_POINTS } else { 0 },
    }
}

fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as i64
}

fn item_description_points(item: &ValidItem) -> i64 {
    let trimmed_len = item.short_description.trim().chars().count();
    if trimmed_len == 0 || trimmed_len % 3 != 0 {
        return 0;
    }

    // Saturate for prices beyond the i64 (or Decimal) range
    item.price
        .value
        .and_then(|price| (price * DESCRIPTION_PRICE_MULTIPLIER).ceil().to_i64())
        .unwrap_or(i64::MAX)
}

fn is_afternoon(time: NaiveTime) -> bool {
    (14..16).contains(&time.hour())
}
