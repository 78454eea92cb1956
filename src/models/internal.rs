use chrono::{NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Receipt after validation, with every field parsed into its real type.
///
/// Only `validate_receipt` builds these, so the scorer never sees
/// malformed dates, times or amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidItem>,
    pub total: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub short_description: String,
    pub price: Amount,
}

/// A "digits.dd" amount of any length.
///
/// `value` is `None` when the amount has more digits than a `Decimal`
/// holds; the cents digits are always kept so the round and quarter
/// checks never need the full value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    pub value: Option<Decimal>,
    pub cents: u8,
}

impl Amount {
    pub fn new(value: Option<Decimal>, cents: u8) -> Self {
        Self { value, cents }
    }

    pub fn from_decimal(value: Decimal) -> Self {
        let cents = (value.fract().abs() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u8()
            .unwrap_or(0);
        Self::new(Some(value), cents)
    }

    /// No cents
    pub fn is_whole(&self) -> bool {
        self.cents == 0
    }

    /// 100 is a multiple of 25, so only the cents decide divisibility
    pub fn is_multiple_of_quarter(&self) -> bool {
        self.cents % 25 == 0
    }
}

/// Points awarded by each scoring rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: i64,
    pub round_total: i64,
    pub quarter_total: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    pub fn total(&self) -> i64 {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_from_decimal_keeps_cents() {
        assert_eq!(Amount::from_decimal(dec!(35.35)), Amount::new(Some(dec!(35.35)), 35));
        assert_eq!(Amount::from_decimal(dec!(9.00)).cents, 0);
        assert_eq!(Amount::from_decimal(dec!(0.07)).cents, 7);
    }

    #[test]
    fn test_amount_checks_without_value() {
        assert!(Amount::new(None, 0).is_whole());
        assert!(Amount::new(None, 75).is_multiple_of_quarter());
        assert!(!Amount::new(None, 10).is_multiple_of_quarter());
        assert!(!Amount::new(None, 50).is_whole());
    }
}
