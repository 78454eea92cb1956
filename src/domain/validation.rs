use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::ReceiptError;
use crate::models::{Amount, Item, Receipt, ValidItem, ValidReceipt};

// Patterns are ASCII-only and `\s` means [\t\n\f\r ] (no vertical tab)
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex")
});

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex")
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("Invalid time regex")
});

static DESCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^[\w\t\n\f\r \-]+$").expect("Invalid description regex")
});

/// Validate a submitted receipt and parse it into a [`ValidReceipt`].
///
/// Rules are checked in a fixed order (retailer, purchase date, purchase
/// time, total, items) and the first violation is returned.
pub fn validate_receipt(receipt: &Receipt) -> Result<ValidReceipt, ReceiptError> {
    // Only ASCII whitespace counts as blank; a name of NBSPs is accepted
    if receipt
        .retailer
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .is_empty()
    {
        return Err(ReceiptError::invalid("invalid retailer"));
    }

    let purchase_date = parse_date(&receipt.purchase_date)
        .ok_or_else(|| ReceiptError::invalid("invalid purchase date"))?;

    let purchase_time = parse_time(&receipt.purchase_time)
        .ok_or_else(|| ReceiptError::invalid("invalid purchase time"))?;

    let total = parse_amount(&receipt.total)
        .ok_or_else(|| ReceiptError::invalid("invalid total format"))?;

    if receipt.items.is_empty() {
        return Err(ReceiptError::invalid("no items provided"));
    }

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn validate_item(index: usize, item: &Item) -> Result<ValidItem, ReceiptError> {
    if !DESCRIPTION_PATTERN.is_match(&item.short_description) {
        return Err(ReceiptError::invalid(format!(
            "invalid item short description at index {}",
            index
        )));
    }

    let price = parse_amount(&item.price).ok_or_else(|| {
        ReceiptError::invalid(format!("invalid item price format at index {}", index))
    })?;

    Ok(ValidItem {
        short_description: item.short_description.clone(),
        price,
    })
}

/// Parse a "digits.dd" amount of any size. Amounts too large for a
/// Decimal keep only their cents.
fn parse_amount(value: &str) -> Option<Amount> {
    if !AMOUNT_PATTERN.is_match(value) {
        return None;
    }
    let (_, fraction) = value.split_once('.')?;
    let cents = fraction.parse::<u8>().ok()?;
    Some(Amount::new(Decimal::from_str(value).ok(), cents))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    if !TIME_PATTERN.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
