use serde::{Deserialize, Serialize};

/// Receipt as submitted on the wire - all values still unparsed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,  // YYYY-MM-DD
    pub purchase_time: String,  // HH:MM, 24h
    pub items: Vec<Item>,
    pub total: String,
}

/// Single line item on a submitted receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}
