use tracing::{debug, info};

use super::scoring::points_breakdown;
use super::validation::validate_receipt;
use super::ReceiptError;
use crate::models::Receipt;
use crate::store::ReceiptStore;

/// Receipt submission and lookup.
///
/// Validation and scoring run before the store is touched, so the shared
/// lock is only held for the final insert or lookup.
#[derive(Debug, Clone, Default)]
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    pub fn new(store: ReceiptStore) -> Self {
        Self { store }
    }

    /// Validate, score and store a receipt, returning its new id
    #[tracing::instrument(skip_all, fields(item_count = receipt.items.len()))]
    pub async fn submit(&self, receipt: &Receipt) -> Result<String, ReceiptError> {
        // 1. Validate and parse
        let valid = validate_receipt(receipt).map_err(|e| {
            info!(error = %e, "Receipt rejected");
            e
        })?;

        // 2. Score
        let breakdown = points_breakdown(&valid);
        let points = breakdown.total();
        debug!(?breakdown, "Calculated points");

        // 3. Store
        let id = self.store.put(points).await?;

        info!(id = %id, points = points, "Receipt processed");
        Ok(id)
    }

    /// Points previously awarded to the receipt with this id
    #[tracing::instrument(skip(self))]
    pub async fn points(&self, id: &str) -> Result<i64, ReceiptError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ReceiptError::NotFound(format!("No receipt found for id {}", id)))
    }
}
