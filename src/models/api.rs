use serde::{Deserialize, Serialize};

/// Response for POST /receipts/process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIdResponse {
    pub id: String,
}

/// Response for GET /receipts/{id}/points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}
