pub mod models;
pub mod domain;
pub mod store;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use models::{
    Item, Receipt, ValidItem, ValidReceipt, PointsBreakdown,
    ReceiptIdResponse, PointsResponse,
};

pub use domain::{
    validate_receipt, calculate_points, points_breakdown,
    ReceiptService, ReceiptError,
};

pub use store::{ReceiptStore, IdSource, UuidV4Source, MAX_ID_ATTEMPTS};

pub use config::ServerConfig;
