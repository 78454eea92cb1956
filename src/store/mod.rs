pub mod id;
pub mod memory;

pub use id::{IdSource, UuidV4Source};
pub use memory::{ReceiptStore, MAX_ID_ATTEMPTS};
