pub mod receipt;
pub mod internal;
pub mod api;

pub use receipt::*;
pub use internal::*;
pub use api::*;
