#![deny(unreachable_pub)]

// Core modules
mod consts;
mod errors;
mod prelude;
mod req;

// Shared utilities
pub mod serde_utils;

// Feature modules
pub mod store;

// Re-exports
pub use consts::{APP_DETAILS_PATH, DEFAULT_API_VERSION, MAX_IDS_PER_REQUEST, STORE_BASE_URL};
pub use errors::Error;
pub use serde_utils::Number;
pub use store::response_structs::*;
pub use store::store_client::*;
