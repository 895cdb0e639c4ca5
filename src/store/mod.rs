//! Storefront app-details endpoint.
//!
//! This module provides the `StoreClient` for fetching app details in
//! batches, the `StoreQuery` parameters sent with every request, and the
//! response schema the endpoint returns.

pub mod response_structs;
pub mod store_client;
