//! Fetch store details for a few well known apps.
//!
//! Usage:
//!   cargo run --example fetch_app_details
//!   RUST_LOG=steam_store_api=debug cargo run --example fetch_app_details

use steam_store_api::StoreClient;
use tracing::info;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();

    let client = StoreClient::new(None);
    let response = client
        .app_details(&[70, 220, 400], "en", "us")
        .await
        .unwrap();

    for (appid, entry) in &response {
        match &entry.data {
            Some(data) => info!(
                appid = %appid,
                name = %data.name,
                kind = %data.type_string,
                "fetched app"
            ),
            None => info!(appid = %appid, "storefront has no data for app"),
        }
    }
}
