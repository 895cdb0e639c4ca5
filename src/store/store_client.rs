use reqwest::Client;
use tokio::task::JoinSet;
use tracing::debug;

use crate::{
    consts::{APP_DETAILS_PATH, DEFAULT_API_VERSION, MAX_IDS_PER_REQUEST, STORE_BASE_URL},
    prelude::*,
    req::HttpClient,
    store::response_structs::StoreResponse,
    Error,
};

/// Parameters sent with every app-details request.
#[derive(Debug, Clone)]
pub struct StoreQuery {
    /// Language of the returned descriptions, e.g. "en".
    pub locale: String,
    /// Country code controlling prices and currency, e.g. "us".
    pub currency: String,
    /// Protocol version of the endpoint.
    pub version: u64,
}

impl StoreQuery {
    pub fn new(
        locale: impl Into<String>,
        currency: impl Into<String>,
        version: u64,
    ) -> StoreQuery {
        StoreQuery {
            locale: locale.into(),
            currency: currency.into(),
            version,
        }
    }

    /// Render the request path and query string for one batch of ids.
    pub fn to_url(&self, ids: &[u64]) -> String {
        let id_list = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{APP_DETAILS_PATH}?l={}&cc={}&v={}&appids={id_list}",
            self.locale, self.currency, self.version
        )
    }
}

/// Client for the storefront app-details endpoint.
#[derive(Debug, Clone)]
pub struct StoreClient {
    pub http_client: HttpClient,
}

impl StoreClient {
    /// Create a client against the production storefront.
    pub fn new(client: Option<Client>) -> StoreClient {
        Self::with_base_url(client, STORE_BASE_URL)
    }

    /// Create a client against a custom base URL, e.g. a local stub.
    pub fn with_base_url(client: Option<Client>, base_url: impl Into<String>) -> StoreClient {
        let client = client.unwrap_or_default();

        StoreClient {
            http_client: HttpClient {
                client,
                base_url: base_url.into(),
            },
        }
    }

    /// Fetch app details for `ids`, localized to `locale` and priced for
    /// the `currency` country code.
    ///
    /// Identifiers are split into batches of at most [`MAX_IDS_PER_REQUEST`],
    /// the batches are fetched concurrently and their entries merged into one
    /// map keyed by appid. The first failing batch fails the whole call.
    pub async fn app_details(
        &self,
        ids: &[u64],
        locale: &str,
        currency: &str,
    ) -> Result<StoreResponse> {
        let query = StoreQuery::new(locale, currency, DEFAULT_API_VERSION);
        self.app_details_with_query(ids, &query).await
    }

    /// Fetch app details with full control over the query parameters.
    pub async fn app_details_with_query(
        &self,
        ids: &[u64],
        query: &StoreQuery,
    ) -> Result<StoreResponse> {
        let mut merged = StoreResponse::new();
        if ids.is_empty() {
            return Ok(merged);
        }

        let mut set = JoinSet::new();
        // The final chunk may be shorter than the batch limit; it is still requested.
        for batch in ids.chunks(MAX_IDS_PER_REQUEST) {
            let http_client = self.http_client.clone();
            let url = query.to_url(batch);
            set.spawn(async move {
                let body = http_client.get(&url).await?;
                serde_json::from_str::<StoreResponse>(&body)
                    .map_err(|e| Error::JsonParse(e.to_string()))
            });
        }

        debug!(
            ids = ids.len(),
            batches = set.len(),
            "dispatched app-details batches"
        );

        while let Some(task) = set.join_next().await {
            let batch_result = task.map_err(|e| Error::BatchJoin(e.to_string()))?;
            // Propagate the first error; dropping the set aborts in-flight batches.
            merged.extend(batch_result?);
        }

        Ok(merged)
    }
}
