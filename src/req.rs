use reqwest::{Client, Response};
use tracing::debug;

use crate::{prelude::*, Error};

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

async fn parse_response(response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Request(e.to_string()))?;

    if (200..300).contains(&status_code) {
        return Ok(text);
    }

    Err(Error::Status {
        status_code,
        error_message: text,
    })
}

impl HttpClient {
    /// Send a GET request for `path_and_query` under the client's base URL
    /// and return the body of a 2xx response.
    pub async fn get(&self, path_and_query: &str) -> Result<String> {
        let full_url = format!("{}{path_and_query}", self.base_url);
        let result = self
            .client
            .get(&full_url)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        debug!(
            status = result.status().as_u16(),
            url = %full_url,
            "store request completed"
        );

        parse_response(result).await
    }
}
