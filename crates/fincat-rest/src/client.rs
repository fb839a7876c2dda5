//! HTTP client for the product catalog API.

use reqwest::{StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use fincat_core::{CatalogUrl, DomainError};

/// Message shown when the service cannot be reached at all.
const UNREACHABLE_MESSAGE: &str =
    "Could not reach the product service. Please check your connection.";

/// Message shown when the service does not answer in time.
const TIMEOUT_MESSAGE: &str = "The product service took too long to respond.";

/// HTTP client for catalog requests.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    client: reqwest::Client,
    catalog: CatalogUrl,
}

impl RestClient {
    /// Create a new client for the given catalog.
    pub fn new(catalog: CatalogUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fincat/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, catalog }
    }

    /// Returns the catalog URL this client is configured for.
    #[allow(dead_code)]
    pub fn catalog(&self) -> &CatalogUrl {
        &self.catalog
    }

    /// Fetch a JSON resource (GET request).
    #[instrument(skip(self), fields(catalog = %self.catalog))]
    pub async fn get<R>(&self, url: Url) -> Result<R, DomainError>
    where
        R: DeserializeOwned,
    {
        debug!(%url, "catalog GET");

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Send a JSON body and parse the JSON response (POST request).
    #[instrument(skip(self), fields(catalog = %self.catalog))]
    pub async fn post<B, R>(&self, url: Url, body: &B) -> Result<R, DomainError>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%url, "catalog POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Send a JSON body and parse the JSON response (PUT request).
    #[instrument(skip(self), fields(catalog = %self.catalog))]
    pub async fn put<B, R>(&self, url: Url, body: &B) -> Result<R, DomainError>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%url, "catalog PUT");
        trace!(?body, "request body");

        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Delete a resource, ignoring any response body.
    #[instrument(skip(self), fields(catalog = %self.catalog))]
    pub async fn delete(&self, url: Url) -> Result<(), DomainError> {
        debug!(%url, "catalog DELETE");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Handle a catalog response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, DomainError> {
        let status = response.status();
        trace!(status = %status, "catalog response");

        if status.is_success() {
            response.json::<R>().await.map_err(|err| {
                DomainError::new(format!(
                    "The product service sent an unreadable response: {err}."
                ))
            })
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Turn an error response into a display-ready message, preferring the
    /// message the service itself sent.
    async fn error_from_response(&self, response: reqwest::Response) -> DomainError {
        let status = response.status();

        let body = response.json::<ErrorBody>().await.ok();
        if let Some(message) = body.and_then(|b| b.message).filter(|m| !m.is_empty()) {
            return DomainError::new(message);
        }

        let message = match status {
            StatusCode::NOT_FOUND => "The requested product was not found.".to_string(),
            StatusCode::BAD_REQUEST => "The product data was rejected by the service.".to_string(),
            _ => format!(
                "The product service returned an unexpected response (HTTP {}).",
                status.as_u16()
            ),
        };
        DomainError::new(message)
    }
}

/// Error body the product service sends for failed requests.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a transport failure to a display-ready message.
fn transport_error(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::new(TIMEOUT_MESSAGE)
    } else if err.is_connect() {
        DomainError::new(UNREACHABLE_MESSAGE)
    } else {
        DomainError::new(format!("The product service request failed: {err}."))
    }
}
