//! Google Maps Directions client
//!
//! Handles request forwarding to the Google Maps Directions API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    proxy::provider::{DirectionsQuery, RoutingProvider},
};

/// Characters escaped when embedding a query value in the outbound URL.
///
/// Alphanumerics and `- _ . ! ~ * ' ( )` pass through; everything else,
/// including space, `&`, `#`, `,` and `+`, is percent-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for inclusion in a URL query string
fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Google Maps Directions API client
pub struct GoogleMaps {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleMaps {
    /// Create a new Google Maps client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.google_maps_api_url.clone(),
            api_key: config.google_maps_api_key.clone(),
        }
    }

    /// Build the outbound Directions API URL
    ///
    /// `origin` and `destination` are percent-encoded; the credential and
    /// `mode` are appended verbatim.
    fn directions_url(&self, query: &DirectionsQuery) -> String {
        format!(
            "{}/directions/json?origin={}&destination={}&key={}&mode={}",
            self.base_url,
            encode_component(&query.origin),
            encode_component(&query.destination),
            self.api_key,
            query.mode,
        )
    }
}

#[async_trait]
impl RoutingProvider for GoogleMaps {
    fn name(&self) -> &'static str {
        "google-maps"
    }

    /// Fetch directions from the Directions API
    ///
    /// Issues exactly one GET with no timeout, no retry, and no circuit
    /// breaking. The upstream HTTP status is not inspected: any body that
    /// decodes as JSON is relayed as-is, including provider-level error
    /// payloads. Transport and decode failures collapse into
    /// [`AppError::DirectionsFetch`].
    async fn directions(&self, query: &DirectionsQuery) -> AppResult<Value> {
        let url = self.directions_url(query);

        // The URL embeds the credential, so log the query fields instead.
        debug!(
            origin = %query.origin,
            destination = %query.destination,
            mode = %query.mode,
            "Fetching directions from upstream"
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::DirectionsFetch(e.to_string()))?;

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| AppError::DirectionsFetch(e.to_string()))?;

        Ok(body)
    }
}
