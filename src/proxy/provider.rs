//! Routing provider abstraction layer
//!
//! Defines the trait interface for routing backends so route handlers stay
//! decoupled from the concrete upstream API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppResult;

/// A validated directions request, ready to be forwarded upstream.
///
/// `origin` and `destination` are the raw client-supplied values; encoding
/// for URL inclusion is the provider's responsibility. `mode` has already
/// been defaulted by the handler and is forwarded verbatim.
#[derive(Debug, Clone)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub mode: String,
}

/// Trait defining the interface for routing providers
///
/// # Security
///
/// Implementations MUST:
/// - Authenticate upstream requests with the server-held credential from
///   configuration
/// - Never include the credential in log output or client-visible responses
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Fetch directions for the given query
    ///
    /// Returns the provider's JSON response verbatim. The payload is opaque
    /// to the proxy: it is relayed to the client without inspection, even
    /// when the provider reports an error inside the body.
    async fn directions(&self, query: &DirectionsQuery) -> AppResult<Value>;
}
