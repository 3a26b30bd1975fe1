//! Configuration management for Wayfinder
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Google Maps API base URL
    pub google_maps_api_url: String,
    /// Google Maps API key, injected into outbound requests and never
    /// exposed to clients
    pub google_maps_api_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("WAYFINDER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("WAYFINDER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid WAYFINDER_PORT")?,

            google_maps_api_url: env::var("GOOGLE_MAPS_API_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api".to_string()),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")
                .context("GOOGLE_MAPS_API_KEY must be set")?,
        })
    }
}
