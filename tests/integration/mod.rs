//! Integration tests for the Wayfinder proxy
//!
//! This module contains integration tests that verify the complete
//! request/response flow through the proxy against a stubbed upstream
//! directions API.
