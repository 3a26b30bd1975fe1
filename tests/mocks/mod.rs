//! Mock infrastructure for testing external services
//!
//! This module provides a wiremock-based stub of the upstream directions
//! API, reusable across test files and supporting the response scenarios the
//! proxy must handle (success, provider error payloads, malformed bodies).


pub use google::*;
