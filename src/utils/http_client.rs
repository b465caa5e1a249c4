// ABOUTME: HTTP client utilities with request and connect timeout configuration
// ABOUTME: Every outbound request made by the LLM layer goes through a client built here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Default request timeout for external API calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout for external API calls
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails, which only happens
/// when the TLS backend cannot initialize.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Create a new HTTP client for API calls with the default timeouts
#[must_use]
pub fn api_client() -> Client {
    create_client_with_timeout(DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
}
