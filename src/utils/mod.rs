// ABOUTME: Utility module for shared helpers
// ABOUTME: Currently hosts HTTP client construction with timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client construction with timeouts
pub mod http_client;
