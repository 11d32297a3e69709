// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that host the component in a real environment.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "web")]
pub mod web;
