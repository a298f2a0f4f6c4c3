// Copyright 2026 Playver Contributors
// SPDX-License-Identifier: Apache-2.0

//! Playver library — Play Store app version lookup.
//!
//! Fetches a package's Play Store details page and extracts the
//! published version string with a three-tier fallback chain:
//! JSON-LD metadata, labeled layout blocks, positional index.
//!
//! This library crate exposes the core modules for integration testing.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod rest;
