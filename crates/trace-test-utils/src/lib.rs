//! Shared test utilities for the tracecode workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`codebase`]: in-memory develop/deploy inventories for common scenarios
//! - [`scan`]: [`ScanPair`] builder writing ScanCode JSON documents to disk

pub mod codebase;
pub mod scan;

pub use scan::{ScanPair, scan_document};
