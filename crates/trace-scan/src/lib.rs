//! ScanCode inventory loading and configuration for TraceCode
//!
//! Turns scan documents on disk into [`Codebase`] inventories for the
//! matching engine, and loads [`trace_core::AnalysisOptions`] from
//! configuration files.

pub mod config;
pub mod error;
pub mod inventory;

pub use config::{ConfigStore, load_options};
pub use error::{Error, Result};
pub use inventory::{Codebase, load_codebase};
