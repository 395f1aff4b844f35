//! # Maintenance Module
//!
//! Subcommands for maintaining the hosted content directory.
//!
//! ## Key Components
//!
//! - [`links`] - probes every CDN URL in the index and reports failures
//! - [`quickref`] - derives `quick-reference.json` from `index.json`
//! - [`versions`] - compares index versions against the npm registry
//! - [`validate`] - structural validation of the index plus markdown
//!   existence checks
//!
//! All commands operate on a local docs directory, print human
//! diagnostics, and signal failure through a nonzero process exit.

pub mod links;
pub mod quickref;
pub mod validate;
pub mod versions;

use std::path::Path;

use anyhow::{Context, Result};

use crate::client::types::LibraryIndex;

/// Load and parse `index.json` from the docs directory
pub fn load_index(docs_dir: &Path) -> Result<LibraryIndex> {
    let index_path = docs_dir.join("index.json");
    let json = std::fs::read_to_string(&index_path)
        .with_context(|| format!("Failed to read {}", index_path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {}", index_path.display()))
}
