//! Type definitions for the library index and quick-reference manifests
//!
//! Field names match the wire format of `index.json` and
//! `quick-reference.json` exactly, so these types double as the schema.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Root object of `index.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryIndex {
    pub version: String,
    pub updated: String,
    pub libraries: Vec<LibraryMeta>,
}

/// Metadata for a single curated library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryMeta {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: String,
    pub cdn: CdnLinks,
    pub docs: DocsLocation,
}

/// CDN script and optional stylesheet URLs for a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdnLinks {
    pub js: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

/// Where a library's documentation lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsLocation {
    /// Path to the markdown file, relative to the hosting base URL
    pub local: String,
    /// npm package name, when the library is published to the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
}

/// Root object of `quick-reference.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickReference {
    pub version: String,
    pub updated: String,
    pub libraries: Vec<QuickRefEntry>,
    pub categories: BTreeMap<String, Vec<QuickRefEntry>>,
}

/// Compact projection of [`LibraryMeta`] for prompt embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickRefEntry {
    pub id: String,
    pub name: String,
    pub version: String,
    pub category: String,
    /// Primary (script) CDN URL only
    pub cdn: String,
    pub description: String,
}

impl QuickRefEntry {
    /// Project a full library record down to its quick-reference form
    pub fn from_meta(meta: &LibraryMeta) -> Self {
        Self {
            id: meta.id.clone(),
            name: meta.name.clone(),
            version: meta.version.clone(),
            category: meta.category.clone(),
            cdn: meta.cdn.js.clone(),
            description: meta.description.clone(),
        }
    }
}

/// A fetched documentation body, memoized for the process lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedDoc {
    pub id: String,
    pub name: String,
    pub version: String,
    pub markdown: String,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
    /// The index record this documentation was resolved from
    pub meta: LibraryMeta,
}

/// Per-identifier outcome of a bulk documentation fetch
#[derive(Debug, Clone, Serialize)]
pub struct DocFetchOutcome {
    pub id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Arc<CachedDoc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Diagnostic snapshot of the documentation cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}
