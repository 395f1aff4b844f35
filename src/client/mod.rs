//! # Client Module
//!
//! In-memory caching client for the hosted library documentation index.
//!
//! ## Key Components
//!
//! - [`DocsClient`] - fetches the manifests once, answers queries from
//!   memory, and memoizes markdown documentation per library id
//! - [`types`] - wire-format types for both manifests and the doc cache
//! - [`error`] - error kinds for load, lookup, and fetch failures
//! - [`prompt`] - markdown table rendering for prompt embedding

pub mod error;
pub mod prompt;
pub mod types;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use serde::de::DeserializeOwned;

pub use error::ClientError;
pub use prompt::PromptTableOptions;
pub use types::{
    CacheStats, CachedDoc, DocFetchOutcome, LibraryIndex, LibraryMeta, QuickRefEntry,
    QuickReference,
};

/// Build the shared HTTP client with proper configuration
pub(crate) fn build_http_client() -> reqwest::Client {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to create HTTP client") // HTTP client creation should not fail with proper configuration
}

/// Client for the static documentation host
///
/// Holds the loaded index and quick reference plus the documentation cache
/// as instance state, so initialization-order invariants are testable per
/// instance. Internal locks are never held across an await.
#[derive(Debug)]
pub struct DocsClient {
    base_url: String,
    http: reqwest::Client,
    index: RwLock<Option<Arc<LibraryIndex>>>,
    quick_ref: RwLock<Option<Arc<QuickReference>>>,
    cache: Mutex<HashMap<String, Arc<CachedDoc>>>,
}

impl DocsClient {
    /// Create an uninitialized client for the given hosting base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: build_http_client(),
            index: RwLock::new(None),
            quick_ref: RwLock::new(None),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The hosting base URL this client was configured with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load `index.json` and `quick-reference.json` into memory
    ///
    /// Must complete once before any query, fetch, or format operation.
    /// Both manifests are installed together after both retrievals parse,
    /// so a failure never leaves state that looks initialized.
    pub async fn initialize(&self) -> Result<(), ClientError> {
        tracing::info!("Loading library index from {}", self.base_url);

        let index: LibraryIndex = self.fetch_json("index.json").await?;
        let quick_ref: QuickReference = self.fetch_json("quick-reference.json").await?;

        tracing::info!(
            libraries = index.libraries.len(),
            categories = quick_ref.categories.len(),
            "Loaded library index"
        );

        *self.index.write().expect("index lock poisoned") = Some(Arc::new(index));
        *self.quick_ref.write().expect("quick-ref lock poisoned") = Some(Arc::new(quick_ref));
        Ok(())
    }

    /// Whether a successful `initialize()` has completed
    pub fn is_initialized(&self) -> bool {
        self.index.read().expect("index lock poisoned").is_some()
            && self
                .quick_ref
                .read()
                .expect("quick-ref lock poisoned")
                .is_some()
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Load {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Load {
                url,
                reason: format!("unexpected status {status}"),
            });
        }

        response.json::<T>().await.map_err(|e| ClientError::Load {
            url,
            reason: format!("invalid manifest: {e}"),
        })
    }

    fn index(&self) -> Result<Arc<LibraryIndex>, ClientError> {
        self.index
            .read()
            .expect("index lock poisoned")
            .clone()
            .ok_or(ClientError::Uninitialized)
    }

    fn quick_reference(&self) -> Result<Arc<QuickReference>, ClientError> {
        self.quick_ref
            .read()
            .expect("quick-ref lock poisoned")
            .clone()
            .ok_or(ClientError::Uninitialized)
    }

    /// The full ordered list of library records
    pub fn list_libraries(&self) -> Result<Vec<LibraryMeta>, ClientError> {
        Ok(self.index()?.libraries.clone())
    }

    /// Quick-reference entries for one category
    ///
    /// An unknown category or one with no members yields an empty list,
    /// not an error.
    pub fn get_by_category(&self, category: &str) -> Result<Vec<QuickRefEntry>, ClientError> {
        Ok(self
            .quick_reference()?
            .categories
            .get(category)
            .cloned()
            .unwrap_or_default())
    }

    /// Case-insensitive substring search over name, id, description, and
    /// tags
    ///
    /// A record matches when at least one field contains the query. The
    /// empty query is contained in every string, so it matches every
    /// record; that is the defined behavior, not a special case.
    pub fn search(&self, query: &str) -> Result<Vec<LibraryMeta>, ClientError> {
        let needle = query.to_lowercase();
        Ok(self
            .index()?
            .libraries
            .iter()
            .filter(|lib| {
                lib.name.to_lowercase().contains(&needle)
                    || lib.id.to_lowercase().contains(&needle)
                    || lib.description.to_lowercase().contains(&needle)
                    || lib.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    /// The library record with the given id, or `None` when absent
    pub fn get_meta(&self, id: &str) -> Result<Option<LibraryMeta>, ClientError> {
        Ok(self
            .index()?
            .libraries
            .iter()
            .find(|lib| lib.id == id)
            .cloned())
    }

    /// Full markdown documentation for one library id
    ///
    /// Returns the cached document when present, with no network access or
    /// staleness check. Concurrent calls for the same uncached id are not
    /// coalesced; each fetches independently and the last insert wins the
    /// cache slot.
    pub async fn get_docs(&self, id: &str) -> Result<Arc<CachedDoc>, ClientError> {
        if let Some(doc) = self.cache.lock().expect("cache lock poisoned").get(id) {
            return Ok(doc.clone());
        }

        let meta = self
            .get_meta(id)?
            .ok_or_else(|| ClientError::NotFound { id: id.to_string() })?;

        let url = format!("{}/{}", self.base_url, meta.docs.local);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Fetch {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Fetch {
                id: id.to_string(),
                reason: format!("unexpected status {status}"),
            });
        }

        let markdown = response.text().await.map_err(|e| ClientError::Fetch {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

        let doc = Arc::new(CachedDoc {
            id: id.to_string(),
            name: meta.name.clone(),
            version: meta.version.clone(),
            markdown,
            fetched_at: chrono::Utc::now(),
            meta,
        });

        self.cache
            .lock()
            .expect("cache lock poisoned")
            .insert(id.to_string(), doc.clone());

        tracing::debug!(id, "Cached documentation");
        Ok(doc)
    }

    /// Fetch documentation for many ids at once
    ///
    /// All fetches are initiated without waiting on one another and every
    /// outcome is awaited. One outcome per input id, in input order; no
    /// single failure affects any other id.
    pub async fn get_bulk_docs(&self, ids: &[String]) -> Vec<DocFetchOutcome> {
        let fetches = ids.iter().map(|id| async move {
            let outcome = self.get_docs(id).await;
            match outcome {
                Ok(doc) => DocFetchOutcome {
                    id: id.clone(),
                    success: true,
                    data: Some(doc),
                    error: None,
                },
                Err(e) => DocFetchOutcome {
                    id: id.clone(),
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                },
            }
        });

        futures::future::join_all(fetches).await
    }

    /// Quick-reference entries rendered as a markdown table for prompt use
    pub fn prompt_table(&self, options: &PromptTableOptions) -> Result<String, ClientError> {
        let quick_ref = self.quick_reference()?;
        Ok(prompt::render_table(&quick_ref, options))
    }

    /// Discard every cached document; manifests stay loaded
    pub fn clear_cache(&self) {
        self.cache.lock().expect("cache lock poisoned").clear();
        tracing::debug!("Documentation cache cleared");
    }

    /// Cache size and cached ids, for diagnostics
    pub fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.lock().expect("cache lock poisoned");
        let mut keys: Vec<String> = cache.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: cache.len(),
            keys,
        }
    }
}
