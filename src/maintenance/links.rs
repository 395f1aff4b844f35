//! CDN link checker
//!
//! HEAD-probes every CDN URL referenced by `index.json` and exits nonzero
//! when any of them is unreachable.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};

use crate::client::build_http_client;
use crate::maintenance::load_index;

/// Outcome of probing a single CDN URL
#[derive(Debug, Clone)]
pub struct LinkCheckResult {
    pub library: String,
    pub kind: &'static str,
    pub url: String,
    pub status: Option<u16>,
    pub error: Option<String>,
}

impl LinkCheckResult {
    pub fn ok(&self) -> bool {
        self.status.is_some_and(|status| (200..300).contains(&status))
    }
}

/// Probe every CDN link in the index, reporting per-URL status
pub async fn check_cdn_links(docs_dir: &Path) -> Result<()> {
    let index = load_index(docs_dir)?;
    let client = build_http_client();

    println!("Checking CDN links...\n");

    let mut results = Vec::new();
    for lib in &index.libraries {
        results.push(probe(&client, &lib.name, "JS", &lib.cdn.js).await);

        if let Some(css) = &lib.cdn.css {
            results.push(probe(&client, &lib.name, "CSS", css).await);
        }

        print!(".");
        let _ = std::io::stdout().flush();
    }

    println!("\n");

    let failed: Vec<&LinkCheckResult> = results.iter().filter(|r| !r.ok()).collect();
    if !failed.is_empty() {
        eprintln!("❌ Some CDN links failed:\n");
        for f in &failed {
            eprintln!("  {} ({}): {}", f.library, f.kind, f.url);
            eprintln!(
                "    Status: {} {}\n",
                f.status.map_or_else(|| "-".to_string(), |s| s.to_string()),
                f.error.as_deref().unwrap_or("")
            );
        }
        bail!("{} of {} CDN links failed", failed.len(), results.len());
    }

    println!("✅ All {} CDN links are accessible!", results.len());
    Ok(())
}

async fn probe(
    client: &reqwest::Client,
    library: &str,
    kind: &'static str,
    url: &str,
) -> LinkCheckResult {
    match client.head(url).send().await {
        Ok(response) => LinkCheckResult {
            library: library.to_string(),
            kind,
            url: url.to_string(),
            status: Some(response.status().as_u16()),
            error: None,
        },
        Err(e) => LinkCheckResult {
            library: library.to_string(),
            kind,
            url: url.to_string(),
            status: None,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: Option<u16>) -> LinkCheckResult {
        LinkCheckResult {
            library: "Axios".to_string(),
            kind: "JS",
            url: "https://cdn.example.com/axios.min.js".to_string(),
            status,
            error: None,
        }
    }

    #[test]
    fn success_statuses_are_ok() {
        assert!(result(Some(200)).ok());
        assert!(result(Some(204)).ok());
    }

    #[test]
    fn failures_are_not_ok() {
        assert!(!result(Some(404)).ok());
        assert!(!result(Some(301)).ok());
        assert!(!result(None).ok());
    }
}
