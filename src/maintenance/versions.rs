//! Version checker
//!
//! Compares each library's pinned version against the npm registry and
//! writes `version-updates.json` when anything is behind.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::build_http_client;
use crate::maintenance::load_index;

const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// A library whose pinned version differs from the registry's latest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionDelta {
    pub name: String,
    pub current: String,
    pub latest: String,
    pub npm: String,
}

#[derive(Debug, Deserialize)]
struct RegistryVersion {
    version: String,
}

/// Check every npm-published library against the registry
pub async fn check_versions(docs_dir: &Path) -> Result<Vec<VersionDelta>> {
    let index = load_index(docs_dir)?;
    let client = build_http_client();

    println!("Checking for version updates...\n");

    let mut updates = Vec::new();
    for lib in &index.libraries {
        let Some(npm) = &lib.docs.npm else {
            continue;
        };

        let latest = match fetch_latest_version(&client, npm).await {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(package = %npm, "Registry lookup failed: {e}");
                continue;
            }
        };

        if latest != lib.version {
            println!("📦 {}: {} → {}", lib.name, lib.version, latest);
            updates.push(VersionDelta {
                name: lib.name.clone(),
                current: lib.version.clone(),
                latest,
                npm: npm.clone(),
            });
        }
    }

    if updates.is_empty() {
        println!("\n✅ All libraries are up to date!");
    } else {
        println!("\n🔄 {} libraries have updates available", updates.len());

        let out_path = docs_dir.join("version-updates.json");
        let json = serde_json::to_string_pretty(&updates)?;
        std::fs::write(&out_path, json)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
    }

    Ok(updates)
}

async fn fetch_latest_version(client: &reqwest::Client, package: &str) -> Result<String> {
    // Scoped package names carry a slash that must be escaped in the path
    let url = format!("{}/{}/latest", NPM_REGISTRY_URL, package.replace('/', "%2F"));

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to query registry for {package}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("registry returned {status} for {package}");
    }

    let version: RegistryVersion = response
        .json()
        .await
        .with_context(|| format!("Invalid registry response for {package}"))?;
    Ok(version.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_delta_serialization_matches_report_format() {
        let delta = VersionDelta {
            name: "Chart.js".to_string(),
            current: "4.4.0".to_string(),
            latest: "4.5.1".to_string(),
            npm: "chart.js".to_string(),
        };

        let json = serde_json::to_string(&delta).unwrap();
        let parsed: VersionDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(delta, parsed);
    }
}
