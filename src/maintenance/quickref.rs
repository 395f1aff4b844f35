//! Quick-reference generator
//!
//! Derives `quick-reference.json` from `index.json`: each record projected
//! to its compact form, plus a grouping from category label to entries.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::client::types::{LibraryIndex, QuickRefEntry, QuickReference};
use crate::maintenance::load_index;

/// Build the quick reference for an index
pub fn build_quick_reference(index: &LibraryIndex) -> QuickReference {
    let libraries: Vec<QuickRefEntry> =
        index.libraries.iter().map(QuickRefEntry::from_meta).collect();

    let mut categories: BTreeMap<String, Vec<QuickRefEntry>> = BTreeMap::new();
    for lib in &libraries {
        categories
            .entry(lib.category.clone())
            .or_default()
            .push(lib.clone());
    }

    QuickReference {
        version: index.version.clone(),
        updated: index.updated.clone(),
        libraries,
        categories,
    }
}

/// Generate `quick-reference.json` next to `index.json`
pub fn generate_quick_reference(docs_dir: &Path) -> Result<QuickReference> {
    let index = load_index(docs_dir)?;
    let quick_ref = build_quick_reference(&index);

    let out_path = docs_dir.join("quick-reference.json");
    let json = serde_json::to_string_pretty(&quick_ref)?;
    std::fs::write(&out_path, json)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!("✅ Generated quick-reference.json");
    println!(
        "   {} libraries organized into {} categories",
        quick_ref.libraries.len(),
        quick_ref.categories.len()
    );

    Ok(quick_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::{CdnLinks, DocsLocation, LibraryIndex, LibraryMeta};

    fn meta(id: &str, category: &str) -> LibraryMeta {
        LibraryMeta {
            id: id.to_string(),
            name: id.to_uppercase(),
            version: "1.0.0".to_string(),
            description: format!("{id} library"),
            tags: vec![category.to_string()],
            category: category.to_string(),
            cdn: CdnLinks {
                js: format!("https://cdn.example.com/{id}.min.js"),
                css: None,
            },
            docs: DocsLocation {
                local: format!("libraries/{id}.md"),
                npm: Some(id.to_string()),
            },
        }
    }

    fn index() -> LibraryIndex {
        LibraryIndex {
            version: "1.0".to_string(),
            updated: "2025-01-08".to_string(),
            libraries: vec![
                meta("axios", "http"),
                meta("gsap", "animation"),
                meta("anime-js", "animation"),
            ],
        }
    }

    #[test]
    fn projects_and_groups_by_category() {
        let quick_ref = build_quick_reference(&index());

        assert_eq!(quick_ref.version, "1.0");
        assert_eq!(quick_ref.libraries.len(), 3);
        assert_eq!(quick_ref.categories.len(), 2);
        assert_eq!(quick_ref.categories["animation"].len(), 2);
        assert_eq!(quick_ref.categories["http"][0].id, "axios");

        // Projection keeps only the primary CDN URL
        assert_eq!(
            quick_ref.libraries[0].cdn,
            "https://cdn.example.com/axios.min.js"
        );
    }

    #[test]
    fn writes_quick_reference_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("index.json"),
            serde_json::to_string(&index())?,
        )?;

        generate_quick_reference(dir.path())?;

        let written = std::fs::read_to_string(dir.path().join("quick-reference.json"))?;
        let parsed: QuickReference = serde_json::from_str(&written)?;
        assert_eq!(parsed, build_quick_reference(&index()));
        Ok(())
    }
}
