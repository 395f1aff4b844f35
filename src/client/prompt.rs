//! Fixed-column markdown table rendering for LLM system prompts

use crate::client::types::{QuickRefEntry, QuickReference};

/// Options for [`render_table`]
#[derive(Debug, Clone, Default)]
pub struct PromptTableOptions {
    /// Restrict to one category's entries; `None` keeps all entries
    pub category: Option<String>,
    /// Truncate to the first N entries after category filtering
    pub limit: Option<usize>,
}

/// Render a subset of the quick reference as a markdown table
///
/// One row per entry, in the filtered and truncated order. An unknown
/// category produces a header with no data rows.
pub fn render_table(quick_ref: &QuickReference, options: &PromptTableOptions) -> String {
    let entries: &[QuickRefEntry] = match &options.category {
        Some(category) => quick_ref
            .categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        None => &quick_ref.libraries,
    };

    let entries = match options.limit {
        Some(limit) => &entries[..limit.min(entries.len())],
        None => entries,
    };

    let mut table = String::from("| Name | Version | Category | CDN | Description |\n");
    table.push_str("|------|---------|----------|-----|-------------|\n");

    for entry in entries {
        table.push_str(&format!(
            "| {} | {} | {} | [CDN]({}) | {} |\n",
            entry.name, entry.version, entry.category, entry.cdn, entry.description
        ));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entry(id: &str, category: &str) -> QuickRefEntry {
        QuickRefEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            version: "1.0.0".to_string(),
            category: category.to_string(),
            cdn: format!("https://cdn.example.com/{id}.min.js"),
            description: format!("{id} library"),
        }
    }

    fn quick_ref() -> QuickReference {
        let libraries = vec![
            entry("axios", "http"),
            entry("gsap", "animation"),
            entry("chart-js", "charts"),
        ];
        let mut categories = BTreeMap::new();
        for lib in &libraries {
            categories
                .entry(lib.category.clone())
                .or_insert_with(Vec::new)
                .push(lib.clone());
        }
        QuickReference {
            version: "1.0".to_string(),
            updated: "2025-01-08".to_string(),
            libraries,
            categories,
        }
    }

    #[test]
    fn renders_all_entries_with_header() {
        let table = render_table(&quick_ref(), &PromptTableOptions::default());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "| Name | Version | Category | CDN | Description |");
        assert!(lines[2].contains("AXIOS"));
        assert!(lines[2].contains("[CDN](https://cdn.example.com/axios.min.js)"));
    }

    #[test]
    fn limit_truncates_after_filtering() {
        let options = PromptTableOptions {
            category: None,
            limit: Some(2),
        };
        let table = render_table(&quick_ref(), &options);
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn category_filter_selects_grouped_entries() {
        let options = PromptTableOptions {
            category: Some("animation".to_string()),
            limit: None,
        };
        let table = render_table(&quick_ref(), &options);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("GSAP"));
    }

    #[test]
    fn unknown_category_renders_empty_table() {
        let options = PromptTableOptions {
            category: Some("nonexistent-category".to_string()),
            limit: None,
        };
        let table = render_table(&quick_ref(), &options);
        assert_eq!(table.lines().count(), 2);
    }
}
