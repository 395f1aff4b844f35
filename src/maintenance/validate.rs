//! Index validator
//!
//! Structural validation of `index.json` plus an existence check for every
//! referenced markdown file. Parsing into the strict wire-format types
//! already rejects missing or mistyped fields; the checks here cover what
//! the type system cannot express.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Result, bail};

use crate::maintenance::load_index;

/// Collect every problem found in the index at `docs_dir`
pub fn validate_index(docs_dir: &Path) -> Result<Vec<String>> {
    let index = load_index(docs_dir)?;
    let mut problems = Vec::new();
    let mut seen_ids = HashSet::new();

    for lib in &index.libraries {
        let label = if lib.id.is_empty() { &lib.name } else { &lib.id };

        if lib.id.is_empty() {
            problems.push(format!("{label}: empty id"));
        } else if !seen_ids.insert(lib.id.as_str()) {
            problems.push(format!("{label}: duplicate id"));
        }

        if lib.name.is_empty() {
            problems.push(format!("{label}: empty name"));
        }
        if lib.description.is_empty() {
            problems.push(format!("{label}: empty description"));
        }
        if lib.category.is_empty() {
            problems.push(format!("{label}: empty category"));
        }

        if semver::Version::parse(&lib.version).is_err() {
            problems.push(format!("{label}: version '{}' is not semver", lib.version));
        }

        if !lib.cdn.js.starts_with("https://") {
            problems.push(format!("{label}: cdn.js is not an https URL: {}", lib.cdn.js));
        }
        if let Some(css) = &lib.cdn.css
            && !css.starts_with("https://")
        {
            problems.push(format!("{label}: cdn.css is not an https URL: {css}"));
        }

        if lib.docs.local.is_empty() {
            problems.push(format!("{label}: empty docs.local path"));
        } else if !docs_dir.join(&lib.docs.local).exists() {
            problems.push(format!("{label}: missing markdown file {}", lib.docs.local));
        }
    }

    Ok(problems)
}

/// Run validation, printing diagnostics and failing on any problem
pub fn run(docs_dir: &Path) -> Result<()> {
    println!("Validating index.json...");

    let problems = validate_index(docs_dir)?;
    if !problems.is_empty() {
        eprintln!("❌ Validation failed!\n");
        for problem in &problems {
            eprintln!("  ❌ {problem}");
        }
        bail!("{} validation problems found", problems.len());
    }

    let index = load_index(docs_dir)?;
    println!("✅ All validations passed!");
    println!("✅ {} libraries validated", index.libraries.len());
    println!("✅ All markdown files exist");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn library(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": id.to_uppercase(),
            "version": "1.2.3",
            "description": format!("{id} library"),
            "tags": ["tag"],
            "category": "utilities",
            "cdn": { "js": format!("https://cdn.example.com/{id}.min.js") },
            "docs": { "local": format!("libraries/{id}.md") }
        })
    }

    fn write_index(dir: &Path, libraries: &[serde_json::Value]) {
        let index = json!({
            "version": "1.0",
            "updated": "2025-01-08",
            "libraries": libraries,
        });
        std::fs::write(dir.join("index.json"), index.to_string()).unwrap();
    }

    fn write_markdown(dir: &Path, id: &str) {
        let libraries = dir.join("libraries");
        std::fs::create_dir_all(&libraries).unwrap();
        std::fs::write(libraries.join(format!("{id}.md")), "# docs").unwrap();
    }

    #[test]
    fn clean_index_has_no_problems() {
        let dir = tempfile::tempdir().unwrap();
        write_index(dir.path(), &[library("axios")]);
        write_markdown(dir.path(), "axios");

        assert!(validate_index(dir.path()).unwrap().is_empty());
        assert!(run(dir.path()).is_ok());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_index(dir.path(), &[library("axios"), library("axios")]);
        write_markdown(dir.path(), "axios");

        let problems = validate_index(dir.path()).unwrap();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("duplicate id"));
    }

    #[test]
    fn missing_markdown_and_bad_version_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = library("gsap");
        lib["version"] = json!("latest");
        write_index(dir.path(), &[lib]);

        let problems = validate_index(dir.path()).unwrap();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("not semver")));
        assert!(problems.iter().any(|p| p.contains("missing markdown")));
        assert!(run(dir.path()).is_err());
    }

    #[test]
    fn structurally_invalid_index_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.json"),
            r#"{"version":"1.0","libraries":[{"id":"x"}]}"#,
        )
        .unwrap();

        assert!(validate_index(dir.path()).is_err());
    }
}
