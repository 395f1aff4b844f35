//! Output types for the documentation tools
//!
//! These types are the return values of the docs tool methods. They are
//! serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::client::types::{LibraryMeta, QuickRefEntry};

/// Output from the search_libraries operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchLibrariesOutput {
    pub query: String,
    pub total: usize,
    pub libraries: Vec<LibraryMeta>,
}

impl SearchLibrariesOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the get_library_docs operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LibraryDocsOutput {
    pub id: String,
    pub name: String,
    pub version: String,
    pub markdown: String,
}

impl LibraryDocsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the get_libraries_by_category operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryLibrariesOutput {
    pub category: String,
    pub total: usize,
    pub libraries: Vec<QuickRefEntry>,
}

impl CategoryLibrariesOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Generic error output for docs tools
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocsErrorOutput {
    pub error: String,
}

impl DocsErrorOutput {
    /// Create a new error output
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_output_serialization() {
        let output = SearchLibrariesOutput {
            query: "chart".to_string(),
            total: 0,
            libraries: vec![],
        };

        let json = output.to_json();
        let deserialized: SearchLibrariesOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output, deserialized);
    }

    #[test]
    fn error_output_carries_message() {
        let output = DocsErrorOutput::new("library not found: nope");
        let json = output.to_json();
        assert!(json.contains("library not found: nope"));
    }
}
