//! MCP tool surface for library documentation queries

pub mod outputs;
pub mod tools;

pub use tools::DocsTools;
