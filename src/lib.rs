pub mod client;
pub mod docs;
pub mod maintenance;
pub mod service;

pub use client::DocsClient;
pub use service::LibraryDocsService;
