use anyhow::Result;
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use library_docs_mcp::LibraryDocsService;
use library_docs_mcp::maintenance;

const DEFAULT_BASE_URL: &str = "https://llm-libs.github.io/awesome-js-libs";

/// MCP server for curated JavaScript library documentation with in-memory caching
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the static documentation host
    #[arg(long, env = "LIBRARY_DOCS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify that every CDN link in the index is accessible
    CheckLinks {
        /// Directory containing index.json and the markdown files
        #[arg(long, default_value = "docs")]
        docs_dir: PathBuf,
    },
    /// Derive quick-reference.json from index.json
    GenerateQuickRef {
        /// Directory containing index.json and the markdown files
        #[arg(long, default_value = "docs")]
        docs_dir: PathBuf,
    },
    /// Compare pinned library versions against the npm registry
    CheckVersions {
        /// Directory containing index.json and the markdown files
        #[arg(long, default_value = "docs")]
        docs_dir: PathBuf,
    },
    /// Validate index.json structure and referenced markdown files
    Validate {
        /// Directory containing index.json and the markdown files
        #[arg(long, default_value = "docs")]
        docs_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(command) = args.command {
        return handle_command(command).await;
    }

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting library docs MCP server on stdio...");
    tracing::info!("Documentation host: {}", args.base_url);

    let docs_service = LibraryDocsService::new(args.base_url)?;

    let service = docs_service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}

async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::CheckLinks { docs_dir } => maintenance::links::check_cdn_links(&docs_dir).await,
        Commands::GenerateQuickRef { docs_dir } => {
            maintenance::quickref::generate_quick_reference(&docs_dir).map(|_| ())
        }
        Commands::CheckVersions { docs_dir } => {
            maintenance::versions::check_versions(&docs_dir).await.map(|_| ())
        }
        Commands::Validate { docs_dir } => maintenance::validate::run(&docs_dir),
    }
}
