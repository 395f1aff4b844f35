use std::sync::Arc;

use anyhow::Result;
use rmcp::schemars::{self, JsonSchema};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, ListPromptsResult, PaginatedRequestParam,
        PromptMessage, PromptMessageRole, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::client::{DocsClient, PromptTableOptions};
use crate::docs::tools::{
    DocsTools, GetLibrariesByCategoryParams, GetLibraryDocsParams, SearchLibrariesParams,
};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct LibraryReferenceTableArgs {
    /// Restrict the table to one category's libraries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Keep only the first N rows after category filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct LibraryDocsService {
    client: Arc<DocsClient>,
    docs_tools: DocsTools,
    tool_router: ToolRouter<Self>,
}

impl LibraryDocsService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Arc::new(DocsClient::new(base_url));

        Ok(Self {
            docs_tools: DocsTools::new(client.clone()),
            client,
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_router]
impl LibraryDocsService {
    #[tool(
        description = "Search JavaScript libraries by name, id, description, or tags. Case-insensitive substring match; returns the full metadata record for every library matching on at least one field. Use this to discover which curated libraries cover a use case before fetching documentation."
    )]
    pub async fn search_libraries(&self, params: Parameters<SearchLibrariesParams>) -> String {
        self.docs_tools.search_libraries(params.0).await
    }

    #[tool(
        description = "Get the full markdown documentation for a specific library by id (e.g., 'axios', 'chart-js'). Documentation is fetched once and then served from the in-memory cache for the rest of the session. Use search_libraries first if you are unsure of the id."
    )]
    pub async fn get_library_docs(&self, params: Parameters<GetLibraryDocsParams>) -> String {
        self.docs_tools.get_library_docs(params.0).await
    }

    #[tool(
        description = "List all libraries in a specific category (e.g., 'animation', 'charts', 'slider-carousel'). Returns compact quick-reference entries with name, version, primary CDN URL, and description. An unknown or empty category returns an empty list."
    )]
    pub async fn get_libraries_by_category(
        &self,
        params: Parameters<GetLibrariesByCategoryParams>,
    ) -> String {
        self.docs_tools.get_libraries_by_category(params.0).await
    }
}

async fn library_reference_table_template(
    service: &LibraryDocsService,
    Parameters(args): Parameters<LibraryReferenceTableArgs>,
    _ctx: RequestContext<RoleServer>,
) -> Result<Vec<PromptMessage>, rmcp::Error> {
    if !service.client.is_initialized() {
        service.client.initialize().await.map_err(|e| {
            rmcp::Error::internal_error(format!("Failed to load library index: {e}"), None)
        })?;
    }

    let options = PromptTableOptions {
        category: args.category,
        limit: args.limit,
    };
    let table = service.client.prompt_table(&options).map_err(|e| {
        rmcp::Error::internal_error(format!("Failed to render reference table: {e}"), None)
    })?;

    Ok(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "The following JavaScript libraries are available via CDN. Prefer these when \
             generating frontend code:\n\n{table}"
        ),
    )])
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LibraryDocsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "library-docs-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                prompts: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "MCP server for curated JavaScript library documentation. Use search_libraries to discover libraries by keyword, get_libraries_by_category to browse one category, and get_library_docs to fetch the full markdown documentation for a library id. The library index loads on first use and documentation is cached in memory afterwards. The library_reference_table prompt embeds a compact reference table for system prompts.".to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, rmcp::Error> {
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: vec![rmcp::model::Prompt {
                name: "library_reference_table".to_string(),
                description: Some(
                    "Compact markdown table of curated libraries for embedding in a system prompt"
                        .to_string(),
                ),
                arguments: rmcp::handler::server::prompt::cached_arguments_from_schema::<
                    LibraryReferenceTableArgs,
                >(),
                title: None,
                icons: None,
            }],
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, rmcp::Error> {
        match request.name.as_str() {
            "library_reference_table" => {
                let args = match request.arguments {
                    Some(args_obj) => serde_json::from_value::<LibraryReferenceTableArgs>(
                        serde_json::Value::Object(args_obj),
                    )
                    .map_err(|e| {
                        rmcp::Error::invalid_params(format!("Invalid arguments: {}", e), None)
                    })?,
                    None => LibraryReferenceTableArgs {
                        category: None,
                        limit: None,
                    },
                };

                let messages =
                    library_reference_table_template(self, Parameters(args), context).await?;

                Ok(GetPromptResult {
                    description: None,
                    messages,
                })
            }
            _ => Err(rmcp::Error::invalid_params("Prompt not found", None)),
        }
    }
}
