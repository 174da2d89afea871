//! MCP (Model Context Protocol) server for the icon catalog
//!
//! Lets chat-style assistants search icons, inspect entries and resolve icon
//! names for post generation.
//!
//! The server runs in two modes:
//!
//! 1. **stdio**: `iconkit serve`, one client per process
//! 2. **streamable HTTP**: mounted at `/mcp` by `iconkit serve --http`,
//!    sharing the catalog handle with the REST API

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    CatalogEntry, CatalogHandle, IconSummary, SearchQuery, resolve_icons, search,
};
use crate::indexing::IconIndexer;

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SearchIconsRequest {
    /// Free-text query matched against names, display names, categories and tags
    #[serde(default)]
    pub query: String,
    /// Category filter (e.g., "ai", "dev", "design"); "all" or omitted for every category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Maximum number of results (default: icons.default_limit, 50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetIconRequest {
    /// Icon name (file base name without variation suffix)
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ResolveIconsRequest {
    /// Icon names to look up; unknown names are skipped
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct EmptyRequest {}

fn format_entry_line(entry: &CatalogEntry) -> String {
    let variations: Vec<&str> = entry.variations.iter().map(|v| v.as_str()).collect();
    format!(
        "- {} ({}) [{}] variations: {}",
        entry.display_name,
        entry.name,
        entry.category,
        variations.join(", ")
    )
}

#[derive(Clone)]
pub struct IconCatalogServer {
    handle: CatalogHandle,
    indexer: IconIndexer,
    default_limit: usize,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl IconCatalogServer {
    pub fn new(handle: CatalogHandle, indexer: IconIndexer, default_limit: usize) -> Self {
        Self {
            handle,
            indexer,
            default_limit,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Search the icon catalog by free text and optional category")]
    pub async fn search_icons(
        &self,
        Parameters(SearchIconsRequest {
            query,
            category,
            limit,
        }): Parameters<SearchIconsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.handle.snapshot();
        let request = SearchQuery {
            query: query.clone(),
            category,
            limit: Some(limit.map_or(self.default_limit, |l| l as usize)),
            offset: 0,
        };
        let results = search(&catalog, &request);

        if results.items.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "No icons found for query: '{query}'. Try 'list_categories' to see what is indexed."
            ))]));
        }

        let mut output = format!(
            "Found {} icon(s), showing {}:\n\n",
            results.total,
            results.items.len()
        );
        for entry in &results.items {
            output.push_str(&format_entry_line(entry));
            output.push('\n');
        }

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    #[tool(description = "Get the full catalog entry for one icon as JSON")]
    pub async fn get_icon(
        &self,
        Parameters(GetIconRequest { name }): Parameters<GetIconRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.handle.snapshot();

        match catalog.get(&name) {
            Some(entry) => {
                let json = serde_json::to_string_pretty(entry)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            None => Ok(CallToolResult::error(vec![Content::text(format!(
                "Icon not found: {name}"
            ))])),
        }
    }

    #[tool(description = "List icon categories with the number of icons in each")]
    pub async fn list_categories(
        &self,
        Parameters(_params): Parameters<EmptyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.handle.snapshot();

        let mut output = String::from("Categories:\n");
        for (category, count) in catalog.category_counts() {
            output.push_str(&format!("  - {category}: {count}\n"));
        }

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    #[tool(description = "Get information about the indexed icon directory")]
    pub async fn get_catalog_info(
        &self,
        Parameters(_params): Parameters<EmptyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.handle.snapshot();
        let variations: usize = catalog.entries().iter().map(|e| e.variations.len()).sum();

        let result = format!(
            "Catalog contains {} icons ({} files) from {}.\nSource: {:?}\nCategories: {}",
            catalog.len(),
            variations,
            self.indexer.location().display(),
            catalog.source(),
            catalog.category_counts().len()
        );

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    #[tool(description = "Rescan the icon directory and replace the catalog")]
    pub async fn rescan_icons(
        &self,
        Parameters(_params): Parameters<EmptyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let indexer = self.indexer.clone();
        let catalog = tokio::task::spawn_blocking(move || indexer.build())
            .await
            .map_err(|e| McpError::internal_error(format!("rescan failed: {e}"), None))?;

        let snapshot = self.handle.replace(catalog);
        crate::log_event!("mcp", "rescan", "{} icons", snapshot.len());

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Rescanned: {} icons ({:?})",
            snapshot.len(),
            snapshot.source()
        ))]))
    }

    #[tool(
        description = "Resolve icon names to display names and categories for post text. Unknown names are skipped."
    )]
    pub async fn resolve_icons(
        &self,
        Parameters(ResolveIconsRequest { names }): Parameters<ResolveIconsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.handle.snapshot();
        let resolved: Vec<IconSummary> = resolve_icons(&catalog, &names)
            .into_iter()
            .map(IconSummary::from)
            .collect();

        let json = serde_json::to_string_pretty(&resolved)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for IconCatalogServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::default();
        server_info.name = "iconkit".to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();
        server_info.title = Some("iconkit Icon Catalog".to_string());
        server_info.website_url = None;
        server_info.icons = None;

        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = server_info;
        info.instructions = Some(
            "This server exposes a catalog of SVG brand icons. \
            Use 'search_icons' to find icons by name, tag or category, \
            'get_icon' for the full entry with variation paths, \
            and 'resolve_icons' to turn a list of names into display names for post text. \
            Use 'list_categories' and 'get_catalog_info' to see what is indexed."
                .to_string(),
        );
        info
    }
}

/// Build the catalog and serve MCP over stdio until the client disconnects.
pub async fn serve_stdio(settings: &crate::Settings) -> anyhow::Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    let indexer = IconIndexer::from_settings(settings);
    let build_indexer = indexer.clone();
    let catalog = tokio::task::spawn_blocking(move || build_indexer.build()).await?;
    crate::log_event!(
        "mcp",
        "catalog ready",
        "{} icons ({:?}) from {}",
        catalog.len(),
        catalog.source(),
        indexer.location().display()
    );

    let server = IconCatalogServer::new(
        CatalogHandle::new(catalog),
        indexer,
        settings.icons.default_limit,
    );
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
