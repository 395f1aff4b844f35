//! MCP tool implementations over the documentation client
//!
//! Tools lazily initialize the client on first use, so a cold server can
//! answer its first tool call without a separate initialization step.
//! Errors are rendered as `{"error": ...}` response data rather than
//! protocol failures.

use std::sync::Arc;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::client::{ClientError, DocsClient};
use crate::docs::outputs::{
    CategoryLibrariesOutput, DocsErrorOutput, LibraryDocsOutput, SearchLibrariesOutput,
};

/// The fixed set of category labels used by the curated index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryCategory {
    Http,
    Animation,
    Charts,
    UiFramework,
    SliderCarousel,
    Forms,
    Maps,
    Media,
    Utilities,
    #[serde(rename = "3d-graphics")]
    ThreeDGraphics,
    TouchGestures,
    Notifications,
    DateTime,
    DragDrop,
    ModalsAlerts,
    LazyLoading,
    SyntaxHighlighting,
    LightboxGallery,
    Scrolling,
    Validation,
}

impl LibraryCategory {
    /// The category label as it appears in the manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Animation => "animation",
            Self::Charts => "charts",
            Self::UiFramework => "ui-framework",
            Self::SliderCarousel => "slider-carousel",
            Self::Forms => "forms",
            Self::Maps => "maps",
            Self::Media => "media",
            Self::Utilities => "utilities",
            Self::ThreeDGraphics => "3d-graphics",
            Self::TouchGestures => "touch-gestures",
            Self::Notifications => "notifications",
            Self::DateTime => "date-time",
            Self::DragDrop => "drag-drop",
            Self::ModalsAlerts => "modals-alerts",
            Self::LazyLoading => "lazy-loading",
            Self::SyntaxHighlighting => "syntax-highlighting",
            Self::LightboxGallery => "lightbox-gallery",
            Self::Scrolling => "scrolling",
            Self::Validation => "validation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchLibrariesParams {
    #[schemars(description = "Search term matched against name, id, description, and tags")]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLibraryDocsParams {
    #[schemars(description = "Library id (e.g., 'axios', 'chart-js')")]
    pub library_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLibrariesByCategoryParams {
    #[schemars(description = "Category label to list libraries for")]
    pub category: LibraryCategory,
}

/// Tool methods backed by the shared [`DocsClient`]
#[derive(Debug, Clone)]
pub struct DocsTools {
    client: Arc<DocsClient>,
}

impl DocsTools {
    pub fn new(client: Arc<DocsClient>) -> Self {
        Self { client }
    }

    /// Load the manifests if this client has not been initialized yet
    async fn ensure_initialized(&self) -> Result<(), ClientError> {
        if self.client.is_initialized() {
            return Ok(());
        }
        self.client.initialize().await
    }

    pub async fn search_libraries(&self, params: SearchLibrariesParams) -> String {
        if let Err(e) = self.ensure_initialized().await {
            return DocsErrorOutput::new(e.to_string()).to_json();
        }

        match self.client.search(&params.query) {
            Ok(libraries) => SearchLibrariesOutput {
                query: params.query,
                total: libraries.len(),
                libraries,
            }
            .to_json(),
            Err(e) => DocsErrorOutput::new(e.to_string()).to_json(),
        }
    }

    pub async fn get_library_docs(&self, params: GetLibraryDocsParams) -> String {
        if let Err(e) = self.ensure_initialized().await {
            return DocsErrorOutput::new(e.to_string()).to_json();
        }

        match self.client.get_docs(&params.library_id).await {
            Ok(doc) => LibraryDocsOutput {
                id: doc.id.clone(),
                name: doc.name.clone(),
                version: doc.version.clone(),
                markdown: doc.markdown.clone(),
            }
            .to_json(),
            Err(e) => DocsErrorOutput::new(e.to_string()).to_json(),
        }
    }

    pub async fn get_libraries_by_category(
        &self,
        params: GetLibrariesByCategoryParams,
    ) -> String {
        if let Err(e) = self.ensure_initialized().await {
            return DocsErrorOutput::new(e.to_string()).to_json();
        }

        let category = params.category.as_str();
        match self.client.get_by_category(category) {
            Ok(libraries) => CategoryLibrariesOutput {
                category: category.to_string(),
                total: libraries.len(),
                libraries,
            }
            .to_json(),
            Err(e) => DocsErrorOutput::new(e.to_string()).to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&LibraryCategory::ThreeDGraphics).unwrap();
        assert_eq!(json, r#""3d-graphics""#);

        let parsed: LibraryCategory = serde_json::from_str(r#""ui-framework""#).unwrap();
        assert_eq!(parsed, LibraryCategory::UiFramework);
        assert_eq!(parsed.as_str(), "ui-framework");
    }

    #[test]
    fn category_as_str_matches_serde_rename() {
        for category in [
            LibraryCategory::Http,
            LibraryCategory::SliderCarousel,
            LibraryCategory::DateTime,
            LibraryCategory::SyntaxHighlighting,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
