use crate::state::filter::Categorized;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Proposals,
    Presentations,
    Reports,
    Checklist,
    Logs,
}

impl DocumentCategory {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentCategory::Proposals => "proposals",
            DocumentCategory::Presentations => "presentations",
            DocumentCategory::Reports => "reports",
            DocumentCategory::Checklist => "checklist",
            DocumentCategory::Logs => "logs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentCategory::Proposals => "Proposals",
            DocumentCategory::Presentations => "Presentations",
            DocumentCategory::Reports => "Reports",
            DocumentCategory::Checklist => "Checklist",
            DocumentCategory::Logs => "Logs",
        }
    }

    /// Icon name understood by the frontend `icon()` helper
    pub fn icon(&self) -> &'static str {
        match self {
            DocumentCategory::Presentations => "folder",
            _ => "document",
        }
    }

    pub fn all() -> Vec<DocumentCategory> {
        vec![
            DocumentCategory::Proposals,
            DocumentCategory::Presentations,
            DocumentCategory::Reports,
            DocumentCategory::Checklist,
            DocumentCategory::Logs,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Downloadable project document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: DocumentCategory,
    pub description: String,
    pub download_link: String,
}

impl Categorized for Document {
    type Category = DocumentCategory;

    fn category(&self) -> DocumentCategory {
        self.category
    }
}
