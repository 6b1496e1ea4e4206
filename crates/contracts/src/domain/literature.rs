use serde::{Deserialize, Serialize};

/// Reference shown in the literature survey strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureEntry {
    pub title: String,
    pub source: String,
    pub summary: String,
    pub year: u16,
}
