use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub title: String,
    pub date: String,
    pub description: String,
    pub download_link: String,
}
