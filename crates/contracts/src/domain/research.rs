use serde::{Deserialize, Serialize};

/// Feature tile on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Headline figure of the home page stats strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchObjective {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Gradient classes of the icon tile
    pub color: String,
}

/// Group of technologies listed under one heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechGroup {
    pub label: String,
    pub icon: String,
    pub items: Vec<String>,
}

/// Architecture diagram with a download link to the full image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    pub caption: String,
    pub image_ref: String,
    pub alt: String,
}

/// One heading of a modal body: an optional paragraph and bullet points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSection {
    pub heading: String,
    pub paragraph: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

/// Summary card plus the full text shown in the corresponding modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchDetail {
    pub title: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub sections: Vec<DetailSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchContent {
    pub objectives: Vec<ResearchObjective>,
    pub tech_groups: Vec<TechGroup>,
    pub diagrams: Vec<Diagram>,
    pub gap: ResearchDetail,
    pub problem: ResearchDetail,
}
