//! Site content embedded at compile time.
//!
//! Every list the pages render lives in `content/*.json`. The files are parsed
//! once, on first access. A parse or validation failure is kept in
//! [`load_error`] and the site renders from an empty catalog instead of
//! panicking inside the browser.

use crate::domain::{
    CarouselItem, Document, HomeContent, LiteratureEntry, Milestone, NavigationItem,
    Presentation, ResearchContent, Team,
};
use anyhow::{bail, Context, Result};
use once_cell::sync::{Lazy, OnceCell};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const NAVIGATION_JSON: &str = include_str!("../content/navigation.json");
const LITERATURE_JSON: &str = include_str!("../content/literature.json");
const SHOWCASE_JSON: &str = include_str!("../content/showcase.json");
const MILESTONES_JSON: &str = include_str!("../content/milestones.json");
const DOCUMENTS_JSON: &str = include_str!("../content/documents.json");
const PRESENTATIONS_JSON: &str = include_str!("../content/presentations.json");
const TEAM_JSON: &str = include_str!("../content/team.json");
const HOME_JSON: &str = include_str!("../content/home.json");
const RESEARCH_JSON: &str = include_str!("../content/research.json");

/// All static records shown on the site
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub navigation: Vec<NavigationItem>,
    pub literature: Vec<LiteratureEntry>,
    pub showcase: Vec<CarouselItem>,
    pub milestones: Vec<Milestone>,
    pub documents: Vec<Document>,
    pub presentations: Vec<Presentation>,
    pub team: Team,
    pub home: HomeContent,
    pub research: ResearchContent,
}

static LOAD_ERROR: OnceCell<String> = OnceCell::new();

static SITE: Lazy<SiteContent> = Lazy::new(|| match load() {
    Ok(content) => content,
    Err(e) => {
        let _ = LOAD_ERROR.set(format!("{:#}", e));
        SiteContent::default()
    }
});

/// The parsed catalog. Empty when the embedded content failed to load.
pub fn site() -> &'static SiteContent {
    &SITE
}

/// Reason the embedded content could not be loaded, if it could not.
pub fn load_error() -> Option<&'static str> {
    Lazy::force(&SITE);
    LOAD_ERROR.get().map(String::as_str)
}

/// Parses and validates every content file.
pub fn load() -> Result<SiteContent> {
    let content = SiteContent {
        navigation: parse("navigation.json", NAVIGATION_JSON)?,
        literature: parse("literature.json", LITERATURE_JSON)?,
        showcase: parse("showcase.json", SHOWCASE_JSON)?,
        milestones: parse("milestones.json", MILESTONES_JSON)?,
        documents: parse("documents.json", DOCUMENTS_JSON)?,
        presentations: parse("presentations.json", PRESENTATIONS_JSON)?,
        team: parse("team.json", TEAM_JSON)?,
        home: parse("home.json", HOME_JSON)?,
        research: parse("research.json", RESEARCH_JSON)?,
    };
    validate(&content)?;
    Ok(content)
}

fn parse<T: DeserializeOwned>(file: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("failed to parse content/{}", file))
}

/// Checks the invariants the pages rely on.
pub fn validate(content: &SiteContent) -> Result<()> {
    for item in &content.navigation {
        if item.route().is_none() {
            bail!(
                "navigation item '{}' points at unknown path '{}'",
                item.label,
                item.path
            );
        }
    }

    ensure_unique_ids("milestones", content.milestones.iter().map(|m| m.id.as_str()))?;
    ensure_unique_ids("documents", content.documents.iter().map(|d| d.id.as_str()))?;

    if let Some(m) = content.milestones.iter().find(|m| m.marks > 100) {
        bail!("milestone '{}' has {} marks, expected at most 100", m.name, m.marks);
    }

    Ok(())
}

fn ensure_unique_ids<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate id '{}' in {}", id, list);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MilestoneCategory, SiteRoute};

    #[test]
    fn test_embedded_content_loads() {
        let content = load().expect("embedded content must parse");
        assert_eq!(content.navigation.len(), 6);
        assert_eq!(content.literature.len(), 6);
        assert_eq!(content.milestones.len(), 12);
        assert_eq!(content.documents.len(), 8);
        assert_eq!(content.team.members.len(), 3);
        assert!(!content.showcase.is_empty());
        assert_eq!(content.research.gap.sections.len(), 4);
        assert!(load_error().is_none());
    }

    #[test]
    fn test_presentations_route_is_not_in_navbar() {
        let content = load().unwrap();
        assert!(content
            .navigation
            .iter()
            .all(|item| item.route() != Some(SiteRoute::Presentations)));
    }

    #[test]
    fn test_milestones_keep_source_order() {
        let content = load().unwrap();
        let ids: Vec<_> = content.milestones.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"1"));
        assert_eq!(ids.last(), Some(&"12"));
        assert_eq!(content.milestones[7].category, MilestoneCategory::Viva);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut content = load().unwrap();
        let copy = content.documents[0].clone();
        content.documents.push(copy);
        let err = validate(&content).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_validate_rejects_unknown_nav_path() {
        let mut content = load().unwrap();
        content.navigation[0].path = "/nowhere".to_string();
        assert!(validate(&content).is_err());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse::<Vec<Document>>("documents.json", "[{").unwrap_err();
        assert!(format!("{:#}", err).contains("content/documents.json"));
    }
}
