use serde::{Deserialize, Serialize};

/// Client-side routes of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteRoute {
    Home,
    Domain,
    Milestones,
    Documents,
    Presentations,
    AboutUs,
    Contact,
}

impl SiteRoute {
    /// URL path the route is mounted at
    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Domain => "/domain",
            SiteRoute::Milestones => "/milestones",
            SiteRoute::Documents => "/documents",
            SiteRoute::Presentations => "/presentations",
            SiteRoute::AboutUs => "/about",
            SiteRoute::Contact => "/contact",
        }
    }

    /// Human readable page title
    pub fn title(&self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::Domain => "Research Domain",
            SiteRoute::Milestones => "Project Milestones",
            SiteRoute::Documents => "Project Documents",
            SiteRoute::Presentations => "Presentation Slides",
            SiteRoute::AboutUs => "About Us",
            SiteRoute::Contact => "Contact Us",
        }
    }

    pub fn all() -> [SiteRoute; 7] {
        [
            SiteRoute::Home,
            SiteRoute::Domain,
            SiteRoute::Milestones,
            SiteRoute::Documents,
            SiteRoute::Presentations,
            SiteRoute::AboutUs,
            SiteRoute::Contact,
        ]
    }

    /// Resolves a pathname to a route. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = normalize(path);
        Self::all()
            .into_iter()
            .find(|route| route.path() == normalized)
    }

    /// Whether a navigation link to this route should be highlighted for `pathname`.
    pub fn is_active(&self, pathname: &str) -> bool {
        Self::from_path(pathname) == Some(*self)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Entry of the top navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub path: String,
}

impl NavigationItem {
    pub fn route(&self) -> Option<SiteRoute> {
        SiteRoute::from_path(&self.path)
    }

    pub fn is_active(&self, pathname: &str) -> bool {
        self.route().is_some_and(|route| route.is_active(pathname))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_from_its_path() {
        for route in SiteRoute::all() {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = SiteRoute::all().iter().map(|r| r.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 7);
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash_and_query() {
        assert_eq!(SiteRoute::from_path("/domain/"), Some(SiteRoute::Domain));
        assert_eq!(SiteRoute::from_path("/about?tab=team"), Some(SiteRoute::AboutUs));
        assert_eq!(SiteRoute::from_path(""), Some(SiteRoute::Home));
        assert_eq!(SiteRoute::from_path("/unknown"), None);
    }

    #[test]
    fn test_home_is_not_active_on_other_pages() {
        assert!(SiteRoute::Home.is_active("/"));
        assert!(!SiteRoute::Home.is_active("/milestones"));
        assert!(SiteRoute::Milestones.is_active("/milestones"));
    }

    #[test]
    fn test_navigation_item_activity() {
        let item = NavigationItem {
            label: "Contact".to_string(),
            path: "/contact".to_string(),
        };
        assert!(item.is_active("/contact"));
        assert!(!item.is_active("/"));
    }
}
