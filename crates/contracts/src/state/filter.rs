//! Stable category filtering shared by the milestone and document lists.

use std::fmt::Debug;

/// A record tagged with a category
pub trait Categorized {
    type Category: Copy + Eq + Debug;

    fn category(&self) -> Self::Category;
}

/// Either every item or only the items of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Option value used for [`CategoryFilter::All`] in selects and buttons
pub const ALL_CODE: &str = "all";

impl<C: Copy + Eq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// Items passing the filter, in their original order
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items
            .iter()
            .filter(|item| self.matches(item.category()))
            .collect()
    }

    /// Falls back to `All` when the selected category has no items left.
    pub fn reconcile<T>(&mut self, items: &[T])
    where
        T: Categorized<Category = C>,
    {
        if let CategoryFilter::Only(selected) = *self {
            if !items.iter().any(|item| item.category() == selected) {
                *self = CategoryFilter::All;
            }
        }
    }

    /// Parses an option value. Unknown codes fall back to `All`.
    pub fn from_code(code: &str, parse: impl Fn(&str) -> Option<C>) -> Self {
        if code == ALL_CODE {
            return CategoryFilter::All;
        }
        parse(code).map(CategoryFilter::Only).unwrap_or_default()
    }

    /// Option value for this filter
    pub fn code_with(&self, code: impl Fn(&C) -> &'static str) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CODE,
            CategoryFilter::Only(c) => code(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Document, DocumentCategory, Milestone, MilestoneCategory};

    fn milestone(id: &str, category: MilestoneCategory) -> Milestone {
        Milestone {
            id: id.to_string(),
            name: format!("Milestone {}", id),
            marks: 5,
            date: String::new(),
            category,
            description: String::new(),
        }
    }

    fn sample() -> Vec<Milestone> {
        use MilestoneCategory::*;
        vec![
            milestone("1", Presentation),
            milestone("2", Report),
            milestone("3", Presentation),
            milestone("4", Viva),
            milestone("5", Report),
        ]
    }

    fn ids(items: &[&Milestone]) -> Vec<String> {
        items.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_full_list() {
        let list = sample();
        let visible = CategoryFilter::All.apply(&list);
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_only_is_stable() {
        let list = sample();
        let visible = CategoryFilter::Only(MilestoneCategory::Report).apply(&list);
        assert_eq!(ids(&visible), vec!["2", "5"]);

        let visible = CategoryFilter::Only(MilestoneCategory::Presentation).apply(&list);
        assert_eq!(ids(&visible), vec!["1", "3"]);
    }

    #[test]
    fn test_category_without_items_yields_nothing() {
        let list = sample();
        assert!(CategoryFilter::Only(MilestoneCategory::Logbook)
            .apply(&list)
            .is_empty());
    }

    #[test]
    fn test_reconcile_resets_dangling_category() {
        let mut list = sample();
        let mut filter = CategoryFilter::Only(MilestoneCategory::Viva);
        filter.reconcile(&list);
        assert_eq!(filter, CategoryFilter::Only(MilestoneCategory::Viva));

        list.retain(|m| m.category != MilestoneCategory::Viva);
        filter.reconcile(&list);
        assert_eq!(filter, CategoryFilter::All);
    }

    #[test]
    fn test_from_code() {
        let parse = MilestoneCategory::from_code;
        assert_eq!(CategoryFilter::from_code("all", parse), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_code("paper", parse),
            CategoryFilter::Only(MilestoneCategory::Paper)
        );
        assert_eq!(CategoryFilter::from_code("bogus", parse), CategoryFilter::All);
    }

    #[test]
    fn test_documents_filter() {
        let doc = |id: &str, category| Document {
            id: id.to_string(),
            title: id.to_string(),
            category,
            description: String::new(),
            download_link: "#".to_string(),
        };
        let docs = vec![
            doc("1", DocumentCategory::Proposals),
            doc("2", DocumentCategory::Logs),
            doc("3", DocumentCategory::Proposals),
        ];
        let visible = CategoryFilter::Only(DocumentCategory::Proposals).apply(&docs);
        let titles: Vec<_> = visible.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(titles, vec!["1", "3"]);
        assert_eq!(
            CategoryFilter::Only(DocumentCategory::Logs).code_with(DocumentCategory::code),
            "logs"
        );
    }
}
