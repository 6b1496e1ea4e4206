use super::filter::CategoryFilter;
use crate::domain::{Milestone, MilestoneCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Timeline,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Timeline => ViewMode::Table,
            ViewMode::Table => ViewMode::Timeline,
        }
    }
}

/// Display state of the milestones page: layout plus category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MilestoneBoard {
    view_mode: ViewMode,
    filter: CategoryFilter<MilestoneCategory>,
}

impl MilestoneBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn filter(&self) -> CategoryFilter<MilestoneCategory> {
        self.filter
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn set_filter(&mut self, filter: CategoryFilter<MilestoneCategory>) {
        self.filter = filter;
    }

    /// Applies a `<select>` value; unknown values select everything.
    pub fn set_filter_code(&mut self, code: &str) {
        self.filter = CategoryFilter::from_code(code, MilestoneCategory::from_code);
    }

    pub fn filter_code(&self) -> &'static str {
        self.filter.code_with(MilestoneCategory::code)
    }

    /// Milestones to render, in list order. Both layouts use the same list.
    pub fn visible<'a>(&self, milestones: &'a [Milestone]) -> Vec<&'a Milestone> {
        self.filter.apply(milestones)
    }

    pub fn reconcile(&mut self, milestones: &[Milestone]) {
        self.filter.reconcile(milestones);
    }

    /// `(value, label)` pairs for the category select
    pub fn filter_options() -> Vec<(String, String)> {
        std::iter::once((super::filter::ALL_CODE.to_string(), "All Types".to_string()))
            .chain(MilestoneCategory::all().into_iter().map(|c| {
                (c.code().to_string(), c.display_name().to_string())
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_defaults() {
        let board = MilestoneBoard::new();
        assert_eq!(board.view_mode(), ViewMode::Timeline);
        assert_eq!(board.filter(), CategoryFilter::All);
        assert_eq!(board.filter_code(), "all");
    }

    #[test]
    fn test_view_mode_is_independent_of_filter() {
        let mut board = MilestoneBoard::new();
        board.set_filter(CategoryFilter::Only(MilestoneCategory::Report));
        board.toggle_view_mode();
        assert_eq!(board.view_mode(), ViewMode::Table);
        assert_eq!(board.filter(), CategoryFilter::Only(MilestoneCategory::Report));
        board.set_view_mode(ViewMode::Timeline);
        assert_eq!(board.filter(), CategoryFilter::Only(MilestoneCategory::Report));
    }

    #[test]
    fn test_reports_from_embedded_content() {
        let milestones = &content::load().unwrap().milestones;
        let mut board = MilestoneBoard::new();
        board.set_filter_code("report");

        let names: Vec<_> = board.visible(milestones).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Proposal Report",
                "Final Report",
                "Final Report (Group)",
                "Progress Reports"
            ]
        );
    }

    #[test]
    fn test_all_yields_original_list() {
        let milestones = &content::load().unwrap().milestones;
        let mut board = MilestoneBoard::new();
        board.set_filter_code("viva");
        board.set_filter_code("all");
        let visible = board.visible(milestones);
        assert_eq!(visible.len(), milestones.len());
        assert!(visible.iter().zip(milestones.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_list_is_not_sorted_by_date() {
        let milestones = &content::load().unwrap().milestones;
        let board = MilestoneBoard::new();
        let visible = board.visible(milestones);
        // "Research Paper" (March 2025) stays after "Website" (June 2025).
        let paper = visible.iter().position(|m| m.name == "Research Paper").unwrap();
        let website = visible.iter().position(|m| m.name == "Website").unwrap();
        assert!(website < paper);
    }

    #[test]
    fn test_category_without_milestones_stays_selected_and_empty() {
        let milestones = &content::load().unwrap().milestones;
        let mut board = MilestoneBoard::new();
        board.set_filter_code("submission");
        assert_eq!(board.filter(), CategoryFilter::Only(MilestoneCategory::Submission));
        assert!(board.visible(milestones).is_empty());
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = MilestoneBoard::filter_options();
        assert_eq!(options[0], ("all".to_string(), "All Types".to_string()));
        assert_eq!(options.len(), 1 + MilestoneCategory::all().len());
    }
}
