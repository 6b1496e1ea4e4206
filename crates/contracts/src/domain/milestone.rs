use crate::state::filter::Categorized;
use serde::{Deserialize, Serialize};

/// Assessment kind of a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneCategory {
    Presentation,
    Report,
    Submission,
    Viva,
    Website,
    Paper,
    Logbook,
}

impl MilestoneCategory {
    /// Code used in JSON and in `<select>` option values
    pub fn code(&self) -> &'static str {
        match self {
            MilestoneCategory::Presentation => "presentation",
            MilestoneCategory::Report => "report",
            MilestoneCategory::Submission => "submission",
            MilestoneCategory::Viva => "viva",
            MilestoneCategory::Website => "website",
            MilestoneCategory::Paper => "paper",
            MilestoneCategory::Logbook => "logbook",
        }
    }

    /// Label of the filter option
    pub fn display_name(&self) -> &'static str {
        match self {
            MilestoneCategory::Presentation => "Presentations",
            MilestoneCategory::Report => "Reports",
            MilestoneCategory::Submission => "Submissions",
            MilestoneCategory::Viva => "Viva",
            MilestoneCategory::Website => "Website",
            MilestoneCategory::Paper => "Research Paper",
            MilestoneCategory::Logbook => "Logbook",
        }
    }

    /// Icon name understood by the frontend `icon()` helper
    pub fn icon(&self) -> &'static str {
        match self {
            MilestoneCategory::Presentation => "presentation",
            MilestoneCategory::Report | MilestoneCategory::Paper => "document",
            MilestoneCategory::Viva => "academic",
            MilestoneCategory::Website => "globe",
            MilestoneCategory::Logbook => "book",
            MilestoneCategory::Submission => "clipboard",
        }
    }

    /// Badge colour modifier
    pub fn color_class(&self) -> &'static str {
        match self {
            MilestoneCategory::Presentation => "tone--blue",
            MilestoneCategory::Report => "tone--green",
            MilestoneCategory::Viva => "tone--purple",
            MilestoneCategory::Website => "tone--indigo",
            MilestoneCategory::Paper => "tone--yellow",
            MilestoneCategory::Logbook | MilestoneCategory::Submission => "tone--gray",
        }
    }

    pub fn all() -> Vec<MilestoneCategory> {
        vec![
            MilestoneCategory::Presentation,
            MilestoneCategory::Report,
            MilestoneCategory::Submission,
            MilestoneCategory::Viva,
            MilestoneCategory::Website,
            MilestoneCategory::Paper,
            MilestoneCategory::Logbook,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Graded project checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    /// Weight of the checkpoint in percent of the final grade, 0..=100
    pub marks: u8,
    /// Free-text display date, e.g. "4–6 December 2024"
    pub date: String,
    pub category: MilestoneCategory,
    #[serde(default)]
    pub description: String,
}

impl Categorized for Milestone {
    type Category = MilestoneCategory;

    fn category(&self) -> MilestoneCategory {
        self.category
    }
}

/// Sum of marks of the given milestones
pub fn total_marks<'a, I>(milestones: I) -> u32
where
    I: IntoIterator<Item = &'a Milestone>,
{
    milestones.into_iter().map(|m| u32::from(m.marks)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for category in MilestoneCategory::all() {
            assert_eq!(MilestoneCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(MilestoneCategory::from_code("all"), None);
    }

    #[test]
    fn test_deserialize_lowercase_category() {
        let milestone: Milestone = serde_json::from_str(
            r#"{"id":"8","name":"Viva","marks":10,"date":"26–28 May 2025","category":"viva"}"#,
        )
        .unwrap();
        assert_eq!(milestone.category, MilestoneCategory::Viva);
        assert_eq!(milestone.description, "");
    }

    #[test]
    fn test_total_marks() {
        let make = |marks: u8| Milestone {
            id: marks.to_string(),
            name: "m".to_string(),
            marks,
            date: String::new(),
            category: MilestoneCategory::Report,
            description: String::new(),
        };
        let list = vec![make(6), make(15), make(4)];
        assert_eq!(total_marks(&list), 25);
        assert_eq!(total_marks(&Vec::<Milestone>::new()), 0);
    }
}
