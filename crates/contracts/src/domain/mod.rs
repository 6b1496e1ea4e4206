pub mod contact;
pub mod document;
pub mod literature;
pub mod milestone;
pub mod navigation;
pub mod person;
pub mod presentation;
pub mod research;
pub mod showcase;

pub use contact::{ContactField, ContactFormDraft, SubmitOutcome};
pub use document::{Document, DocumentCategory};
pub use literature::LiteratureEntry;
pub use milestone::{total_marks, Milestone, MilestoneCategory};
pub use navigation::{NavigationItem, SiteRoute};
pub use person::{Person, Supervisor, Team};
pub use presentation::Presentation;
pub use research::{
    DetailSection, Diagram, Feature, HomeContent, ResearchContent, ResearchDetail,
    ResearchObjective, Stat, TechGroup,
};
pub use showcase::CarouselItem;
