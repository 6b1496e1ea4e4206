pub mod about_us;
pub mod contact;
pub mod documents;
pub mod domain;
pub mod home;
pub mod milestones;
pub mod presentations;
