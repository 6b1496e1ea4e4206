//! Data model, embedded site content and widget state for the Water360 website.
//!
//! Nothing in this crate touches the browser: the frontend wraps these types in
//! signals and feeds DOM events into the transitions defined here.

pub mod content;
pub mod domain;
pub mod state;
