use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// What happened to a submitted draft.
///
/// The site has no submission endpoint: a submit only clears the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields were missing; the draft is kept
    Incomplete,
    /// The form is not connected to any backend; the draft was discarded
    NotWired,
}

/// Contents of the contact form fields, held only while the page is mounted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn update(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && looks_like_email(self.email.trim())
            && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_complete() {
            return SubmitOutcome::Incomplete;
        }
        self.clear();
        SubmitOutcome::NotWired
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormDraft {
        let mut draft = ContactFormDraft::default();
        draft.update(ContactField::Name, "Ada".to_string());
        draft.update(ContactField::Email, "ada@example.com".to_string());
        draft.update(ContactField::Message, "Hello".to_string());
        draft
    }

    #[test]
    fn test_update_per_field() {
        let draft = filled();
        assert_eq!(draft.get(ContactField::Name), "Ada");
        assert_eq!(draft.get(ContactField::Email), "ada@example.com");
        assert_eq!(draft.get(ContactField::Message), "Hello");
    }

    #[test]
    fn test_submit_discards_complete_draft() {
        let mut draft = filled();
        assert_eq!(draft.submit(), SubmitOutcome::NotWired);
        assert_eq!(draft, ContactFormDraft::default());
    }

    #[test]
    fn test_submit_keeps_incomplete_draft() {
        let mut draft = filled();
        draft.update(ContactField::Email, "not-an-email".to_string());
        assert_eq!(draft.submit(), SubmitOutcome::Incomplete);
        assert_eq!(draft.name, "Ada");
    }

    #[test]
    fn test_blank_fields_are_incomplete() {
        let mut draft = filled();
        draft.update(ContactField::Message, "   ".to_string());
        assert!(!draft.is_complete());
    }
}
