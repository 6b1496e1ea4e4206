/// Open flag of an overlay dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Keyboard handler. Escape closes an open dialog; returns whether it did.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.close();
            true
        } else {
            false
        }
    }

    /// Click handler for the overlay. Only clicks whose target is the backdrop
    /// itself close the dialog; clicks bubbling up from the content do not.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        if self.open && target_is_backdrop {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_open_modal() {
        let mut modal = ModalState::new();
        modal.open();
        assert!(modal.on_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut modal = ModalState::new();
        modal.open();
        assert!(!modal.on_key("Enter"));
        assert!(!modal.on_key("Esc"));
        assert!(modal.is_open());
    }

    #[test]
    fn test_escape_on_closed_modal_is_noop() {
        let mut modal = ModalState::new();
        assert!(!modal.on_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_click_inside_content_keeps_modal_open() {
        let mut modal = ModalState::new();
        modal.open();
        assert!(!modal.on_backdrop_click(false));
        assert!(modal.is_open());
        assert!(modal.on_backdrop_click(true));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_close_toggle() {
        let mut modal = ModalState::new();
        modal.open();
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }
}
