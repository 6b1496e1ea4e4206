/// Collapsible navigation menu shown on narrow screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
