/// Period between two autoplay ticks
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Autoplay gate shared by both carousel variants.
///
/// Autoplay runs while the pointer is outside the widget. A manual navigation
/// puts a one-shot hold on the gate so the next tick does not advance right
/// after the user moved the carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Autoplay {
    hovered: bool,
    held: bool,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the timer should be running
    pub fn is_enabled(&self) -> bool {
        !self.hovered
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn hover_start(&mut self) {
        self.hovered = true;
    }

    /// Re-enables autoplay. A hold left by clicks made while hovering is dropped.
    pub fn hover_end(&mut self) {
        self.hovered = false;
        self.held = false;
    }

    /// Records a manual navigation.
    pub fn hold(&mut self) {
        self.held = true;
    }

    /// Consumes a timer tick. Returns whether the carousel should advance.
    pub fn take_tick(&mut self) -> bool {
        if self.hovered {
            return false;
        }
        if self.held {
            self.held = false;
            return false;
        }
        true
    }
}
