//! Multi-card strip that shows `visible` consecutive cards starting at `index`.
//!
//! Unlike [`super::Carousel`] manual navigation is clamped to
//! `[0, total - visible]` and never wraps.

use super::autoplay::Autoplay;
use super::carousel::CarouselError;

const SMALL_BREAKPOINT_PX: f64 = 640.0;
const MEDIUM_BREAKPOINT_PX: f64 = 1024.0;

/// Number of cards that fit side by side at a viewport width
pub fn visible_for_width(width_px: f64) -> usize {
    if width_px < SMALL_BREAKPOINT_PX {
        1
    } else if width_px < MEDIUM_BREAKPOINT_PX {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedCarousel {
    total: usize,
    visible: usize,
    index: usize,
    autoplay: Autoplay,
}

impl WindowedCarousel {
    pub fn new(total: usize, viewport_width_px: f64) -> Self {
        Self {
            total,
            visible: visible_for_width(viewport_width_px),
            index: 0,
            autoplay: Autoplay::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Largest valid start index
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    /// Whether card `i` falls inside the current window
    pub fn is_in_view(&self, i: usize) -> bool {
        i >= self.index && i < self.index + self.visible
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.max_index());
        self.autoplay.hold();
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.autoplay.hold();
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if self.total == 0 {
            return Err(CarouselError::Empty);
        }
        if index > self.max_index() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.max_index() + 1,
            });
        }
        self.index = index;
        self.autoplay.hold();
        Ok(())
    }

    /// Recomputes the card count for a new viewport width and re-clamps the index.
    pub fn resize_viewport(&mut self, width_px: f64) {
        self.visible = visible_for_width(width_px);
        self.clamp();
    }

    /// Adopts a new card count; the position restarts from the first card.
    pub fn set_total(&mut self, total: usize) {
        if total != self.total {
            self.total = total;
            self.index = 0;
        }
    }

    pub fn hover_start(&mut self) {
        self.autoplay.hover_start();
    }

    pub fn hover_end(&mut self) {
        self.autoplay.hover_end();
    }

    /// Timer callback. Advances by one card and rewinds to the start once the
    /// last window has been shown. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay.take_tick() {
            return false;
        }
        let before = self.index;
        self.index = if self.can_next() { self.index + 1 } else { 0 };
        self.index != before
    }

    fn clamp(&mut self) {
        self.index = self.index.min(self.max_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f64 = 1280.0;
    const TABLET: f64 = 800.0;
    const PHONE: f64 = 375.0;

    #[test]
    fn test_breakpoints() {
        assert_eq!(visible_for_width(320.0), 1);
        assert_eq!(visible_for_width(639.9), 1);
        assert_eq!(visible_for_width(640.0), 2);
        assert_eq!(visible_for_width(1023.0), 2);
        assert_eq!(visible_for_width(1024.0), 3);
        assert_eq!(visible_for_width(1920.0), 3);
    }

    #[test]
    fn test_next_is_clamped() {
        let mut strip = WindowedCarousel::new(6, WIDE);
        assert_eq!(strip.max_index(), 3);

        let mut seen = Vec::new();
        for _ in 0..4 {
            strip.next();
            seen.push(strip.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 3]);
        assert!(!strip.can_next());
    }

    #[test]
    fn test_prev_stops_at_zero() {
        let mut strip = WindowedCarousel::new(6, WIDE);
        strip.prev();
        assert_eq!(strip.index(), 0);
        assert!(!strip.can_prev());
    }

    #[test]
    fn test_fewer_items_than_slots() {
        let mut strip = WindowedCarousel::new(2, WIDE);
        assert_eq!(strip.max_index(), 0);
        strip.next();
        assert_eq!(strip.index(), 0);
    }

    #[test]
    fn test_shrinking_viewport_keeps_index_valid() {
        let mut strip = WindowedCarousel::new(6, WIDE);
        strip.go_to(3).unwrap();
        strip.resize_viewport(PHONE);
        assert_eq!(strip.visible(), 1);
        assert_eq!(strip.max_index(), 5);
        assert_eq!(strip.index(), 3);
    }

    #[test]
    fn test_growing_viewport_reclamps_index() {
        let mut strip = WindowedCarousel::new(6, PHONE);
        strip.go_to(5).unwrap();
        strip.resize_viewport(TABLET);
        assert_eq!(strip.index(), 4);
        strip.resize_viewport(WIDE);
        assert_eq!(strip.index(), 3);
    }

    #[test]
    fn test_index_stays_valid_across_resizes() {
        let mut strip = WindowedCarousel::new(3, PHONE);
        strip.go_to(2).unwrap();
        strip.resize_viewport(WIDE);
        assert_eq!(strip.index(), 0);

        let mut strip = WindowedCarousel::new(4, PHONE);
        strip.go_to(3).unwrap();
        strip.resize_viewport(WIDE);
        strip.resize_viewport(PHONE);
        assert!(strip.index() <= strip.total().saturating_sub(1));
    }

    #[test]
    fn test_go_to_beyond_max_index_is_rejected() {
        let mut strip = WindowedCarousel::new(6, WIDE);
        assert_eq!(
            strip.go_to(4),
            Err(CarouselError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(strip.index(), 0);
        for i in 0..=3 {
            strip.go_to(i).unwrap();
            assert_eq!(strip.index(), i);
        }
    }

    #[test]
    fn test_empty_strip() {
        let mut strip = WindowedCarousel::new(0, WIDE);
        assert_eq!(strip.max_index(), 0);
        strip.next();
        strip.prev();
        assert_eq!(strip.index(), 0);
        assert_eq!(strip.go_to(0), Err(CarouselError::Empty));
        assert!(!strip.tick());
    }

    #[test]
    fn test_autoplay_rewinds_at_the_end() {
        let mut strip = WindowedCarousel::new(4, WIDE);
        assert!(strip.tick());
        assert_eq!(strip.index(), 1);
        assert!(strip.tick());
        assert_eq!(strip.index(), 0);
    }

    #[test]
    fn test_autoplay_paused_while_hovered() {
        let mut strip = WindowedCarousel::new(6, WIDE);
        strip.hover_start();
        for _ in 0..10 {
            strip.tick();
        }
        assert_eq!(strip.index(), 0);
    }

    #[test]
    fn test_is_in_view() {
        let mut strip = WindowedCarousel::new(6, TABLET);
        strip.next();
        assert!(!strip.is_in_view(0));
        assert!(strip.is_in_view(1));
        assert!(strip.is_in_view(2));
        assert!(!strip.is_in_view(3));
    }

    #[test]
    fn test_set_total_resets_position() {
        let mut strip = WindowedCarousel::new(6, WIDE);
        strip.go_to(2).unwrap();
        strip.set_total(5);
        assert_eq!(strip.index(), 0);
        assert_eq!(strip.max_index(), 2);
    }
}
