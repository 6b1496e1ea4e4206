//! Single-item carousel that wraps around in both directions.

use super::autoplay::Autoplay;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel has no items")]
    Empty,
    #[error("index {index} is out of range for {len} positions")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: Autoplay,
}

impl Carousel {
    /// Creates a carousel positioned on the first item. An empty list is rejected.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            index: 0,
            autoplay: Autoplay::new(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn next(&mut self) {
        self.advance();
        self.autoplay.hold();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.autoplay.hold();
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        self.autoplay.hold();
        Ok(())
    }

    pub fn hover_start(&mut self) {
        self.autoplay.hover_start();
    }

    pub fn hover_end(&mut self) {
        self.autoplay.hover_end();
    }

    /// Timer callback. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if self.autoplay.take_tick() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Adopts a new item count; the position restarts from the first item.
    pub fn resize(&mut self, len: usize) -> Result<(), CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if len != self.len {
            self.len = len;
            self.index = 0;
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Carousel::new(4).unwrap().index(), 0);
    }

    #[test]
    fn test_go_to_every_valid_index() {
        let mut carousel = Carousel::new(5).unwrap();
        for i in [3, 0, 4, 1, 2] {
            carousel.go_to(i).unwrap();
            assert_eq!(carousel.index(), i);
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(1).unwrap();
        assert_eq!(
            carousel.go_to(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_next_n_times_is_identity() {
        for len in 1..=6 {
            let mut carousel = Carousel::new(len).unwrap();
            carousel.go_to(len / 2).unwrap();
            let start = carousel.index();
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_hovered_carousel_ignores_ticks() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.hover_start();
        for _ in 0..50 {
            assert!(!carousel.tick());
        }
        assert_eq!(carousel.index(), 0);

        carousel.hover_end();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_manual_navigation_skips_next_tick() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.next();
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 1);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_arrow_click_while_hovered_then_leave_resumes_at_once() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.hover_start();
        carousel.next();
        carousel.hover_end();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_ticks_wrap_around() {
        let mut carousel = Carousel::new(2).unwrap();
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_resize_resets_index() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.go_to(3).unwrap();
        carousel.resize(2).unwrap();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 2);
        assert_eq!(carousel.resize(0), Err(CarouselError::Empty));
        assert_eq!(carousel.len(), 2);
    }
}
