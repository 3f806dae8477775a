use std::time::Duration;

/// Period of the home-page slide auto-advance.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(3500);

/// Number of slides taken from the top-rated list.
pub const SLIDE_COUNT: usize = 3;

/// Number of top-rated vehicles the home page works from.
pub const FEATURED_COUNT: usize = 6;

/// Position within a fixed number of slides. Manual navigation only moves
/// the index; the owner of the autoplay timer decides whether to restart it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    current: usize,
}

impl Slideshow {
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.current = index;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let mut slides = Slideshow::new(3);
        assert_eq!(slides.prev(), 2);
        assert_eq!(slides.next(), 0);
        assert_eq!(slides.next(), 1);
        assert_eq!(slides.next(), 2);
        assert_eq!(slides.next(), 0);
    }

    #[test]
    fn select_is_bounded() {
        let mut slides = Slideshow::new(3);
        assert_eq!(slides.select(2), 2);
        assert_eq!(slides.select(7), 2);
    }

    #[test]
    fn empty_show_stays_put() {
        let mut slides = Slideshow::new(0);
        assert!(slides.is_empty());
        assert_eq!(slides.next(), 0);
        assert_eq!(slides.prev(), 0);
    }
}
