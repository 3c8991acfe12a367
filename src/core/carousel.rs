//! Circular carousel navigation

/// Active slide index that wraps around both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
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

    /// Advance one slide, wrapping from the last to the first
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `index`; out-of-range requests are ignored
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }

    /// Keyboard navigation. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowRight" => {
                self.next();
                true
            }
            "ArrowLeft" => {
                self.prev();
                true
            }
            "Home" => {
                self.go_to(0);
                true
            }
            "End" => {
                if self.len > 0 {
                    self.go_to(self.len - 1);
                }
                true
            }
            _ => false,
        }
    }

    /// Offset of `slot` relative to the active slide, in `-(len/2)..=len/2`.
    /// Used to lay out neighbouring cards on either side.
    pub fn offset_of(&self, slot: usize) -> isize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as isize;
        let mut diff = slot as isize - self.index as isize;
        if diff > len / 2 {
            diff -= len;
        } else if diff < -(len / 2) {
            diff += len;
        }
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut c = Carousel::new(4);
        assert_eq!(c.prev(), 3);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut c = Carousel::new(5);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(c.handle_key("End"));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut c = Carousel::new(3);
        c.go_to(1);
        assert_eq!(c.go_to(7), 1);
    }

    #[test]
    fn test_keyboard() {
        let mut c = Carousel::new(3);
        assert!(c.handle_key("ArrowLeft"));
        assert_eq!(c.index(), 2);
        assert!(c.handle_key("ArrowRight"));
        assert_eq!(c.index(), 0);
        assert!(c.handle_key("End"));
        assert_eq!(c.index(), 2);
        assert!(!c.handle_key("Enter"));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_offsets_wrap() {
        let mut c = Carousel::new(5);
        c.go_to(0);
        assert_eq!(c.offset_of(0), 0);
        assert_eq!(c.offset_of(1), 1);
        assert_eq!(c.offset_of(4), -1);
        assert_eq!(c.offset_of(3), -2);
    }
}
