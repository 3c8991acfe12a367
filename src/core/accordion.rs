//! Single-open accordion state

/// At most one entry open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All entries closed
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Entry `index` open initially (ignored when out of range)
    pub fn with_open(len: usize, index: usize) -> Self {
        Self {
            len,
            open: (index < len).then_some(index),
        }
    }

    /// Open `index`, or close it if it is already the open one.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
