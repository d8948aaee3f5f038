//! FAQ accordion: at most one item open at a time.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Build from the `open` flags found in markup.
    ///
    /// If markup marks several items open, only the first is kept.
    #[must_use]
    pub fn from_open_flags(flags: &[bool]) -> Self {
        Self { len: flags.len(), open: flags.iter().position(|open| *open) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Question click on item `index`. Out-of-range clicks are ignored.
    ///
    /// Closes every other item and flips the clicked one.
    pub fn click(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// Open flag for every item, in order.
    #[must_use]
    pub fn flags(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.is_open(i)).collect()
    }
}
