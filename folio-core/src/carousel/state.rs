use folio_model::Testimonial;

use super::filter::FilterKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Filter plus position over the loaded entries.
///
/// `index` addresses the filtered subset, never the full list, and stays
/// below its length whenever the subset is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub items: Vec<Testimonial>,
    pub filter: FilterKey,
    pub index: usize,
}

impl CarouselState {
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self {
            items,
            filter: FilterKey::All,
            index: 0,
        }
    }

    pub fn filtered(&self) -> Vec<&Testimonial> {
        self.items
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.items
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .count()
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.items
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .nth(self.index)
    }

    /// Select a filter and rewind. Returns false when `key` is already active.
    pub fn set_filter(&mut self, key: FilterKey) -> bool {
        if self.filter == key {
            return false;
        }
        self.filter = key;
        self.index = 0;
        true
    }

    /// Move one entry with wraparound. Returns false on an empty subset.
    pub fn step(&mut self, direction: Direction) -> bool {
        let len = self.filtered_len();
        if len == 0 {
            return false;
        }
        self.index = match direction {
            Direction::Next if self.index + 1 >= len => 0,
            Direction::Next => self.index + 1,
            Direction::Previous if self.index == 0 => len - 1,
            Direction::Previous => (self.index - 1).min(len - 1),
        };
        true
    }

    /// Pull a stale index back into range.
    pub fn clamp(&mut self) {
        if self.index >= self.filtered_len() {
            self.index = 0;
        }
    }
}
