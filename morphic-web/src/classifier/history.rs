//! Rolling gesture history for majority voting
//!
//! Fixed-capacity ring buffer of the most recent gesture types, oldest
//! evicted first.

use super::gesture::GestureType;

/// Ring buffer of recent gesture types
pub struct GestureHistory {
    /// Circular storage, `capacity` slots
    data: Vec<GestureType>,

    /// Next slot to write
    write_index: usize,

    /// Whether the buffer has wrapped at least once
    filled: bool,
}

impl GestureHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![GestureType::None; capacity],
            write_index: 0,
            filled: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Push the newest gesture, evicting the oldest once full
    pub fn push(&mut self, gesture: GestureType) {
        self.data[self.write_index] = gesture;
        self.write_index = (self.write_index + 1) % self.data.len();

        if self.write_index == 0 {
            self.filled = true;
        }
    }

    pub fn len(&self) -> usize {
        if self.filled {
            self.data.len()
        } else {
            self.write_index
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = GestureType> + '_ {
        let len = self.len();
        let start = if self.filled { self.write_index } else { 0 };
        (0..len).map(move |i| self.data[(start + i) % self.data.len()])
    }

    /// Most frequent gesture in the window with its vote count.
    ///
    /// Ties go to the gesture whose first appearance in the window is oldest.
    pub fn most_common(&self) -> Option<(GestureType, usize)> {
        // (gesture, votes) in order of first appearance
        let mut tally: Vec<(GestureType, usize)> = Vec::with_capacity(4);
        for gesture in self.iter() {
            match tally.iter_mut().find(|(g, _)| *g == gesture) {
                Some((_, votes)) => *votes += 1,
                None => tally.push((gesture, 1)),
            }
        }

        // strict `>` keeps the earliest entry on ties
        let mut best: Option<(GestureType, usize)> = None;
        for (gesture, votes) in tally {
            if best.map_or(true, |(_, top)| votes > top) {
                best = Some((gesture, votes));
            }
        }
        best
    }

    pub fn clear(&mut self) {
        self.data.fill(GestureType::None);
        self.write_index = 0;
        self.filled = false;
    }
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::new(5)
    }
}
