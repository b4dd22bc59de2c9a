use std::collections::BinaryHeap;

use crate::models::RankedEntry;
use crate::tally::Tally;

/// Max-heap over a snapshot of a tally's (key, count) pairs.
#[derive(Debug, Clone, Default)]
pub struct RankedHeap {
    heap: BinaryHeap<RankedEntry>,
}

impl RankedHeap {
    pub fn from_tally(tally: &Tally) -> Self {
        let heap = tally
            .iter()
            .map(|(key, count)| RankedEntry::new(key, count))
            .collect();

        RankedHeap { heap }
    }

    /// Removes the entry with the largest count. Among equal counts the
    /// greatest key comes out first.
    pub fn pop(&mut self) -> Option<RankedEntry> {
        self.heap.pop()
    }
}

impl Iterator for RankedHeap {
    type Item = RankedEntry;

    fn next(&mut self) -> Option<RankedEntry> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

/// The `k` most frequent keys, largest count first. Asking for more entries
/// than the tally holds returns all of them.
pub fn top_k(tally: &Tally, k: usize) -> Vec<RankedEntry> {
    RankedHeap::from_tally(tally).take(k).collect()
}
