//! Streaming median over a growing sample.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Total-order wrapper so f64 samples can live in a binary heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrdF64(f64);

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Running median backed by two heaps.
///
/// The lower half of the sample sits in a max-heap and the upper half in a
/// min-heap. The heaps are rebalanced on every insert so their sizes never
/// differ by more than one, which keeps both `add` and `median` cheap.
#[derive(Debug, Default)]
pub struct RunningMedian {
    /// Max-heap over the lower half.
    lower: BinaryHeap<OrdF64>,
    /// Min-heap over the upper half.
    upper: BinaryHeap<Reverse<OrdF64>>,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Add a sample, keeping the halves balanced.
    pub fn add(&mut self, value: f64) {
        let value = OrdF64(value);
        match self.lower.peek() {
            Some(max_lower) if value > *max_lower => self.upper.push(Reverse(value)),
            _ => self.lower.push(value),
        }

        if self.lower.len() > self.upper.len() + 1 {
            if let Some(moved) = self.lower.pop() {
                self.upper.push(Reverse(moved));
            }
        } else if self.upper.len() > self.lower.len() + 1 {
            if let Some(Reverse(moved)) = self.upper.pop() {
                self.lower.push(moved);
            }
        }
    }

    /// Current median, or `None` when no samples have been added.
    ///
    /// For an even number of samples this is the mean of the two middle
    /// values.
    pub fn median(&self) -> Option<f64> {
        match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Greater => self.lower_peek(),
            Ordering::Less => self.upper_peek(),
            Ordering::Equal => match (self.lower_peek(), self.upper_peek()) {
                (Some(low), Some(high)) => Some((low + high) / 2.0),
                _ => None,
            },
        }
    }

    fn lower_peek(&self) -> Option<f64> {
        self.lower.peek().map(|entry| entry.0)
    }

    fn upper_peek(&self) -> Option<f64> {
        self.upper.peek().map(|entry| (entry.0).0)
    }
}
