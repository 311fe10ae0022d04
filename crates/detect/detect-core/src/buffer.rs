//! Fixed-capacity buffer that evicts its oldest element when full.

/// Ring buffer with fixed capacity.
///
/// Pushing onto a full buffer overwrites the oldest element. Index 0 is
/// always the oldest retained element. Capacity must be greater than zero.
#[derive(Debug, Clone)]
pub struct EvictingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> EvictingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Append a value, returning the evicted oldest element when full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let capacity = self.slots.len();
        let tail = (self.head + self.len) % capacity;
        let evicted = self.slots[tail].replace(value);
        if evicted.is_some() {
            self.head = (self.head + 1) % capacity;
        } else {
            self.len += 1;
        }
        evicted
    }

    /// Element at `index`, counted from the oldest retained element.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % self.slots.len()].as_ref()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(move |index| self.get(index))
    }
}
