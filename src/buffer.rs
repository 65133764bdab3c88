//! Fixed-capacity circular sample buffer with running extrema.
//!
//! The buffer backs scrolling plots: once full, every insert silently
//! overwrites the oldest sample. Independently of storage it keeps the
//! smallest and largest value ever inserted, so the recorded extent never
//! shrinks when samples are evicted. A capacity of zero keeps only the
//! extrema.

use crate::view::Range;

/// Circular buffer of `f64` samples.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    data: Box<[f64]>,
    write: usize,
    read: usize,
    count: usize,
    extent: Option<Range>,
}

impl SampleBuffer {
    /// Create a buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity].into_boxed_slice(),
            write: 0,
            read: 0,
            count: 0,
            extent: None,
        }
    }

    /// Maximum number of live samples.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of live samples.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no samples are live.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the next insert will evict the oldest sample.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Insert a sample, evicting the oldest one when full.
    ///
    /// The running extent always includes `value`, even with zero capacity.
    /// Non-finite values are stored but never widen the extent.
    pub fn insert(&mut self, value: f64) {
        if value.is_finite() {
            match self.extent.as_mut() {
                None => self.extent = Some(Range::point(value)),
                Some(extent) => extent.expand_to_include(value),
            }
        }

        let capacity = self.capacity();
        if capacity == 0 {
            return;
        }
        self.data[self.write] = value;
        self.write = (self.write + 1) % capacity;
        if self.count >= capacity {
            self.read = (self.read + 1) % capacity;
        } else {
            self.count += 1;
        }
    }

    /// Remove and return the oldest live sample, or `None` when empty.
    pub fn remove_oldest(&mut self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let value = self.data[self.read];
        self.read = (self.read + 1) % self.capacity();
        self.count -= 1;
        Some(value)
    }

    /// Iterate over the live samples, oldest first.
    ///
    /// The iterator borrows the buffer without moving its cursors and can be
    /// cloned to restart from the same position.
    pub fn iter(&self) -> Samples<'_> {
        Samples {
            data: &self.data,
            index: self.read,
            remaining: self.count,
        }
    }

    /// Smallest and largest value inserted since construction.
    ///
    /// Evicted and removed samples still count. Returns `None` if no finite
    /// value was ever inserted.
    pub fn current_extent(&self) -> Option<Range> {
        self.extent
    }

    /// Smallest and largest of the samples that are currently live.
    pub fn window_extent(&self) -> Option<Range> {
        Range::from_values(self.iter())
    }
}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = f64;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live samples of a [`SampleBuffer`].
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    data: &'a [f64],
    index: usize,
    remaining: usize,
}

impl Iterator for Samples<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.data[self.index];
        self.index = (self.index + 1) % self.data.len();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl std::iter::FusedIterator for Samples<'_> {}
