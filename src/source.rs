//! Data sources feeding plot traces.
//!
//! A source is either a static sequence shared by reference or a scrolling
//! [`SampleBuffer`]. The two report their extent differently: a buffer keeps
//! its all-time extent across evictions while a static sequence reports the
//! min/max of what it currently holds.

use std::sync::Arc;

use crate::buffer::{SampleBuffer, Samples};
use crate::view::Range;

/// One column of plot data.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Fixed sequence, cheap to share between traces.
    Static(Arc<[f64]>),
    /// Scrolling circular buffer.
    Buffered(SampleBuffer),
}

impl DataSource {
    /// Empty static source.
    pub fn empty() -> Self {
        Self::Static(Arc::from(Vec::<f64>::new()))
    }

    /// Scrolling source with the given capacity.
    pub fn buffered(capacity: usize) -> Self {
        Self::Buffered(SampleBuffer::new(capacity))
    }

    /// Number of values currently readable.
    pub fn len(&self) -> usize {
        match self {
            Self::Static(values) => values.len(),
            Self::Buffered(buffer) => buffer.len(),
        }
    }

    /// Check if no values are readable.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the readable values in order.
    pub fn iter(&self) -> SourceIter<'_> {
        match self {
            Self::Static(values) => SourceIter::Static(values.iter()),
            Self::Buffered(buffer) => SourceIter::Buffered(buffer.iter()),
        }
    }

    /// Extent with the source's native semantics.
    ///
    /// Buffers report every value ever inserted; static sequences report
    /// their current contents.
    pub fn extent(&self) -> Option<Range> {
        match self {
            Self::Static(values) => Range::from_values(values.iter().copied()),
            Self::Buffered(buffer) => buffer.current_extent(),
        }
    }

    /// Extent of the currently readable values only.
    pub fn window_extent(&self) -> Option<Range> {
        match self {
            Self::Static(values) => Range::from_values(values.iter().copied()),
            Self::Buffered(buffer) => buffer.window_extent(),
        }
    }

    /// Access the buffer of a scrolling source.
    pub fn as_buffer(&self) -> Option<&SampleBuffer> {
        match self {
            Self::Buffered(buffer) => Some(buffer),
            Self::Static(_) => None,
        }
    }

    /// Mutably access the buffer of a scrolling source.
    pub fn as_buffer_mut(&mut self) -> Option<&mut SampleBuffer> {
        match self {
            Self::Buffered(buffer) => Some(buffer),
            Self::Static(_) => None,
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<f64>> for DataSource {
    fn from(values: Vec<f64>) -> Self {
        Self::Static(Arc::from(values))
    }
}

impl From<Arc<[f64]>> for DataSource {
    fn from(values: Arc<[f64]>) -> Self {
        Self::Static(values)
    }
}

impl From<SampleBuffer> for DataSource {
    fn from(buffer: SampleBuffer) -> Self {
        Self::Buffered(buffer)
    }
}

/// Iterator over the values of a [`DataSource`].
#[derive(Debug, Clone)]
pub enum SourceIter<'a> {
    /// Values of a static sequence.
    Static(std::slice::Iter<'a, f64>),
    /// Live samples of a buffer.
    Buffered(Samples<'a>),
}

impl Iterator for SourceIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            Self::Static(iter) => iter.next().copied(),
            Self::Buffered(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Static(iter) => iter.size_hint(),
            Self::Buffered(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for SourceIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_buffered_extents_differ_after_eviction() {
        let mut buffered = DataSource::buffered(3);
        let buffer = buffered.as_buffer_mut().unwrap();
        for value in [10.0, -4.0, 1.0, 2.0, 3.0] {
            buffer.insert(value);
        }
        assert_eq!(buffered.extent(), Some(Range::new(-4.0, 10.0)));
        assert_eq!(buffered.window_extent(), Some(Range::new(1.0, 3.0)));

        let fixed = DataSource::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(fixed.extent(), Some(Range::new(1.0, 3.0)));
        assert_eq!(fixed.extent(), fixed.window_extent());
    }

    #[test]
    fn empty_sources_have_no_extent() {
        assert_eq!(DataSource::empty().extent(), None);
        assert_eq!(DataSource::buffered(4).extent(), None);
        assert!(DataSource::default().is_empty());
    }

    #[test]
    fn iteration_matches_contents() {
        let fixed = DataSource::from(vec![4.0, 5.0]);
        assert_eq!(fixed.iter().collect::<Vec<_>>(), vec![4.0, 5.0]);
        assert_eq!(fixed.iter().len(), 2);

        let mut buffered = DataSource::from(SampleBuffer::new(2));
        if let Some(buffer) = buffered.as_buffer_mut() {
            buffer.insert(7.0);
            buffer.insert(8.0);
            buffer.insert(9.0);
        }
        assert_eq!(buffered.iter().collect::<Vec<_>>(), vec![8.0, 9.0]);
        assert!(fixed.as_buffer().is_none());
    }

    #[test]
    fn static_sequences_share_storage() {
        let shared: Arc<[f64]> = Arc::from(vec![0.0, 1.0]);
        let a = DataSource::from(Arc::clone(&shared));
        let b = DataSource::from(Arc::clone(&shared));
        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(a.len(), b.len());
    }
}
