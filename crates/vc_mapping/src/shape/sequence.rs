use super::Flatten;

// -----------------------------------------------------------------------------
// Sequence

/// An ordered collection of flattenable elements.
pub trait Sequence {
    fn len(&self) -> usize;

    fn element(&self, index: usize) -> Option<&dyn Flatten>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the elements in order.
    fn iter_elements(&self) -> SequenceIter<'_>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// SequenceIter

/// Iterator over the elements of a [`Sequence`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn Sequence,
    index: usize,
}

impl<'a> SequenceIter<'a> {
    #[inline]
    pub fn new(sequence: &'a dyn Sequence) -> Self {
        Self { sequence, index: 0 }
    }
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn Flatten;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.sequence.element(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}
