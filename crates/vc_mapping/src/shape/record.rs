use super::Flatten;

// -----------------------------------------------------------------------------
// Record

/// A value with named fields, in declaration order.
///
/// Usually implemented by `#[derive(Record)]`.
pub trait Record {
    /// The type's identifier, e.g. `Point`.
    fn type_ident(&self) -> &'static str;

    fn field_len(&self) -> usize;

    fn name_at(&self, index: usize) -> Option<&'static str>;

    fn field_at(&self, index: usize) -> Option<&dyn Flatten>;

    /// Returns the field with the given declared name.
    fn field(&self, name: &str) -> Option<&dyn Flatten> {
        (0..self.field_len())
            .find(|&index| self.name_at(index) == Some(name))
            .and_then(|index| self.field_at(index))
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    fn iter_fields(&self) -> RecordFieldIter<'_>
    where
        Self: Sized,
    {
        RecordFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// RecordFieldIter

/// Iterator over the fields of a [`Record`].
pub struct RecordFieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> RecordFieldIter<'a> {
    #[inline]
    pub fn new(record: &'a dyn Record) -> Self {
        Self { record, index: 0 }
    }
}

impl<'a> Iterator for RecordFieldIter<'a> {
    type Item = (&'static str, &'a dyn Flatten);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.record.name_at(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordFieldIter<'_> {}
