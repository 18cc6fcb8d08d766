use alloc::vec::Vec;
use core::fmt;

/// Append-only ordered store of opaque records.
///
/// The ground truth for what exists: 0-based, insertion order preserved, size
/// monotonically non-decreasing for the life of the list. The engine never
/// inspects record contents; it only hands `&R` to the fill callback.
#[derive(Clone)]
pub struct EntryStore<R> {
    entries: Vec<R>,
}

impl<R> EntryStore<R> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record at `index`, or `None` past the end.
    ///
    /// Out-of-range lookups are expected while a window transiently extends
    /// beyond the stored count; callers treat `None` as "leave the slot as
    /// it was", never as an error.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.entries.get(index)
    }

    pub(crate) fn push(&mut self, record: R) {
        self.entries.push(record);
    }

    pub(crate) fn extend(&mut self, records: impl IntoIterator<Item = R>) {
        self.entries.extend(records);
    }
}

impl<R> fmt::Debug for EntryStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryStore")
            .field("len", &self.entries.len())
            .finish()
    }
}
