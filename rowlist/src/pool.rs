use alloc::vec::Vec;
use core::fmt;

/// Outcome of a pool resize, reported so a host layer can mirror the
/// structural change (slots appended at / released from the end).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolDelta {
    Unchanged,
    /// This many slots were cloned from the template and appended.
    Grew(usize),
    /// This many slots were released from the end.
    Shrank(usize),
}

/// A bounded pool of recycled render slots.
///
/// Slot order is stable and equals on-screen top-to-bottom order: after the
/// next refresh, the slot at pool index `i` displays the record at
/// `offset + i`. Slots carry no semantic data between rebinds; whatever they
/// display is overwritten by the next fill.
#[derive(Clone)]
pub struct SurfacePool<S> {
    template: S,
    slots: Vec<S>,
}

impl<S: Clone> SurfacePool<S> {
    pub(crate) fn new(template: S) -> Self {
        Self {
            template,
            slots: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[S] {
        &self.slots
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut S {
        &mut self.slots[index]
    }

    /// Adjusts the pool to exactly `needed_rows` slots.
    ///
    /// Growth appends independent clones of the stored template; shrinking
    /// truncates from the end so the leading, currently-correct bindings
    /// survive untouched. No-op when the length already matches.
    pub(crate) fn resize(&mut self, needed_rows: usize) -> PoolDelta {
        let current = self.slots.len();
        if needed_rows > current {
            let added = needed_rows - current;
            self.slots.reserve_exact(added);
            for _ in 0..added {
                self.slots.push(self.template.clone());
            }
            PoolDelta::Grew(added)
        } else if needed_rows < current {
            self.slots.truncate(needed_rows);
            PoolDelta::Shrank(current - needed_rows)
        } else {
            PoolDelta::Unchanged
        }
    }
}

impl<S> fmt::Debug for SurfacePool<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfacePool")
            .field("len", &self.slots.len())
            .finish()
    }
}
