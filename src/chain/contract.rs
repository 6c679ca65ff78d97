//! The [`Chain`] trait every chain implementation exposes.

use crate::error::Result;
use crate::types::Snapshot;
use std::iter::Enumerate;
use std::slice;

/// Iterator over `(index, snapshot)` pairs in storage order.
pub type Entries<'a, S> = Enumerate<slice::Iter<'a, S>>;

/// Iterator over snapshots in storage order.
pub type Values<'a, S> = slice::Iter<'a, S>;

/// Ordered, cursor-addressed history of snapshots for one property.
///
/// Implementations provide storage, the cursor and the flags; reads,
/// derived indices and cursor stepping are provided on top of
/// [`Chain::snapshots`] and [`Chain::set_current_index`].
///
/// Index arithmetic is never checked against the chain length. Use
/// [`Chain::has`] before trusting a computed index.
pub trait Chain {
    /// Handle to the object whose property is tracked.
    type Object;

    /// Stored history entry.
    type Snapshot: Snapshot;

    /// Property name, fixed at construction.
    fn key(&self) -> &str;

    /// The bound object.
    fn object(&self) -> &Self::Object;

    fn is_active(&self) -> bool;
    fn is_enabled(&self) -> bool;

    fn activate(&mut self) -> &mut Self;
    fn deactivate(&mut self) -> &mut Self;
    fn enable(&mut self) -> &mut Self;
    fn disable(&mut self) -> &mut Self;

    /// Append one snapshot.
    fn add(&mut self, snapshot: Self::Snapshot) -> &mut Self;

    /// Remove every snapshot and reset the cursor to 0.
    fn clear(&mut self) -> &mut Self;

    /// Remove the snapshot at `index`, shifting later entries down.
    ///
    /// Out-of-range indices are ignored.
    fn delete(&mut self, index: usize) -> &mut Self;

    /// Replace the snapshot at `index`.
    fn set(&mut self, index: usize, snapshot: Self::Snapshot) -> Result<&mut Self>;

    /// Shallow-merge `patch` onto the snapshot at `index`.
    fn update(
        &mut self,
        index: usize,
        patch: <Self::Snapshot as Snapshot>::Patch,
    ) -> Result<&mut Self>;

    /// Fetch the live descriptor for the bound (object, key) and append it.
    ///
    /// Fails with `DescriptorNotFound` when the source has nothing; the
    /// chain is left unchanged in that case.
    fn load(&mut self) -> Result<&mut Self>;

    /// Raw cursor position. May point past the end.
    fn current_index(&self) -> usize;

    /// Move the cursor. No bounds validation.
    fn set_current_index(&mut self, index: usize) -> &mut Self;

    /// Backing storage, oldest first.
    fn snapshots(&self) -> &[Self::Snapshot];

    fn size(&self) -> usize {
        self.snapshots().len()
    }

    fn is_empty(&self) -> bool {
        self.snapshots().is_empty()
    }

    fn has(&self, index: usize) -> bool {
        index < self.size()
    }

    fn get(&self, index: usize) -> Option<&Self::Snapshot> {
        self.snapshots().get(index)
    }

    fn first(&self) -> Option<&Self::Snapshot> {
        self.snapshots().first()
    }

    fn last(&self) -> Option<&Self::Snapshot> {
        self.snapshots().last()
    }

    /// `size - 1`, or `None` on an empty chain.
    fn last_index(&self) -> Option<usize> {
        self.size().checked_sub(1)
    }

    fn next_index(&self) -> usize {
        self.current_index().saturating_add(1)
    }

    /// `None` when the cursor sits at 0.
    fn previous_index(&self) -> Option<usize> {
        self.current_index().checked_sub(1)
    }

    fn current(&self) -> Option<&Self::Snapshot> {
        self.get(self.current_index())
    }

    fn next_snapshot(&self) -> Option<&Self::Snapshot> {
        self.get(self.next_index())
    }

    fn previous_snapshot(&self) -> Option<&Self::Snapshot> {
        self.previous_index().and_then(|index| self.get(index))
    }

    /// Fresh `(index, snapshot)` iterator over current storage.
    fn entries(&self) -> Entries<'_, Self::Snapshot> {
        self.snapshots().iter().enumerate()
    }

    /// Fresh snapshot iterator over current storage.
    fn values(&self) -> Values<'_, Self::Snapshot> {
        self.snapshots().iter()
    }

    /// Move the cursor one step towards the newest snapshot.
    ///
    /// Returns the new current snapshot, or `None` (cursor unchanged) if
    /// there is nothing after the cursor.
    fn step_forward(&mut self) -> Option<&Self::Snapshot> {
        let next = self.next_index();
        if !self.has(next) {
            return None;
        }
        self.set_current_index(next);
        self.current()
    }

    /// Move the cursor one step towards the oldest snapshot.
    fn step_back(&mut self) -> Option<&Self::Snapshot> {
        let previous = self.previous_index().filter(|&index| self.has(index))?;
        self.set_current_index(previous);
        self.current()
    }

    fn rewind(&mut self) -> &mut Self {
        self.set_current_index(0)
    }

    /// Move the cursor to the newest snapshot. No-op on an empty chain.
    fn seek_last(&mut self) -> &mut Self {
        match self.last_index() {
            Some(last) => self.set_current_index(last),
            None => self,
        }
    }
}
