//! A chain with ordered storage and a cursor, but no flag semantics.

use super::contract::Chain;
use crate::error::{ChainError, Result};
use crate::source::DescriptorSource;
use crate::types::Snapshot;
use std::fmt;
use tracing::{debug, trace};

/// Alternate [`Chain`] variant for callers that only need history storage.
///
/// `active` and `enabled` are fixed at `false`. The flag mutators are
/// accepted so the type satisfies the trait, but they change nothing.
/// Out-of-range `set` is always rejected. Prefer
/// [`StatefulChain`](super::StatefulChain) unless the flags are
/// meaningless to the consumer.
pub struct MinimalChain<O, S, D> {
    object: O,
    key: String,
    snapshots: Vec<S>,
    cursor: usize,
    source: D,
}

impl<O, S, D> MinimalChain<O, S, D>
where
    S: Snapshot,
    D: DescriptorSource<O, S>,
{
    pub fn new(object: O, key: impl Into<String>, source: D) -> Self {
        Self {
            object,
            key: key.into(),
            snapshots: Vec::new(),
            cursor: 0,
            source,
        }
    }
}

impl<O, S, D> Chain for MinimalChain<O, S, D>
where
    S: Snapshot,
    D: DescriptorSource<O, S>,
{
    type Object = O;
    type Snapshot = S;

    fn key(&self) -> &str {
        &self.key
    }

    fn object(&self) -> &O {
        &self.object
    }

    fn is_active(&self) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn activate(&mut self) -> &mut Self {
        trace!(key = %self.key, "activate ignored");
        self
    }

    fn deactivate(&mut self) -> &mut Self {
        trace!(key = %self.key, "deactivate ignored");
        self
    }

    fn enable(&mut self) -> &mut Self {
        trace!(key = %self.key, "enable ignored");
        self
    }

    fn disable(&mut self) -> &mut Self {
        trace!(key = %self.key, "disable ignored");
        self
    }

    fn add(&mut self, snapshot: S) -> &mut Self {
        self.snapshots.push(snapshot);
        trace!(key = %self.key, index = self.snapshots.len() - 1, "add");
        self
    }

    fn clear(&mut self) -> &mut Self {
        trace!(key = %self.key, removed = self.snapshots.len(), "clear");
        self.snapshots.clear();
        self.cursor = 0;
        self
    }

    fn delete(&mut self, index: usize) -> &mut Self {
        if index < self.snapshots.len() {
            self.snapshots.remove(index);
            trace!(key = %self.key, index, "delete");
        }
        self
    }

    fn set(&mut self, index: usize, snapshot: S) -> Result<&mut Self> {
        let len = self.snapshots.len();
        let slot = self
            .snapshots
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfBounds { index, len })?;
        *slot = snapshot;
        trace!(key = %self.key, index, "set");
        Ok(self)
    }

    fn update(&mut self, index: usize, patch: S::Patch) -> Result<&mut Self> {
        let len = self.snapshots.len();
        self.snapshots
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfBounds { index, len })?
            .merge(patch);
        trace!(key = %self.key, index, "update");
        Ok(self)
    }

    fn load(&mut self) -> Result<&mut Self> {
        let snapshot = self.source.fetch(&self.object, &self.key).ok_or_else(|| {
            debug!(key = %self.key, "no descriptor to load");
            ChainError::DescriptorNotFound {
                key: self.key.clone(),
            }
        })?;
        debug!(key = %self.key, index = self.snapshots.len(), "loaded descriptor");
        Ok(self.add(snapshot))
    }

    fn current_index(&self) -> usize {
        self.cursor
    }

    fn set_current_index(&mut self, index: usize) -> &mut Self {
        trace!(key = %self.key, index, "move cursor");
        self.cursor = index;
        self
    }

    fn snapshots(&self) -> &[S] {
        &self.snapshots
    }
}

impl<O, S: fmt::Debug, D> fmt::Debug for MinimalChain<O, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinimalChain")
            .field("key", &self.key)
            .field("cursor", &self.cursor)
            .field("snapshots", &self.snapshots)
            .finish()
    }
}
