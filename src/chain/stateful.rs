//! The stateful chain: the default [`Chain`] implementation.

use super::contract::Chain;
use crate::config::{ChainConfig, SetPolicy};
use crate::error::{ChainError, Result};
use crate::source::DescriptorSource;
use crate::types::Snapshot;
use std::fmt;
use tracing::{debug, trace};

/// Snapshot history for one property of one object, with a cursor and
/// independent `active`/`enabled` flags.
///
/// `O` is whatever handle identifies the object (`Arc<T>`, `&T`, an id);
/// the chain stores it as given. `D` is the descriptor source used by
/// [`Chain::load`].
pub struct StatefulChain<O, S, D> {
    /// Bound object.
    object: O,

    /// Bound property name.
    key: String,

    /// History, oldest first.
    snapshots: Vec<S>,

    /// Cursor into `snapshots`.
    cursor: usize,

    active: bool,
    enabled: bool,

    set_policy: SetPolicy,

    /// Source for `load`.
    source: D,
}

impl<O, S, D> StatefulChain<O, S, D>
where
    S: Snapshot,
    D: DescriptorSource<O, S>,
{
    /// Create an empty chain with the default configuration.
    pub fn new(object: O, key: impl Into<String>, source: D) -> Self {
        Self::with_config(object, key, source, ChainConfig::default())
    }

    /// Create an empty chain.
    pub fn with_config(object: O, key: impl Into<String>, source: D, config: ChainConfig) -> Self {
        Self {
            object,
            key: key.into(),
            snapshots: Vec::new(),
            cursor: 0,
            active: config.active,
            enabled: config.enabled,
            set_policy: config.set_policy,
            source,
        }
    }

    /// The configured out-of-range policy for `set`.
    pub fn set_policy(&self) -> SetPolicy {
        self.set_policy
    }

    /// Owned copy of the current snapshot.
    pub fn current_cloned(&self) -> Option<S> {
        self.current().cloned()
    }

    /// Consume the chain, returning its history.
    pub fn into_snapshots(self) -> Vec<S> {
        self.snapshots
    }
}

impl<O, S, D> Chain for StatefulChain<O, S, D>
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
        self.active
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn activate(&mut self) -> &mut Self {
        trace!(key = %self.key, "activate");
        self.active = true;
        self
    }

    fn deactivate(&mut self) -> &mut Self {
        trace!(key = %self.key, "deactivate");
        self.active = false;
        self
    }

    fn enable(&mut self) -> &mut Self {
        trace!(key = %self.key, "enable");
        self.enabled = true;
        self
    }

    fn disable(&mut self) -> &mut Self {
        trace!(key = %self.key, "disable");
        self.enabled = false;
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
        if let Some(slot) = self.snapshots.get_mut(index) {
            *slot = snapshot;
            trace!(key = %self.key, index, "set");
            return Ok(self);
        }

        match self.set_policy {
            SetPolicy::Reject => Err(ChainError::IndexOutOfBounds { index, len }),
            SetPolicy::Append => {
                trace!(key = %self.key, requested = index, index = len, "set appended");
                self.snapshots.push(snapshot);
                Ok(self)
            }
        }
    }

    fn update(&mut self, index: usize, patch: S::Patch) -> Result<&mut Self> {
        let len = self.snapshots.len();
        let slot = self
            .snapshots
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfBounds { index, len })?;
        slot.merge(patch);
        trace!(key = %self.key, index, "update");
        Ok(self)
    }

    fn load(&mut self) -> Result<&mut Self> {
        match self.source.fetch(&self.object, &self.key) {
            Some(snapshot) => {
                debug!(key = %self.key, index = self.snapshots.len(), "loaded descriptor");
                Ok(self.add(snapshot))
            }
            None => {
                debug!(key = %self.key, "no descriptor to load");
                Err(ChainError::DescriptorNotFound {
                    key: self.key.clone(),
                })
            }
        }
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

impl<O, S: fmt::Debug, D> fmt::Debug for StatefulChain<O, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulChain")
            .field("key", &self.key)
            .field("cursor", &self.cursor)
            .field("active", &self.active)
            .field("enabled", &self.enabled)
            .field("snapshots", &self.snapshots)
            .finish()
    }
}
