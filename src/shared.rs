//! Serialized access to one chain from several owners.
//!
//! Chains themselves are mutated through `&mut self`. When a chain has to
//! be reachable from more than one place (or thread), wrap it in a
//! [`SharedChain`]; every call takes the lock for its whole duration.

use crate::chain::Chain;
use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to a chain behind a mutex.
pub struct SharedChain<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for SharedChain<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Chain> SharedChain<C> {
    pub fn new(chain: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chain)),
        }
    }

    /// Run `f` with exclusive access to the chain.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut chain = self.inner.lock();
        f(&mut chain)
    }

    pub fn add(&self, snapshot: C::Snapshot) {
        self.inner.lock().add(snapshot);
    }

    pub fn load(&self) -> Result<()> {
        self.inner.lock().load().map(|_| ())
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn is_active(&self) -> bool {
        self.inner.lock().is_active()
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.lock().is_enabled()
    }

    /// Owned copy of the snapshot under the cursor.
    pub fn current(&self) -> Option<C::Snapshot> {
        self.inner.lock().current().cloned()
    }

    /// Owned copy of the whole history.
    pub fn to_vec(&self) -> Vec<C::Snapshot> {
        self.inner.lock().snapshots().to_vec()
    }

    /// Recover the chain if this is the last handle.
    pub fn into_inner(self) -> std::result::Result<C, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::StatefulChain;
    use crate::source::OwnPropertySource;
    use crate::types::Descriptor;
    use serde_json::{json, Value};
    use std::thread;

    #[test]
    fn test_concurrent_loads_are_serialized() {
        let object = Arc::new(json!({"a": 1}));
        let chain: StatefulChain<Arc<Value>, Descriptor, _> =
            StatefulChain::new(object, "a", OwnPropertySource);
        let shared = SharedChain::new(chain);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.load().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.size(), 200);
        assert_eq!(shared.current(), Some(Descriptor::new(json!(1))));
    }

    #[test]
    fn test_with_and_into_inner() {
        let chain: StatefulChain<Value, Descriptor, _> =
            StatefulChain::new(json!({}), "x", OwnPropertySource);
        let shared = SharedChain::new(chain);
        let other = shared.clone();

        shared.with(|c| {
            c.add(Descriptor::new(json!(1))).deactivate();
        });
        assert!(!other.is_active());
        assert!(other.is_enabled());

        let shared = shared.into_inner().unwrap_err();
        drop(other);
        let chain = shared.into_inner().ok().unwrap();
        assert_eq!(chain.size(), 1);
    }
}
