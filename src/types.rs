//! Core snapshot types for descriptor chains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single history entry stored by a chain.
///
/// Chains never look inside a snapshot. They store it, clone it out when a
/// caller asks for an owned copy, and merge a patch onto it for `update`.
pub trait Snapshot: Clone {
    /// Partial value accepted by [`Snapshot::merge`].
    type Patch;

    /// Shallow-merge `patch` onto `self`.
    ///
    /// Every field present on the patch overwrites the stored field, every
    /// field absent from the patch is left as it was.
    fn merge(&mut self, patch: Self::Patch);
}

/// A property's value and access attributes at one point in time.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor<V = serde_json::Value> {
    /// The property value.
    pub value: V,

    /// Whether the value may be reassigned.
    pub writable: bool,

    /// Whether the property shows up during enumeration.
    pub enumerable: bool,

    /// Whether the property may be redefined or removed.
    pub configurable: bool,
}

impl<V> Descriptor<V> {
    /// Descriptor for an ordinary assigned property: every flag set.
    pub fn new(value: V) -> Self {
        Self {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Descriptor for a frozen property: every flag cleared.
    pub fn frozen(value: V) -> Self {
        Self {
            value,
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }

    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }
}

impl<V: fmt::Debug> fmt::Debug for Descriptor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Descriptor({:?}, {}{}{})",
            self.value,
            if self.writable { 'w' } else { '-' },
            if self.enumerable { 'e' } else { '-' },
            if self.configurable { 'c' } else { '-' },
        )
    }
}

impl<V: Clone> Snapshot for Descriptor<V> {
    type Patch = DescriptorPatch<V>;

    fn merge(&mut self, patch: DescriptorPatch<V>) {
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(writable) = patch.writable {
            self.writable = writable;
        }
        if let Some(enumerable) = patch.enumerable {
            self.enumerable = enumerable;
        }
        if let Some(configurable) = patch.configurable {
            self.configurable = configurable;
        }
    }
}

/// Partial descriptor used by `update`. `None` fields are left untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorPatch<V = serde_json::Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumerable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,
}

impl<V> Default for DescriptorPatch<V> {
    fn default() -> Self {
        Self {
            value: None,
            writable: None,
            enumerable: None,
            configurable: None,
        }
    }
}

impl<V> DescriptorPatch<V> {
    /// Empty patch; merging it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    /// True if merging this patch would not touch any field.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.writable.is_none()
            && self.enumerable.is_none()
            && self.configurable.is_none()
    }
}

impl<V> From<Descriptor<V>> for DescriptorPatch<V> {
    fn from(d: Descriptor<V>) -> Self {
        Self {
            value: Some(d.value),
            writable: Some(d.writable),
            enumerable: Some(d.enumerable),
            configurable: Some(d.configurable),
        }
    }
}

/// Untyped snapshots: JSON objects merge key by key.
///
/// A non-object patch has no fields and leaves the stored value alone. An
/// object patch onto a non-object value replaces it.
impl Snapshot for serde_json::Value {
    type Patch = serde_json::Value;

    fn merge(&mut self, patch: serde_json::Value) {
        match (self, patch) {
            (serde_json::Value::Object(target), serde_json::Value::Object(fields)) => {
                for (name, value) in fields {
                    target.insert(name, value);
                }
            }
            (target, patch @ serde_json::Value::Object(_)) => *target = patch,
            _ => {}
        }
    }
}
