//! Descriptor sources.
//!
//! A source reads the live descriptor of one property of one object. Chains
//! call it from `load` and append whatever it returns.

use crate::types::Descriptor;
use serde_json::Value;
use std::borrow::Borrow;

/// Reads a live snapshot for an (object, key) pair.
pub trait DescriptorSource<O: ?Sized, S> {
    /// Returns `None` when the object has no such property.
    fn fetch(&self, object: &O, key: &str) -> Option<S>;
}

impl<O: ?Sized, S, F> DescriptorSource<O, S> for F
where
    F: Fn(&O, &str) -> Option<S>,
{
    fn fetch(&self, object: &O, key: &str) -> Option<S> {
        self(object, key)
    }
}

/// Reads own properties of a JSON object.
///
/// Plain object properties are writable, enumerable and configurable, so
/// every descriptor it produces has all flags set. Non-object values have
/// no own properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct OwnPropertySource;

impl<O> DescriptorSource<O, Descriptor> for OwnPropertySource
where
    O: Borrow<Value>,
{
    fn fetch(&self, object: &O, key: &str) -> Option<Descriptor> {
        Borrow::<Value>::borrow(object)
            .as_object()?
            .get(key)
            .map(|value| Descriptor::new(value.clone()))
    }
}

impl<O> DescriptorSource<O, Value> for OwnPropertySource
where
    O: Borrow<Value>,
{
    fn fetch(&self, object: &O, key: &str) -> Option<Value> {
        let descriptor: Descriptor = DescriptorSource::<O, Descriptor>::fetch(self, object, key)?;
        serde_json::to_value(descriptor).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_own_property_found() {
        let object = json!({"a": 1});
        let found: Option<Descriptor> = OwnPropertySource.fetch(&object, "a");
        assert_eq!(found, Some(Descriptor::new(json!(1))));
    }

    #[test]
    fn test_own_property_missing() {
        let object = Arc::new(json!({"a": 1}));
        let found: Option<Descriptor> = OwnPropertySource.fetch(&object, "b");
        assert!(found.is_none());

        let primitive = json!(42);
        let found: Option<Descriptor> = OwnPropertySource.fetch(&primitive, "a");
        assert!(found.is_none());
    }

    #[test]
    fn test_own_property_as_json() {
        let object = json!({"a": "x"});
        let found: Option<Value> = OwnPropertySource.fetch(&object, "a");
        assert_eq!(
            found,
            Some(json!({"value": "x", "writable": true, "enumerable": true, "configurable": true}))
        );
    }

    #[test]
    fn test_closure_source() {
        let source = |object: &Vec<u32>, key: &str| -> Option<u32> {
            key.parse::<usize>().ok().and_then(|i| object.get(i).copied())
        };
        assert_eq!(source.fetch(&vec![10, 20], "1"), Some(20));
        assert_eq!(source.fetch(&vec![10, 20], "5"), None);
    }
}
