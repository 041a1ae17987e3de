//! Generic deep merge
//!
//! Records merge field by field, mappings merge key by key and primitives
//! are replaced. Arrays are treated as primitives: an incoming array replaces
//! the existing one wholesale and is never concatenated.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Structural merge of a patch into an existing value
///
/// The incoming side wins at every leaf. Keys absent from the patch leave the
/// existing value untouched.
pub trait DeepMerge {
    /// Merge `patch` into `self`
    fn deep_merge(&mut self, patch: Self);
}

/// Merge an optional patch into a field that always has a value
pub fn merge_field<T: DeepMerge>(slot: &mut T, patch: Option<T>) {
    if let Some(patch) = patch {
        slot.deep_merge(patch);
    }
}

macro_rules! replace_on_merge {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepMerge for $ty {
                fn deep_merge(&mut self, patch: Self) {
                    *self = patch;
                }
            }
        )*
    };
}

replace_on_merge!(bool, String);

impl<T> DeepMerge for Vec<T> {
    fn deep_merge(&mut self, patch: Self) {
        *self = patch;
    }
}

/// `None` in the patch means "not provided"
impl<T: DeepMerge> DeepMerge for Option<T> {
    fn deep_merge(&mut self, patch: Self) {
        let Some(patch) = patch else {
            return;
        };
        match self {
            Some(current) => current.deep_merge(patch),
            None => *self = Some(patch),
        }
    }
}

impl<K: Ord, T: DeepMerge> DeepMerge for BTreeMap<K, T> {
    fn deep_merge(&mut self, patch: Self) {
        for (key, value) in patch {
            match self.get_mut(&key) {
                Some(current) => current.deep_merge(value),
                None => {
                    self.insert(key, value);
                }
            }
        }
    }
}

impl DeepMerge for Map<String, Value> {
    fn deep_merge(&mut self, patch: Self) {
        for (key, value) in patch {
            match self.get_mut(&key) {
                Some(current) => current.deep_merge(value),
                None => {
                    self.insert(key, value);
                }
            }
        }
    }
}

/// Objects merge recursively, anything else (null and arrays included) replaces
impl DeepMerge for Value {
    fn deep_merge(&mut self, patch: Self) {
        match (self, patch) {
            (Value::Object(current), Value::Object(patch)) => current.deep_merge(patch),
            (slot, patch) => *slot = patch,
        }
    }
}
