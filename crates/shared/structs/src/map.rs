//! # Flattened Mapping
//!
//! [`FlatMap`] is the output of the flattener: an unordered mapping from resolved keys to
//! either a borrowed field value or a nested collision bucket.

use crate::field::FieldType;
use fxhash::FxHashMap;
use serde::{Serialize, Serializer};
use std::collections::hash_map;
use std::fmt;

/// A value in a [`FlatMap`].
pub enum FlatValue<'a> {
    /// A field value borrowed from the flattened object.
    Field(&'a dyn FieldType),
    /// A collision bucket holding an embedded object's shadowed keys.
    Map(FlatMap<'a>),
}

impl<'a> FlatValue<'a> {
    #[must_use]
    pub const fn as_map(&self) -> Option<&FlatMap<'a>> {
        match self {
            Self::Map(map) => Some(map),
            Self::Field(_) => None,
        }
    }

    #[must_use]
    pub const fn as_field(&self) -> Option<&'a dyn FieldType> {
        match self {
            Self::Field(value) => Some(*value),
            Self::Map(_) => None,
        }
    }
}

impl Serialize for FlatValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Field(value) => erased_serde::serialize(*value, serializer),
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl fmt::Debug for FlatValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(_) => match serde_json::to_string(self) {
                Ok(json) => f.write_str(&json),
                Err(_) => f.write_str("<unencodable>"),
            },
            Self::Map(map) => map.fmt(f),
        }
    }
}

/// Unordered mapping produced by [`Flattener::flatten`](crate::Flattener::flatten).
///
/// Keys are unique. Values borrow from the flattened object, so the map cannot outlive it.
#[derive(Default)]
pub struct FlatMap<'a> {
    entries: FxHashMap<&'static str, FlatValue<'a>>,
}

impl<'a> FlatMap<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FlatValue<'a>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FlatValue<'a>)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Encodes the mapping as a JSON value.
    ///
    /// # Errors
    /// Returns an error if a field value fails to serialize.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: FlatValue<'a>) -> Option<FlatValue<'a>> {
        self.entries.insert(key, value)
    }
}

impl<'a> IntoIterator for FlatMap<'a> {
    type Item = (&'static str, FlatValue<'a>);
    type IntoIter = hash_map::IntoIter<&'static str, FlatValue<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FlatMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl fmt::Debug for FlatMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
