//! # Flattener
//!
//! Walks a [`Structured`] value and produces a [`FlatMap`]. Embedded structured fields are
//! flattened into their parent; keys they would shadow are filed in a collision bucket
//! named after the embedded field.
//!
//! Each level runs in two passes. Direct entries are placed first, then embedded objects
//! are merged in declaration order, so the outcome never depends on where an embedded
//! field sits relative to its siblings.

use crate::config::{DEFAULT_RECURSION_MAX, FlattenConfig};
use crate::error::{FlattenError, FlattenErrorExt};
use crate::field::Structured;
use crate::map::{FlatMap, FlatValue};
use crate::tag::{KeyResolution, resolve_key};
use tracing::{debug, trace};

/// Flattens structured values under a fixed recursion bound.
///
/// Holds no state besides the bound, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flattener {
    recursion_max: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_MAX)
    }
}

impl Flattener {
    /// Creates a flattener that accepts at most `recursion_max` nested levels.
    #[must_use]
    pub const fn new(recursion_max: usize) -> Self {
        Self { recursion_max }
    }

    #[must_use]
    pub const fn from_config(config: &FlattenConfig) -> Self {
        Self::new(config.recursion_max)
    }

    #[must_use]
    pub const fn recursion_max(&self) -> usize {
        self.recursion_max
    }

    /// Flattens `object` into a key/value mapping.
    ///
    /// The top-level object counts as the first level, so a bound of `0` rejects everything.
    ///
    /// # Errors
    /// * [`FlattenError::RecursionExceeded`] If embedded structured fields nest deeper than
    ///   the bound.
    /// * [`FlattenError::NameConflict`] If an embedded field's collision bucket would land on
    ///   a key that is already taken.
    ///
    /// # Notes
    /// Only embedded fields count against the bound. A structured value held by a plain field is
    /// stored as is and flattened by its own `Serialize` impl when the map is encoded, with the
    /// default bound; its errors surface from the encoder, not from this call.
    pub fn flatten<'a>(&self, object: &'a dyn Structured) -> Result<FlatMap<'a>, FlattenError> {
        self.flatten_level(object, 0)
    }

    fn flatten_level<'a>(&self, object: &'a dyn Structured, depth: usize) -> Result<FlatMap<'a>, FlattenError> {
        let depth = depth + 1;
        if depth > self.recursion_max {
            debug!(
                type_name = object.type_name(),
                depth,
                limit = self.recursion_max,
                "Flatten recursion limit reached"
            );
            return Err(FlattenError::RecursionExceeded { limit: self.recursion_max, context: None });
        }

        trace!(type_name = object.type_name(), depth, "Flattening level");

        let mut output = FlatMap::new();
        let mut embedded = Vec::new();

        for field in object.fields() {
            let key = match resolve_key(&field) {
                KeyResolution::Key(key) => key,
                KeyResolution::Omitted(reason) => {
                    trace!(field = field.name(), ?reason, "Field omitted");
                    continue;
                }
            };

            if field.is_embedded()
                && let Some(inner) = field.value().as_structured()
            {
                embedded.push((field.name(), inner));
                continue;
            }

            output.insert(key, FlatValue::Field(field.value()));
        }

        for (name, inner) in embedded {
            let sub = self.flatten_level(inner, depth).context(name)?;
            merge_embedded(&mut output, name, sub)?;
        }

        Ok(output)
    }
}

/// Merges an embedded object's mapping into its parent.
///
/// Shadowed keys go into a single flat bucket stored under `name`.
fn merge_embedded<'a>(output: &mut FlatMap<'a>, name: &'static str, sub: FlatMap<'a>) -> Result<(), FlattenError> {
    let mut bucket = FlatMap::new();

    for (key, value) in sub {
        if output.contains_key(key) {
            bucket.insert(key, value);
        } else {
            output.insert(key, value);
        }
    }

    if bucket.is_empty() {
        return Ok(());
    }
    if output.contains_key(name) {
        debug!(name, "Collision bucket name already taken");
        return Err(FlattenError::NameConflict { name, context: None });
    }

    debug!(name, collisions = bucket.len(), "Filed shadowed keys in collision bucket");
    output.insert(name, FlatValue::Map(bucket));
    Ok(())
}

/// Flattens `object` with the default recursion bound of 20.
///
/// # Errors
/// * See [`Flattener::flatten`].
pub fn to_map(object: &dyn Structured) -> Result<FlatMap<'_>, FlattenError> {
    Flattener::default().flatten(object)
}

/// Flattens `object` with a custom recursion bound.
///
/// # Errors
/// * See [`Flattener::flatten`].
pub fn to_map_with_limit(object: &dyn Structured, recursion_max: usize) -> Result<FlatMap<'_>, FlattenError> {
    Flattener::new(recursion_max).flatten(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldType};

    struct Leaf;

    impl Structured for Leaf {
        fn fields(&self) -> Vec<Field<'_>> {
            Vec::new()
        }
    }

    impl serde::Serialize for Leaf {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_unit()
        }
    }

    impl FieldType for Leaf {
        fn is_zero(&self) -> bool {
            true
        }

        fn as_structured(&self) -> Option<&dyn Structured> {
            Some(self)
        }
    }

    struct Holder {
        id: u32,
        leaf: Leaf,
    }

    impl Structured for Holder {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("id", &self.id), Field::new("leaf", &self.leaf).embedded()]
        }
    }

    #[test]
    fn zero_bound_rejects_the_top_level() {
        let err = Flattener::new(0).flatten(&Leaf).unwrap_err();
        assert!(matches!(err, FlattenError::RecursionExceeded { limit: 0, .. }));
    }

    #[test]
    fn empty_object_at_the_boundary_still_counts() {
        let holder = Holder { id: 1, leaf: Leaf };
        assert!(Flattener::new(2).flatten(&holder).is_ok());

        let err = Flattener::new(1).flatten(&holder).unwrap_err();
        assert!(matches!(err, FlattenError::RecursionExceeded { limit: 1, .. }));
        assert_eq!(err.context_path(), Some("leaf"));
    }

    #[test]
    fn empty_embedded_object_contributes_nothing() {
        let holder = Holder { id: 7, leaf: Leaf };
        let map = to_map(&holder).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn from_config_uses_the_configured_bound() {
        let config = FlattenConfig { recursion_max: 3 };
        assert_eq!(Flattener::from_config(&config).recursion_max(), 3);
        assert_eq!(Flattener::default().recursion_max(), DEFAULT_RECURSION_MAX);
    }
}
