//! # Squad Up Structs
//!
//! A generic flattening serializer. A [`Structured`] value lists its fields together with
//! their tags, visibility and embedding marker; the [`Flattener`] turns it into a flat
//! [`FlatMap`] ready for encoding.
//!
//! ## Keys
//! A field's key comes from [`resolve_key`]: unexported fields and fields tagged `"-"` are
//! dropped, `omitempty` drops zero values, and a tag's first segment renames the field.
//!
//! ## Embedding
//! Fields marked `embed` whose value is structured are flattened into the parent. Keys the
//! parent already holds are filed in a collision bucket named after the embedded field. If
//! that name is taken too, flattening fails with [`FlattenError::NameConflict`].
//!
//! ```
//! use squadup_structs::{Structured, StructuredExt};
//!
//! #[derive(Structured)]
//! struct Base {
//!     pub a: String,
//!     pub b: String,
//! }
//!
//! #[derive(Structured)]
//! struct Parent {
//!     pub a: String,
//!     #[field(embed)]
//!     pub base: Base,
//! }
//!
//! let parent = Parent { a: "a1".into(), base: Base { a: "a2".into(), b: "b2".into() } };
//! let json = parent.to_flat_map().unwrap().to_json().unwrap();
//! assert_eq!(json, serde_json::json!({ "a": "a1", "b": "b2", "base": { "a": "a2" } }));
//! ```

mod config;
mod error;
mod extensions;
mod field;
mod flatten;
mod impls;
mod map;
mod tag;

pub use config::{DEFAULT_RECURSION_MAX, FlattenConfig};
pub use error::{FlattenError, FlattenErrorExt};
pub use extensions::StructuredExt;
pub use field::{Field, FieldType, Structured};
pub use flatten::{Flattener, to_map, to_map_with_limit};
pub use map::{FlatMap, FlatValue};
pub use tag::{IGNORE_TAG, KeyResolution, OMIT_EMPTY, OmitReason, Tag, TagOption, resolve_key};

pub use serde;
pub use squadup_derive::Structured;

#[doc(hidden)]
pub mod __private {
    use crate::field::Structured;
    use crate::flatten::Flattener;
    use serde::{Serialize, Serializer};

    /// Backs the `Serialize` impl generated by `#[derive(Structured)]`.
    pub fn serialize_structured<T: Structured, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        let map = Flattener::default().flatten(value).map_err(serde::ser::Error::custom)?;
        map.serialize(serializer)
    }
}
