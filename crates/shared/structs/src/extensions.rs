//! # Structured Extensions
//!
//! The [`StructuredExt`] extension trait lets any sized [`Structured`] value flatten itself.

use crate::error::FlattenError;
use crate::field::Structured;
use crate::flatten::Flattener;
use crate::map::FlatMap;

/// An extension trait providing flattening methods on structured values.
///
/// Automatically implemented for every sized [`Structured`] type.
pub trait StructuredExt: Structured + Sized {
    /// Flattens the value with the default recursion bound.
    ///
    /// # Errors
    /// * [`FlattenError::RecursionExceeded`] If embedded fields nest too deep.
    /// * [`FlattenError::NameConflict`] If a collision bucket cannot be placed.
    fn to_flat_map(&self) -> Result<FlatMap<'_>, FlattenError> {
        Flattener::default().flatten(self)
    }

    /// Flattens the value with the given flattener.
    ///
    /// # Errors
    /// * See [`StructuredExt::to_flat_map`] for failure modes.
    fn to_flat_map_with(&self, flattener: &Flattener) -> Result<FlatMap<'_>, FlattenError> {
        flattener.flatten(self)
    }
}

impl<T: Structured> StructuredExt for T {}
