//! # Field Schema
//!
//! The explicit schema-description layer the flattener walks: [`Structured`] lists a value's
//! fields, each [`Field`] carries its name, tag, visibility, embedding marker and a borrowed
//! [`FieldType`] value.

use std::fmt;

/// A structured object whose fields can be enumerated.
///
/// Usually derived with `#[derive(Structured)]`; hand-written impls are fine as long as
/// `fields` returns the same list on every call for an unchanged value.
pub trait Structured {
    /// Name used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A value that can be placed into a flattened mapping.
pub trait FieldType: erased_serde::Serialize {
    /// Returns `true` if the value is its type's zero/empty value.
    fn is_zero(&self) -> bool;

    /// Returns the value as a structured object, if it is one.
    fn as_structured(&self) -> Option<&dyn Structured> {
        None
    }
}

/// One field of a [`Structured`] value.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    tag: Option<&'static str>,
    embedded: bool,
    exported: bool,
    value: &'a dyn FieldType,
}

impl<'a> Field<'a> {
    /// Creates an exported, untagged, non-embedded field.
    pub const fn new(name: &'static str, value: &'a dyn FieldType) -> Self {
        Self { name, tag: None, embedded: false, exported: true, value }
    }

    /// Sets the serialization tag (`"name,flag,..."`).
    #[must_use]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Marks the field as embedded.
    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Sets whether the field is visible outside its defining type.
    #[must_use]
    pub const fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    #[must_use]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    #[must_use]
    pub const fn value(&self) -> &'a dyn FieldType {
        self.value
    }

    /// Returns `true` if the field holds its type's zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("embedded", &self.embedded)
            .field("exported", &self.exported)
            .finish_non_exhaustive()
    }
}
