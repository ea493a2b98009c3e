//! # Field Tags & Key Resolution
//!
//! A tag is a string of the form `name,flag,flag`. The first segment overrides the output
//! key (empty keeps the field name), the remaining segments are flags. The whole tag `"-"`
//! drops the field.

use crate::field::Field;

/// The tag that omits a field unconditionally.
pub const IGNORE_TAG: &str = "-";

/// Flag omitting a field that holds its type's zero value.
pub const OMIT_EMPTY: &str = "omitempty";

/// A flag segment of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOption<'t> {
    /// `omitempty`
    OmitEmpty,
    /// Any other flag. Recognised, but carries no behavior.
    Other(&'t str),
}

impl<'t> From<&'t str> for TagOption<'t> {
    fn from(segment: &'t str) -> Self {
        match segment {
            OMIT_EMPTY => Self::OmitEmpty,
            other => Self::Other(other),
        }
    }
}

/// A parsed field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'t> {
    raw: &'t str,
    name: &'t str,
    options: &'t str,
}

impl<'t> Tag<'t> {
    /// Splits a raw tag into its name and flag segments.
    #[must_use]
    pub fn parse(raw: &'t str) -> Self {
        let (name, options) = raw.split_once(',').unwrap_or((raw, ""));
        Self { raw, name, options }
    }

    #[must_use]
    pub const fn raw(&self) -> &'t str {
        self.raw
    }

    /// The override name; empty when the tag starts with a flag.
    #[must_use]
    pub const fn name(&self) -> &'t str {
        self.name
    }

    /// Iterates over the flag segments, skipping empty ones.
    pub fn options(&self) -> impl Iterator<Item = TagOption<'t>> + use<'t> {
        let options: &'t str = self.options;
        options.split(',').filter(|segment| !segment.is_empty()).map(TagOption::from)
    }

    #[must_use]
    pub fn has(&self, option: TagOption<'_>) -> bool {
        self.options().any(|candidate| candidate == option)
    }

    /// Returns `true` for the exact tag `"-"`.
    #[must_use]
    pub fn is_ignore(&self) -> bool {
        self.raw == IGNORE_TAG
    }
}

/// Why a field was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmitReason {
    /// The field is not visible outside its defining type.
    Unexported,
    /// The field is tagged `"-"`.
    Ignored,
    /// The field is tagged `omitempty` and holds a zero value.
    Empty,
}

/// Outcome of [`resolve_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResolution {
    Key(&'static str),
    Omitted(OmitReason),
}

impl KeyResolution {
    #[must_use]
    pub const fn key(self) -> Option<&'static str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Omitted(_) => None,
        }
    }
}

/// Decides the output key of a field, or that it must be omitted.
///
/// Visibility is checked first and overrides the tag. Without a tag the field name is the
/// key. Unknown flags are ignored.
#[must_use]
pub fn resolve_key(field: &Field<'_>) -> KeyResolution {
    if !field.is_exported() {
        return KeyResolution::Omitted(OmitReason::Unexported);
    }

    let Some(raw) = field.tag() else {
        return KeyResolution::Key(field.name());
    };

    let tag = Tag::parse(raw);
    if tag.is_ignore() {
        return KeyResolution::Omitted(OmitReason::Ignored);
    }
    if tag.has(TagOption::OmitEmpty) && field.is_zero() {
        return KeyResolution::Omitted(OmitReason::Empty);
    }

    if tag.name().is_empty() {
        KeyResolution::Key(field.name())
    } else {
        KeyResolution::Key(tag.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parse_splits_name_and_options() {
        let tag = Tag::parse("first_name,omitempty,string");
        assert_eq!(tag.name(), "first_name");
        assert_eq!(
            tag.options().collect::<Vec<_>>(),
            vec![TagOption::OmitEmpty, TagOption::Other("string")]
        );
        assert!(tag.has(TagOption::OmitEmpty));
    }

    #[test]
    fn tag_parse_without_options() {
        let tag = Tag::parse("id");
        assert_eq!(tag.name(), "id");
        assert_eq!(tag.options().count(), 0);
        assert!(!tag.is_ignore());
    }

    #[test]
    fn tag_parse_leading_flag_has_empty_name() {
        let tag = Tag::parse(",omitempty");
        assert_eq!(tag.name(), "");
        assert!(tag.has(TagOption::OmitEmpty));
    }

    #[test]
    fn only_the_exact_dash_is_ignore() {
        assert!(Tag::parse("-").is_ignore());
        assert!(!Tag::parse("-,").is_ignore());
        assert_eq!(Tag::parse("-,").name(), "-");
    }

    #[test]
    fn untagged_field_keeps_its_name() {
        let value = String::from("x");
        let field = Field::new("Str", &value);
        assert_eq!(resolve_key(&field), KeyResolution::Key("Str"));
    }

    #[test]
    fn unexported_field_is_omitted_whatever_the_tag() {
        let value = String::from("x");
        let field = Field::new("secret", &value).with_tag("renamed").exported(false);
        assert_eq!(resolve_key(&field), KeyResolution::Omitted(OmitReason::Unexported));
    }

    #[test]
    fn dash_tag_omits_field() {
        let value = String::from("x");
        let field = Field::new("b_field", &value).with_tag("-");
        assert_eq!(resolve_key(&field), KeyResolution::Omitted(OmitReason::Ignored));
    }

    #[test]
    fn omitempty_depends_on_zero_value() {
        let empty = String::new();
        let filled = String::from("ada");

        let field = Field::new("first_name", &empty).with_tag("first_name,omitempty");
        assert_eq!(resolve_key(&field), KeyResolution::Omitted(OmitReason::Empty));

        let field = Field::new("first_name", &filled).with_tag("first_name,omitempty");
        assert_eq!(resolve_key(&field), KeyResolution::Key("first_name"));
    }

    #[test]
    fn leading_flag_falls_back_to_field_name() {
        let value = 3_u32;
        let field = Field::new("count", &value).with_tag(",omitempty");
        assert_eq!(resolve_key(&field).key(), Some("count"));
    }

    #[test]
    fn unknown_flags_are_tolerated() {
        let value = 3_u32;
        let field = Field::new("count", &value).with_tag("total,string,inline");
        assert_eq!(resolve_key(&field).key(), Some("total"));
    }
}
