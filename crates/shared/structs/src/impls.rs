use crate::field::{FieldType, Structured};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl FieldType for bool {
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl FieldType for char {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl FieldType for () {
    #[inline]
    fn is_zero(&self) -> bool {
        true
    }
}

impl FieldType for str {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FieldType for String {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FieldType for Cow<'_, str> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// --- Indirection ---

impl<T: FieldType + Serialize + ?Sized> FieldType for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_structured(&self) -> Option<&dyn Structured> {
        (**self).as_structured()
    }
}

impl<T: FieldType + Serialize + ?Sized> FieldType for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_structured(&self) -> Option<&dyn Structured> {
        (**self).as_structured()
    }
}

impl<T: FieldType + Serialize + ?Sized> FieldType for Arc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_structured(&self) -> Option<&dyn Structured> {
        (**self).as_structured()
    }
}

/// `None` is the zero value; `Some` of a structured value is itself structured.
impl<T: FieldType + Serialize> FieldType for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn as_structured(&self) -> Option<&dyn Structured> {
        self.as_ref().and_then(|value| value.as_structured())
    }
}

impl<T: FieldType + Serialize + ?Sized> FieldType for Rc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_structured(&self) -> Option<&dyn Structured> {
        (**self).as_structured()
    }
}

// --- Collections ---

/// Zero only when empty, like slices; `serde` covers lengths up to 32.
impl<T: Serialize, const N: usize> FieldType for [T; N]
where
    [T; N]: Serialize,
{
    #[inline]
    fn is_zero(&self) -> bool {
        N == 0
    }
}

impl<T: Serialize> FieldType for [T] {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Serialize> FieldType for Vec<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Serialize + Eq + Hash, V: Serialize, S: BuildHasher> FieldType for HashMap<K, V, S> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Serialize + Ord, V: Serialize> FieldType for BTreeMap<K, V> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Serialize + Eq + Hash, S: BuildHasher> FieldType for HashSet<T, S> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Serialize + Ord> FieldType for BTreeSet<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// --- Foreign types ---

/// Zero follows JSON emptiness: `null`, `false`, `0`, `""`, `[]` and `{}`.
impl FieldType for serde_json::Value {
    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
            Self::String(s) => s.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Object(map) => map.is_empty(),
        }
    }
}

/// The Unix epoch is treated as the unset timestamp.
impl FieldType for DateTime<Utc> {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::UNIX_EPOCH
    }
}
