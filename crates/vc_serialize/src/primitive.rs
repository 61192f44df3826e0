use alloc::string::{String, ToString};
use alloc::vec::Vec;

use indexmap::IndexMap;
use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};
use vc_reflect::ops::Scalar;

/// The output of a serialization: a tree of scalars, sequences and mappings.
///
/// Mappings keep the order in which their entries were produced, which is
/// the declaration order for struct fields and the iteration order for
/// containers.
///
/// `Primitive` implements [`Serialize`], so it can be handed to any `serde`
/// format directly.
///
/// # Examples
///
/// ```
/// use vc_serialize::Primitive;
///
/// let value = Primitive::from_iter([
///     ("id", Primitive::from(10_i64)),
///     ("name", Primitive::from("Andre")),
/// ]);
///
/// assert_eq!(value.get("name").and_then(Primitive::as_str), Some("Andre"));
/// assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"id":10,"name":"Andre"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Primitive {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Seq(Vec<Primitive>),
    Map(IndexMap<String, Primitive>),
}

impl Primitive {
    /// Returns `true` for [`Primitive::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for sequences and mappings.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Seq(_) | Self::Map(_))
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::UInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq(&self) -> Option<&[Primitive]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&IndexMap<String, Primitive>> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the entry `key` of a mapping.
    ///
    /// Returns `None` for other values.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Primitive> {
        self.as_map()?.get(key)
    }
}

impl From<Scalar<'_>> for Primitive {
    fn from(value: Scalar<'_>) -> Self {
        match value {
            Scalar::Null => Self::Null,
            Scalar::Bool(v) => Self::Bool(v),
            Scalar::Int(v) => Self::Int(v),
            Scalar::UInt(v) => Self::UInt(v),
            Scalar::Float(v) => Self::Float(v),
            Scalar::Char(v) => Self::String(v.to_string()),
            Scalar::Str(v) => Self::String(v.into()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Primitive {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => UInt,
    u64 => UInt,
    f64 => Float,
    String => String,
    &str => String,
    Vec<Primitive> => Seq,
    IndexMap<String, Primitive> => Map,
);

impl<K: Into<String>> FromIterator<(K, Primitive)> for Primitive {
    fn from_iter<T: IntoIterator<Item = (K, Primitive)>>(iter: T) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromIterator<Primitive> for Primitive {
    fn from_iter<T: IntoIterator<Item = Primitive>>(iter: T) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::Seq(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Self::Map(entries) => {
                let mut state = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vc_reflect::ops::Scalar;

    use super::Primitive;

    #[test]
    fn from_scalar() {
        assert_eq!(Primitive::from(Scalar::Null), Primitive::Null);
        assert_eq!(Primitive::from(Scalar::Char('x')), Primitive::from("x"));
        assert_eq!(Primitive::from(Scalar::UInt(7)).as_i64(), Some(7));
        assert_eq!(Primitive::from(Scalar::UInt(u64::MAX)).as_i64(), None);
    }

    #[test]
    fn json_keeps_entry_order() {
        let value: Primitive = [
            ("zeta", Primitive::from(true)),
            ("alpha", Primitive::Null),
            (
                "list",
                [Primitive::from(1.5), Primitive::from("a")]
                    .into_iter()
                    .collect(),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"zeta":true,"alpha":null,"list":[1.5,"a"]}"#
        );
    }

    #[test]
    fn ron_output() {
        let value: Primitive = [("id", Primitive::from(3_u32))].into_iter().collect();
        assert_eq!(ron::to_string(&value).unwrap(), r#"{"id":3}"#);
    }
}
