use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::Reflect;

// -----------------------------------------------------------------------------
// MapKey

/// A map key that can be rendered as a string.
///
/// Keys are rendered once per entry when a map is traversed.
pub trait MapKey: Send + Sync + 'static {
    /// Returns the string form of this key.
    fn map_key(&self) -> Cow<'_, str>;
}

impl MapKey for String {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl MapKey for &'static str {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl MapKey for Cow<'static, str> {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

macro_rules! impl_map_key_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MapKey for $ty {
                #[inline]
                fn map_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_map_key_display!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

// -----------------------------------------------------------------------------
// Map trait

/// A boxed iterator over the entries of a [`Map`].
pub type MapEntryIter<'a> = Box<dyn Iterator<Item = (Cow<'a, str>, &'a dyn Reflect)> + 'a>;

/// A trait for type-erased map-like operations via reflection.
///
/// Keys are exposed in their string form, see [`MapKey`].
/// Entries are yielded in the iteration order of the underlying collection:
/// sorted for `BTreeMap`, insertion order for `IndexMap`, unspecified for
/// `HashMap`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::ops::Map;
///
/// let mut map = BTreeMap::new();
/// map.insert(2_u8, "two");
/// map.insert(1_u8, "one");
///
/// let map_ref: &dyn Map = &map;
/// let keys: Vec<_> = map_ref.iter().map(|(k, _)| k.into_owned()).collect();
/// assert_eq!(keys, ["1", "2"]);
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over `(key, value)` pairs.
    fn iter(&self) -> MapEntryIter<'_>;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value for the given rendered key.
    ///
    /// This is O(N) complexity.
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}
