use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::ops::{Map, MapEntryIter};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Record trait

/// A loose key/value object without static type information.
///
/// Records have no declared fields, no visibility and no attributes.
/// A serializer treats them like maps through [`Record::as_map`].
pub trait Record: Reflect {
    /// Returns the map view of this record.
    fn as_map(&self) -> &dyn Map;
}

// -----------------------------------------------------------------------------
// DynamicRecord

/// An insertion-ordered record of named values.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::{DynamicRecord, ReflectRef}};
///
/// let mut record = DynamicRecord::new();
/// record.insert("name", String::from("Andre"));
/// record.insert("age", 30_u32);
/// record.insert("name", String::from("Gil"));
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("name").unwrap().downcast_ref::<String>().unwrap(), "Gil");
/// assert!(matches!(record.reflect_ref(), ReflectRef::Record(_)));
/// ```
#[derive(Default)]
pub struct DynamicRecord {
    entries: Vec<(Cow<'static, str>, Box<dyn Reflect>)>,
}

impl DynamicRecord {
    /// Creates an empty `DynamicRecord`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `DynamicRecord` with specific capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a boxed value.
    ///
    /// An existing entry with the same name keeps its position and gets
    /// the new value.
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Inserts a value, see [`DynamicRecord::insert_boxed`].
    #[inline]
    pub fn insert<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    /// Returns the value of the given entry.
    pub fn get(&self, name: &str) -> Option<&dyn Reflect> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| &**value)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicRecord {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Reflect>)>>(entries: T) -> Self {
        let mut record = DynamicRecord::new();
        for (name, value) in entries {
            record.insert_boxed(name, value);
        }
        record
    }
}

impl Reflect for DynamicRecord {
    impl_reflect_cast_fn!(Record);
}

impl Record for DynamicRecord {
    #[inline]
    fn as_map(&self) -> &dyn Map {
        self
    }
}

impl Map for DynamicRecord {
    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> MapEntryIter<'_> {
        Box::new(
            self.entries
                .iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_ref()), &**value)),
        )
    }

    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        DynamicRecord::get(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::DynamicRecord;
    use crate::Reflect;
    use crate::ops::Map;

    #[test]
    fn insertion_order() {
        let record: DynamicRecord = [
            ("b", 1_u8.into_boxed_reflect()),
            ("a", 2_u8.into_boxed_reflect()),
            ("b", 3_u8.into_boxed_reflect()),
        ]
        .into_iter()
        .collect();

        let map: &dyn Map = &record;
        let entries: Vec<_> = map
            .iter()
            .map(|(k, v)| (k.into_owned(), *v.downcast_ref::<u8>().unwrap()))
            .collect();
        assert_eq!(entries, [("b".to_owned(), 3), ("a".to_owned(), 2)]);
        assert!(map.get("c").is_none());
    }
}
