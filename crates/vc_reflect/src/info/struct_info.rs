use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::{CustomAttributes, NamedField};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

const FIELD_INDEX_SEED: u64 = 0x95EE_04C4_F326_B271;

/// A container for compile-time named struct info.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     name: String,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("name"), Some(1));
/// assert_eq!(info.field_names(), &["val", "name"]);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    type_name: &'static str,
    fields: HashMap<&'static str, usize, FixedState>,
    field_infos: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl StructInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Any>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let mut indices = HashMap::with_capacity_and_hasher(
            fields.len(),
            FixedState::with_seed(FIELD_INDEX_SEED),
        );
        for (index, field) in fields.iter().enumerate() {
            indices.insert(field.name(), index);
        }

        Self {
            type_name: core::any::type_name::<T>(),
            fields: indices,
            field_infos: fields.into(),
            field_names,
            custom_attributes: None,
        }
    }

    /// Returns the type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_infos.get(*self.fields.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.field_infos.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.field_infos.iter()
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_infos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::StructInfo;
    use crate::info::{CustomAttributes, NamedField, Visibility};

    struct Sample;

    #[test]
    fn declaration_order() {
        let info = StructInfo::new::<Sample>(&[
            NamedField::new::<u32>("zeta", Visibility::Public),
            NamedField::new::<u32>("alpha", Visibility::Private),
            NamedField::new::<u32>("mid", Visibility::Protected),
        ]);

        let names: Vec<_> = info.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(info.index_of("alpha"), Some(1));
        assert_eq!(info.field("mid").unwrap().visibility(), Visibility::Protected);
        assert!(info.field("missing").is_none());
        assert!(info.field_at(3).is_none());
        assert!(info.type_name().ends_with("Sample"));
    }

    #[test]
    fn type_attributes() {
        let info = StructInfo::new::<Sample>(&[])
            .with_custom_attributes(CustomAttributes::new().with_attribute("tag"));
        assert_eq!(info.get_attribute::<&str>(), Some(&"tag"));
        assert_eq!(info.field_len(), 0);
    }
}
