use core::iter::FusedIterator;

use crate::Reflect;
use crate::info::{NamedField, StructInfo};

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased struct operations via reflection.
///
/// This trait represents structs with named fields, e.g.
/// `Foo{ id: i32, name: String }`. Fields are exposed in declaration order,
/// together with their static [`NamedField`] metadata.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a struct
/// with named fields, this trait will be automatically implemented.
/// Fields marked `#[reflect(ignore)]` are not exposed.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub id: u32,
///     name: String,
/// }
///
/// let foo = Foo { id: 1, name: "a".into() };
/// let view: &dyn Struct = &foo;
///
/// assert_eq!(view.field_len(), 2);
/// assert_eq!(view.name_at(1), Some("name"));
/// assert_eq!(view.field_as::<u32>("id"), Some(&1));
///
/// let names: Vec<_> = view.iter_fields().map(|(info, _)| info.name()).collect();
/// assert_eq!(names, ["id", "name"]);
/// ```
pub trait Struct: Reflect {
    /// Returns the static [`StructInfo`] of this struct.
    fn struct_info(&self) -> &'static StructInfo;

    /// Returns a reference to the value of the field with index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns a reference to the value of the field named `name`.
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_at(self.struct_info().index_of(name)?)
    }

    /// Returns the name of the field with index `index`.
    #[inline]
    fn name_at(&self, index: usize) -> Option<&'static str> {
        self.struct_info().field_at(index).map(NamedField::name)
    }
}

impl dyn Struct {
    /// Returns an iterator over `(field info, field value)` pairs in
    /// declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }

    /// Returns a typed reference to the field at the given field name.
    ///
    /// Returns `None` if the field does not exist or has another type.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a [`Struct`].
pub struct StructFieldIter<'a> {
    structure: &'a dyn Struct,
    info: &'static StructInfo,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline]
    pub fn new(structure: &'a dyn Struct) -> Self {
        Self {
            structure,
            info: structure.struct_info(),
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static NamedField, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.info.field_at(self.index)?;
        let value = self.structure.field_at(self.index)?;
        self.index += 1;
        Some((info, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.structure.field_len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}
