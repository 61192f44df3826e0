use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::CustomAttributes;
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// Visibility

/// The visibility class of a struct field.
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) maps Rust visibility to these classes:
///
/// - `pub` -> [`Visibility::Public`]
/// - `pub(crate)`, `pub(super)`, `pub(in path)` -> [`Visibility::Protected`]
/// - no modifier -> [`Visibility::Private`]
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Visibility;
///
/// assert_eq!(Visibility::from_token("PUBLIC"), Some(Visibility::Public));
/// assert_eq!(Visibility::from_token("internal"), None);
/// assert_eq!(Visibility::Protected.to_string(), "protected");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// All visibility classes.
    pub const ALL: [Visibility; 3] = [Self::Public, Self::Protected, Self::Private];

    /// Returns the lowercase token of this class.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    /// Parses a visibility token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|vis| vis.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{Typed, Visibility}};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// assert_eq!(field_info.visibility(), Visibility::Public);
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    visibility: Visibility,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl NamedField {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str, visibility: Visibility) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            visibility,
            custom_attributes: None,
        }
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field visibility class.
    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}
