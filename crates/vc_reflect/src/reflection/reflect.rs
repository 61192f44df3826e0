use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime introspection in [`vc_reflect`].
///
/// A reflected value describes itself through [`reflect_ref`], which returns
/// a [`ReflectRef`] view matching the *kind* of the value: a struct with
/// declared fields, an enumeration, a list or map container, a loose record,
/// a date/time value or a plain scalar.
///
/// # Recommendations
///
/// Use [the derive macro for `Reflect`] for structs and enums. It implements
/// this trait together with [`Typed`] and [`Struct`] or [`Enum`], and records
/// field names, visibility and custom attributes in static type metadata.
///
/// # Type Identification
///
/// `Box<dyn Reflect>` implements [`Any`] for the box itself, so prefer
/// [`Reflect::ty_id`] and [`<dyn Reflect>::downcast_ref`] over the methods
/// on [`Any`]:
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::Reflect;
///
/// let value: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert_eq!(value.ty_id(), TypeId::of::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&32));
/// ```
///
/// # Initialization
///
/// Some values can be declared without ever being assigned, for example an
/// empty [`OnceLock`](std::sync::OnceLock). Such values report `false` from
/// [`is_initialized`], and struct traversals skip the field entirely.
///
/// [`vc_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`is_initialized`]: Reflect::is_initialized
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Typed`]: crate::info::Typed
/// [`Struct`]: crate::ops::Struct
/// [`Enum`]: crate::ops::Enum
pub trait Reflect: Send + Sync + Any {
    /// Returns a kind-specific view of this value.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_reflect::{Reflect, ops::{ReflectRef, Scalar}};
    ///
    /// let value = String::from("hello");
    /// assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(Scalar::Str("hello"))));
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns the [`ReflectKind`] of this value.
    ///
    /// Wrapper types such as `Option<T>` report the kind of the value they
    /// currently hold.
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// Returns the name of the underlying type, used in diagnostics.
    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns `false` if the value is declared but was never assigned.
    #[inline]
    fn is_initialized(&self) -> bool {
        true
    }

    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// When you call `Box<dyn Reflect>::type_id`, it will return
    /// the [`TypeId`] of the box, instead of the boxed value.
    #[inline(always)]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.reflect_kind(), self.reflect_type_name())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `reflect_kind` and `reflect_ref` for a kind whose view is the
/// value itself, e.g. `ReflectRef::List(self)`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
