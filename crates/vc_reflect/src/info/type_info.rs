use core::{error, fmt};

use crate::info::{CustomAttributes, EnumInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected value.
///
/// Each kind corresponds to a variant of [`ReflectRef`], which itself
/// corresponds to the shape a serializer has to handle.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`] or
/// [`ReflectRef::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef`]: crate::ops::ReflectRef
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Enum,
    List,
    Map,
    Record,
    DateTime,
    Scalar,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Enum => f.pad("Enum"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Record => f.pad("Record"),
            Self::DateTime => f.pad("DateTime"),
            Self::Scalar => f.pad("Scalar"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for derived types.
///
/// # Content
///
/// A `TypeInfo` contains:
///
/// - **kind**: `Struct` or `Enum`.
/// - **name**: the type name, see [`core::any::type_name`].
/// - **attributes**: [`CustomAttributes`], similar to C# attributes.
/// - field or variant information, via [`StructInfo`] and [`EnumInfo`].
///
/// # Obtain
///
/// A type's `TypeInfo` is provided by the [`Typed`] trait, which is
/// implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// At runtime, [`Struct::struct_info`] and [`Enum::enum_info`] return the
/// same static reference from a `dyn` value.
///
/// [`Struct::struct_info`]: crate::ops::Struct::struct_info
/// [`Enum::enum_info`]: crate::ops::Enum::enum_info
#[derive(Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);

    /// Returns the [`ReflectKind`] of the described type.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
        }
    }

    /// Returns the type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Struct(info) => info.type_name(),
            Self::Enum(info) => info.type_name(),
        }
    }

    /// Returns the type-level custom attributes.
    #[inline]
    pub fn custom_attributes(&self) -> &CustomAttributes {
        match self {
            Self::Struct(info) => info.custom_attributes(),
            Self::Enum(info) => info.custom_attributes(),
        }
    }
}

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// This trait is automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect)
/// and cannot be implemented for dynamic types.
///
/// # Implementation
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] so the info is
/// built only once:
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{NamedField, StructInfo, TypeInfo, Typed, Visibility};
/// use vc_reflect::ops::{ReflectRef, Struct};
///
/// struct Foo {
///     bar: u32,
/// }
///
/// impl Typed for Foo {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[
///                 NamedField::new::<u32>("bar", Visibility::Private),
///             ]))
///         })
///     }
/// }
///
/// impl Struct for Foo {
///     fn struct_info(&self) -> &'static StructInfo {
///         match Self::type_info() {
///             TypeInfo::Struct(info) => info,
///             _ => unreachable!(),
///         }
///     }
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         match index {
///             0 => Some(&self.bar),
///             _ => None,
///         }
///     }
///     fn field_len(&self) -> usize {
///         1
///     }
/// }
///
/// impl Reflect for Foo {
///     fn reflect_ref(&self) -> ReflectRef<'_> {
///         ReflectRef::Struct(self)
///     }
/// }
///
/// let foo = Foo { bar: 7 };
/// assert_eq!(foo.struct_info().field_at(0).unwrap().name(), "bar");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

#[cfg(test)]
mod tests {
    use super::{ReflectKind, TypeInfo};
    use crate::info::{EnumInfo, NamedField, StructInfo, VariantInfo, Visibility};

    #[test]
    fn cast_mismatch_reports_kinds() {
        struct Foo;
        let info = TypeInfo::Struct(StructInfo::new::<Foo>(&[NamedField::new::<u8>(
            "a",
            Visibility::Public,
        )]));

        assert!(info.as_struct().is_ok());
        let err = info.as_enum().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Enum);
        assert_eq!(err.received, ReflectKind::Struct);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Enum, received Struct"
        );
    }

    #[test]
    fn kind_and_name() {
        enum Bar {}
        let info = TypeInfo::Enum(EnumInfo::new::<Bar>(&[VariantInfo::unit("A")]));
        assert_eq!(info.kind(), ReflectKind::Enum);
        assert!(info.type_name().ends_with("Bar"));
        assert!(info.custom_attributes().is_empty());
    }
}
