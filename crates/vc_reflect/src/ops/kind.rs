use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{DateTime, Enum, List, Map, Record, Scalar, Struct};

/// An immutable enumeration of ["kinds"] of a reflected type.
///
/// Each variant contains a trait object with methods specific to a kind of
/// type, except [`ReflectRef::Scalar`] which carries the value itself.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
///
/// ["kinds"]: ReflectKind
/// [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Enum(&'a dyn Enum),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Record(&'a dyn Record),
    DateTime(&'a dyn DateTime),
    Scalar(Scalar<'a>),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $view:ty) => {
        /// Attempts a cast to the corresponding view.
        ///
        /// Returns an error if `self` is not of the expected kind.
        #[inline]
        pub fn $name(self) -> Result<$view, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the "kind" of this reflected type without any information.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Record(_) => ReflectKind::Record,
            Self::DateTime(_) => ReflectKind::DateTime,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }

    /// Returns `true` for [`ReflectRef::Scalar`].
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_enum: Enum => &'a dyn Enum);
    impl_cast_method!(as_list: List => &'a dyn List);
    impl_cast_method!(as_map: Map => &'a dyn Map);
    impl_cast_method!(as_record: Record => &'a dyn Record);
    impl_cast_method!(as_datetime: DateTime => &'a dyn DateTime);
    impl_cast_method!(as_scalar: Scalar => Scalar<'a>);
}
