use core::{error, fmt};

use crate::Reflect;
use crate::info::{EnumInfo, VariantInfo, VariantKind, VariantValue};

// -----------------------------------------------------------------------------
// EnumError

/// An error that occurs when the active variant of an [`Enum`] cannot be
/// turned into a name or backing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// The variant index is not described by the enum's [`EnumInfo`].
    UnknownVariant { index: usize },
    /// The variant carries fields.
    NotUnit {
        variant: &'static str,
        kind: VariantKind,
    },
    /// The enum is backed but this variant has no backing value.
    MissingValue { variant: &'static str },
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariant { index } => {
                write!(f, "variant index {index} is not described by the enum info")
            }
            Self::NotUnit { variant, kind } => {
                write!(f, "variant `{variant}` is a {kind} variant, expected a unit variant")
            }
            Self::MissingValue { variant } => {
                write!(f, "variant `{variant}` of a backed enum has no backing value")
            }
        }
    }
}

impl error::Error for EnumError {}

// -----------------------------------------------------------------------------
// Enum trait

/// A trait for type-erased enum operations via reflection.
///
/// An enum is either *backed*, every variant carrying an integer or string
/// value, or *unbacked*, identified by its variant name only.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on an enum,
/// this trait will be automatically implemented:
///
/// - explicit discriminants on a fieldless enum make it integer-backed,
/// - `#[reflect(value = "...")]` on variants makes it string-backed.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::VariantValue, ops::Enum};
///
/// #[derive(Reflect)]
/// enum Status {
///     #[reflect(value = "draft")]
///     Draft,
///     #[reflect(value = "published")]
///     Published,
/// }
///
/// #[derive(Reflect)]
/// enum Suit {
///     Hearts,
///     Spades,
/// }
///
/// assert_eq!(Status::Published.backing(), Ok(Some(VariantValue::Str("published"))));
/// assert_eq!(Suit::Spades.backing(), Ok(None));
/// assert_eq!(Suit::Spades.variant_name(), Ok("Spades"));
/// ```
pub trait Enum: Reflect {
    /// Returns the static [`EnumInfo`] of this enum.
    fn enum_info(&self) -> &'static EnumInfo;

    /// Returns the declaration index of the active variant.
    fn variant_index(&self) -> usize;

    /// Returns the [`VariantInfo`] of the active variant.
    #[inline]
    fn variant_info(&self) -> Result<&'static VariantInfo, EnumError> {
        let index = self.variant_index();
        self.enum_info()
            .variant_at(index)
            .ok_or(EnumError::UnknownVariant { index })
    }

    /// Returns the name of the active variant.
    #[inline]
    fn variant_name(&self) -> Result<&'static str, EnumError> {
        self.variant_info().map(VariantInfo::name)
    }

    /// Returns the backing value of the active variant.
    ///
    /// `Ok(None)` means the enum is unbacked.
    fn backing(&self) -> Result<Option<VariantValue>, EnumError> {
        let variant = self.variant_info()?;
        if variant.kind() != VariantKind::Unit {
            return Err(EnumError::NotUnit {
                variant: variant.name(),
                kind: variant.kind(),
            });
        }
        if !self.enum_info().is_backed() {
            return Ok(None);
        }
        match variant.value() {
            Some(value) => Ok(Some(value)),
            None => Err(EnumError::MissingValue {
                variant: variant.name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Enum, EnumError};
    use crate::Reflect;
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{EnumInfo, TypeInfo, Typed, VariantInfo, VariantKind, VariantValue};
    use crate::ops::ReflectRef;

    // Hand-written to produce shapes the derive macro never emits.
    enum Partial {
        Known,
        Shape(u8),
        Unlisted,
    }

    impl Typed for Partial {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Enum(EnumInfo::new::<Self>(&[
                    VariantInfo::unit("Known").with_value(VariantValue::Int(1)),
                    VariantInfo::new("Shape", VariantKind::Tuple),
                ]))
            })
        }
    }

    impl Enum for Partial {
        fn enum_info(&self) -> &'static EnumInfo {
            match Self::type_info() {
                TypeInfo::Enum(info) => info,
                TypeInfo::Struct(_) => unreachable!(),
            }
        }

        fn variant_index(&self) -> usize {
            match self {
                Self::Known => 0,
                Self::Shape(_) => 1,
                Self::Unlisted => 2,
            }
        }
    }

    impl Reflect for Partial {
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Enum(self)
        }
    }

    #[test]
    fn backing_errors() {
        assert_eq!(Partial::Known.backing(), Ok(Some(VariantValue::Int(1))));
        assert_eq!(
            Partial::Shape(3).backing(),
            Err(EnumError::NotUnit {
                variant: "Shape",
                kind: VariantKind::Tuple
            })
        );
        assert_eq!(
            Partial::Unlisted.backing(),
            Err(EnumError::UnknownVariant { index: 2 })
        );
        assert_eq!(
            EnumError::MissingValue { variant: "B" }.to_string(),
            "variant `B` of a backed enum has no backing value"
        );
    }
}

#[cfg(test)]
mod derive_tests {
    use crate::derive::Reflect;
    use crate::info::{VariantKind, VariantValue};
    use crate::ops::{Enum, EnumError};

    #[derive(Reflect)]
    enum Level {
        Low = 1,
        High = 10,
    }

    #[derive(Reflect)]
    enum Mixed {
        #[reflect(value = -3)]
        Negative,
        #[reflect(value = "text")]
        Text,
        Missing,
    }

    #[derive(Reflect)]
    enum Event {
        Click { x: i32 },
        Idle,
    }

    #[test]
    fn derived_backing() {
        assert_eq!(Level::High.backing(), Ok(Some(VariantValue::Int(10))));
        assert_eq!(Level::Low.variant_name(), Ok("Low"));

        assert_eq!(Mixed::Negative.backing(), Ok(Some(VariantValue::Int(-3))));
        assert_eq!(Mixed::Text.backing(), Ok(Some(VariantValue::Str("text"))));
        assert_eq!(
            Mixed::Missing.backing(),
            Err(EnumError::MissingValue { variant: "Missing" })
        );
    }

    #[test]
    fn derived_variants_with_fields() {
        let click = Event::Click { x: 1 };
        assert_eq!(click.variant_info().unwrap().kind(), VariantKind::Struct);
        assert!(matches!(click.backing(), Err(EnumError::NotUnit { .. })));
        assert_eq!(Event::Idle.backing(), Ok(None));
        if let Event::Click { x } = click {
            assert_eq!(x, 1);
        }
    }
}
