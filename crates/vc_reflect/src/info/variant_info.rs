use alloc::sync::Arc;
use core::fmt;

use crate::info::CustomAttributes;
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// VariantKind

/// Represents the kind/form of an enum variant.
///
/// # Kinds
///
/// - `A` -> Unit
/// - `A()` and `A(..)` -> Tuple
/// - `A{}` and `A{..}` -> Struct
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Struct,
    Tuple,
    Unit,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Tuple => f.pad("Tuple"),
            Self::Unit => f.pad("Unit"),
        }
    }
}

// -----------------------------------------------------------------------------
// VariantValue

/// The backing value of a variant in a backed enum.
///
/// - An explicit discriminant (`A = 3`) on a fieldless enum gives [`VariantValue::Int`].
/// - `#[reflect(value = "a")]` gives [`VariantValue::Str`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VariantValue {
    Int(i64),
    Str(&'static str),
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.pad(v),
        }
    }
}

// -----------------------------------------------------------------------------
// VariantInfo

/// Information of an enum variant.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{VariantInfo, VariantKind, VariantValue};
///
/// let info = VariantInfo::unit("Draft").with_value(VariantValue::Str("draft"));
///
/// assert_eq!(info.name(), "Draft");
/// assert_eq!(info.kind(), VariantKind::Unit);
/// assert_eq!(info.value(), Some(VariantValue::Str("draft")));
/// ```
#[derive(Clone, Debug)]
pub struct VariantInfo {
    name: &'static str,
    kind: VariantKind,
    value: Option<VariantValue>,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl VariantInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a new [`VariantInfo`].
    #[inline]
    pub const fn new(name: &'static str, kind: VariantKind) -> Self {
        Self {
            name,
            kind,
            value: None,
            custom_attributes: None,
        }
    }

    /// Creates a new unit variant.
    #[inline]
    pub const fn unit(name: &'static str) -> Self {
        Self::new(name, VariantKind::Unit)
    }

    /// Sets the backing value.
    #[inline]
    pub const fn with_value(mut self, value: VariantValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns the variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the variant kind.
    #[inline]
    pub const fn kind(&self) -> VariantKind {
        self.kind
    }

    /// Returns the backing value, if any.
    #[inline]
    pub const fn value(&self) -> Option<VariantValue> {
        self.value
    }
}
