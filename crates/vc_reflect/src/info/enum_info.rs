use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

use crate::info::{CustomAttributes, VariantInfo};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

/// A container for compile-time enum info.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// enum Status {
///     Draft = 1,
///     Published = 2,
/// }
///
/// let info = <Status as Typed>::type_info().as_enum().unwrap();
/// assert!(info.is_backed());
/// assert_eq!(info.index_of("Published"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    type_name: &'static str,
    variants: Box<[VariantInfo]>,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl EnumInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a new [`EnumInfo`].
    ///
    /// The order of internal variants is fixed, depends on the input order.
    pub fn new<T: Any>(variants: &[VariantInfo]) -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
            variants: variants.into(),
            custom_attributes: None,
        }
    }

    /// Returns the type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`VariantInfo`] for the given variant name, if present.
    ///
    /// This is O(N) complexity.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|v| v.name() == name)
    }

    /// Returns the [`VariantInfo`] at the given index, if present.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Returns the index for the given variant name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.name() == name)
    }

    /// Returns an iterator over the variants in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VariantInfo> {
        self.variants.iter()
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if any variant carries a backing value.
    pub fn is_backed(&self) -> bool {
        self.variants.iter().any(|v| v.value().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::EnumInfo;
    use crate::info::{VariantInfo, VariantKind, VariantValue};

    enum Sample {}

    #[test]
    fn backed_detection() {
        let plain = EnumInfo::new::<Sample>(&[VariantInfo::unit("A"), VariantInfo::unit("B")]);
        assert!(!plain.is_backed());
        assert_eq!(plain.variant_len(), 2);

        let backed = EnumInfo::new::<Sample>(&[
            VariantInfo::unit("A").with_value(VariantValue::Int(4)),
            VariantInfo::new("B", VariantKind::Tuple),
        ]);
        assert!(backed.is_backed());
        assert_eq!(backed.variant("B").unwrap().kind(), VariantKind::Tuple);
        assert_eq!(backed.variant_at(0).unwrap().value(), Some(VariantValue::Int(4)));
        assert!(backed.variant("C").is_none());
    }
}
