//! Provide static type information for derived types.
//!
//! ## Menu
//!
//! - [`Typed`]: the trait providing a `&'static TypeInfo`.
//! - [`TypeInfo`]: one of [`StructInfo`] or [`EnumInfo`].
//! - [`NamedField`]: name, [`Visibility`] and attributes of a struct field.
//! - [`VariantInfo`]: name, [`VariantKind`] and backing value of an enum variant.
//! - [`CustomAttributes`]: values attached with `#[reflect(@Expr)]`.
//! - [`ReflectKind`]: the kind of a reflected value.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod enum_info;
mod field_info;
mod struct_info;
mod type_info;
mod variant_info;

// -----------------------------------------------------------------------------
// Exports

pub use attributes::{AttributeValue, CustomAttributes};
pub use enum_info::EnumInfo;
pub use field_info::{NamedField, Visibility};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo, Typed};
pub use variant_info::{VariantInfo, VariantKind, VariantValue};

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{impl_custom_attributes_fn, impl_with_custom_attributes};
