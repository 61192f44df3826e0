//! Provide some tools for parsing attributes.
//!
//! This includes all the attributes required to generate code,
//! not just reflect custom attributes.

// -----------------------------------------------------------------------------
// Modules

mod custom_attributes;
mod field_attributes;
mod type_attributes;
mod variant_attributes;

// -----------------------------------------------------------------------------
// Internal API

use custom_attributes::CustomAttributes;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;
pub(crate) use variant_attributes::{VariantAttributes, VariantValueAttr};

/// Parses every `#[reflect(...)]` attribute in `attrs` with `parse_item`,
/// one comma-separated item at a time.
fn parse_reflect_attrs(
    attrs: &[syn::Attribute],
    mut parse_item: impl FnMut(syn::parse::ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if !attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_args_with(|input: syn::parse::ParseStream| {
            while !input.is_empty() {
                parse_item(input)?;
                if input.is_empty() {
                    break;
                }
                input.parse::<syn::Token![,]>()?;
            }
            Ok(())
        })?;
    }
    Ok(())
}
