use proc_macro2::Span;
use syn::{Attribute, Token};

use super::CustomAttributes;

mod kw {
    syn::custom_keyword!(ignore);
}

/// Attributes applied to a struct field.
///
/// - `#[reflect(@expr)]`: custom attribute of the field.
/// - `#[reflect(ignore)]`: the field is not reflected.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub custom_attributes: CustomAttributes,
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        super::parse_reflect_attrs(attrs, |input| {
            if input.peek(Token![@]) {
                return res.custom_attributes.parse_inner_stream(input);
            }

            if input.peek(kw::ignore) {
                let keyword = input.parse::<kw::ignore>()?;
                res.ignore = Some(keyword.span);
                return Ok(());
            }

            Err(input.error("expected `@expr` or `ignore` in a field attribute"))
        })?;

        Ok(res)
    }
}
