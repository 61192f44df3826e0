use syn::{Attribute, Lit, LitInt, Token};

use super::CustomAttributes;

mod kw {
    syn::custom_keyword!(value);
}

/// The backing value written as `#[reflect(value = ...)]`.
#[derive(Debug, Clone)]
pub(crate) enum VariantValueAttr {
    Int(i64),
    Str(String),
}

/// Attributes applied to an enum variant.
///
/// - `#[reflect(@expr)]`: custom attribute of the variant.
/// - `#[reflect(value = "text")]` or `#[reflect(value = -3)]`: backing value.
#[derive(Default, Debug)]
pub(crate) struct VariantAttributes {
    pub custom_attributes: CustomAttributes,
    pub value: Option<VariantValueAttr>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        super::parse_reflect_attrs(attrs, |input| {
            if input.peek(Token![@]) {
                return res.custom_attributes.parse_inner_stream(input);
            }

            if input.peek(kw::value) {
                let keyword = input.parse::<kw::value>()?;
                input.parse::<Token![=]>()?;

                let value = if input.peek(Token![-]) {
                    input.parse::<Token![-]>()?;
                    let lit = input.parse::<LitInt>()?;
                    let digits = lit.base10_digits();
                    // Parse with the sign so `i64::MIN` stays in range.
                    let value = format!("-{digits}")
                        .parse::<i64>()
                        .map_err(|err| syn::Error::new(lit.span(), err))?;
                    VariantValueAttr::Int(value)
                } else {
                    match input.parse::<Lit>()? {
                        Lit::Str(lit) => VariantValueAttr::Str(lit.value()),
                        Lit::Int(lit) => VariantValueAttr::Int(lit.base10_parse()?),
                        other => {
                            return Err(syn::Error::new(
                                other.span(),
                                "expected a string or integer literal",
                            ));
                        }
                    }
                };

                if res.value.replace(value).is_some() {
                    return Err(syn::Error::new(keyword.span, "duplicate `value` attribute"));
                }
                return Ok(());
            }

            Err(input.error("expected `@expr` or `value = literal` in a variant attribute"))
        })?;

        Ok(res)
    }
}
