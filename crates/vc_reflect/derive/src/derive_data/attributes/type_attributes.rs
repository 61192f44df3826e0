use syn::{Attribute, Path, Token};

use super::CustomAttributes;

/// Attributes applied at the type level.
///
/// - `#[reflect(@expr)]`: custom attribute of the type.
/// - `#[reflect(crate = path)]`: explicit path of `vc_reflect`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub custom_attributes: CustomAttributes,
    pub crate_path: Option<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        super::parse_reflect_attrs(attrs, |input| {
            if input.peek(Token![@]) {
                return res.custom_attributes.parse_inner_stream(input);
            }

            if input.peek(Token![crate]) {
                let keyword = input.parse::<Token![crate]>()?;
                input.parse::<Token![=]>()?;
                let path = Path::parse_mod_style(input)?;
                if res.crate_path.replace(path).is_some() {
                    return Err(syn::Error::new(keyword.span, "duplicate `crate` attribute"));
                }
                return Ok(());
            }

            Err(input.error("expected `@expr` or `crate = path` in a type attribute"))
        })?;

        Ok(res)
    }
}
