use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::{Fields, Ident, Variant};

use super::{ReflectMeta, VariantAttributes, VariantValueAttr};

/// How the variants of an enum are backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackingKind {
    /// Variants are identified by name.
    None,
    /// A fieldless enum with explicit discriminants: `Self::V as i64`.
    Discriminant,
    /// At least one `#[reflect(value = ...)]`.
    Explicit,
}

/// A reflected enum.
pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<EnumVariant<'a>>,
    backing: BackingKind,
}

/// A variant of a [`ReflectEnum`].
pub(crate) struct EnumVariant<'a> {
    pub data: &'a Variant,
    pub attrs: VariantAttributes,
}

impl EnumVariant<'_> {
    /// The `VariantKind` variant of this variant.
    pub fn kind_ident(&self) -> Ident {
        let name = match self.data.fields {
            Fields::Unit => "Unit",
            Fields::Unnamed(..) => "Tuple",
            Fields::Named(..) => "Struct",
        };
        Ident::new(name, Span::call_site())
    }
}

impl<'a> ReflectEnum<'a> {
    pub fn new(
        meta: ReflectMeta<'a>,
        variants: impl IntoIterator<Item = &'a Variant>,
    ) -> syn::Result<Self> {
        let variants = variants
            .into_iter()
            .map(|data| {
                Ok(EnumVariant {
                    data,
                    attrs: VariantAttributes::parse_attrs(&data.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let backing = if variants.iter().any(|v| v.attrs.value.is_some()) {
            BackingKind::Explicit
        } else if variants.iter().all(|v| matches!(v.data.fields, Fields::Unit))
            && variants.iter().any(|v| v.data.discriminant.is_some())
        {
            BackingKind::Discriminant
        } else {
            BackingKind::None
        };

        Ok(Self {
            meta,
            variants,
            backing,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[EnumVariant<'a>] {
        &self.variants
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// ```ignore
    /// _path_::TypeInfo::Enum(
    ///     _path_::EnumInfo::new::<Self>(&[
    ///         _path_::VariantInfo::new("Name", _path_::VariantKind::Unit)
    ///             .with_value(_path_::VariantValue::Str("name"))
    ///             .with_custom_attributes(...),
    ///     ])
    ///     .with_custom_attributes(...)
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let enum_info_ = crate::path::enum_info_(vc_reflect_path);
        let variant_info_ = crate::path::variant_info_(vc_reflect_path);
        let variant_kind_ = crate::path::variant_kind_(vc_reflect_path);
        let variant_value_ = crate::path::variant_value_(vc_reflect_path);

        let variants = self.variants.iter().map(|variant| {
            let ident = &variant.data.ident;
            let name = ident.to_string();
            let kind = variant.kind_ident();

            let with_value = match (self.backing, &variant.attrs.value) {
                (BackingKind::Explicit, Some(VariantValueAttr::Str(value))) => {
                    quote!(.with_value(#variant_value_::Str(#value)))
                }
                (BackingKind::Explicit, Some(VariantValueAttr::Int(value))) => {
                    let value = Literal::i64_suffixed(*value);
                    quote!(.with_value(#variant_value_::Int(#value)))
                }
                (BackingKind::Discriminant, _) => {
                    quote!(.with_value(#variant_value_::Int(Self::#ident as i64)))
                }
                _ => crate::utils::empty(),
            };

            let custom_attributes = variant
                .attrs
                .custom_attributes
                .get_expression_with(vc_reflect_path);

            quote! {
                #variant_info_::new(#name, #variant_kind_::#kind)
                    #with_value
                    #custom_attributes
            }
        });

        let custom_attributes = self.meta.with_custom_attributes_expression();

        quote! {
            #type_info_::Enum(
                #enum_info_::new::<Self>(&[
                    #(#variants,)*
                ])
                #custom_attributes
            )
        }
    }
}
