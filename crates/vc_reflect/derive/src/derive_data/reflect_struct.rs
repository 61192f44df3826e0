use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Field, Ident, Type};

use super::{FieldAttributes, ReflectMeta};

/// A reflected struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

/// A field of a [`ReflectStruct`].
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Index among reflected fields, `None` for ignored fields.
    pub reflection_index: Option<usize>,
}

impl StructField<'_> {
    /// The field name, without the `r#` prefix.
    pub fn name(&self) -> String {
        self.ident().unraw().to_string()
    }

    /// The field identifier, as used in `self.ident`.
    pub fn ident(&self) -> &Ident {
        // Only named fields are collected.
        match &self.data.ident {
            Some(ident) => ident,
            None => unreachable!("named field without ident"),
        }
    }

    /// The `Visibility` variant of this field.
    pub fn visibility_ident(&self) -> Ident {
        let name = match &self.data.vis {
            syn::Visibility::Public(_) => "Public",
            syn::Visibility::Restricted(_) => "Protected",
            syn::Visibility::Inherited => "Private",
        };
        Ident::new(name, Span::call_site())
    }
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a syn::Fields) -> syn::Result<Self> {
        let mut reflected = 0usize;
        let mut collected = Vec::new();

        for data in fields {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            let reflection_index = if attrs.ignore.is_some() {
                None
            } else {
                reflected += 1;
                Some(reflected - 1)
            };
            collected.push(StructField {
                data,
                attrs,
                reflection_index,
            });
        }

        let active_types: Vec<Type> = collected
            .iter()
            .filter(|field| field.reflection_index.is_some())
            .map(|field| field.data.ty.clone())
            .collect();
        meta.set_active_types(active_types);

        Ok(Self {
            meta,
            fields: collected,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Returns the reflected fields, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.reflection_index.is_some())
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(
    ///     _path_::StructInfo::new::<Self>(&[
    ///         _path_::NamedField::new::<FieldType>("name", _path_::Visibility::Public)
    ///             .with_custom_attributes(...),
    ///     ])
    ///     .with_custom_attributes(...)
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);
        let named_field_ = crate::path::named_field_(vc_reflect_path);
        let visibility_ = crate::path::visibility_(vc_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = field.name();
            let visibility = field.visibility_ident();
            let custom_attributes = field
                .attrs
                .custom_attributes
                .get_expression_with(vc_reflect_path);
            quote! {
                #named_field_::new::<#ty>(#name, #visibility_::#visibility)
                    #custom_attributes
            }
        });

        let custom_attributes = self.meta.with_custom_attributes_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields,)*
                ])
                #custom_attributes
            )
        }
    }
}
