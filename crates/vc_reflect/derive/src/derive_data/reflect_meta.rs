use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;
use crate::path::fp::{SendFP, SyncFP};

/// Common information of the type being derived.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Types of reflected fields, bounded by `Reflect` for generic types.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        let vc_reflect_path = match &attrs.crate_path {
            Some(path) => path.clone(),
            None => crate::path::vc_reflect(),
        };

        Self {
            vc_reflect_path,
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Set the types of reflected fields during initialization.
    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// Returns `true` if the type has type or const parameters.
    ///
    /// Such types share one `static CELL` between instantiations.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, syn::GenericParam::Lifetime(_)))
    }

    /// Generate custom attibutes codes
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_custom_attributes(
    ///     _path_::CustomAttributes::with_capacity(N)
    ///         (.with_attribute( ... ))*
    /// )
    /// ```
    #[inline]
    pub fn with_custom_attributes_expression(&self) -> TokenStream {
        self.attrs
            .custom_attributes
            .get_expression_with(&self.vc_reflect_path)
    }

    /// Split generics for an `impl` block.
    ///
    /// For generic types, the where clause is extended with:
    /// - `T: 'static + Send + Sync` for every type parameter,
    /// - `FieldType: Reflect` for every reflected field type.
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates: Vec<TokenStream> = where_clause
            .map(|clause| {
                clause
                    .predicates
                    .iter()
                    .map(ToTokens::to_token_stream)
                    .collect()
            })
            .unwrap_or_default();

        if self.impl_with_generic() {
            for param in self.generics.type_params() {
                let ident = &param.ident;
                predicates.push(quote!(#ident: 'static + #SendFP + #SyncFP));
            }

            let reflect_ = crate::path::reflect_(&self.vc_reflect_path);
            for ty in &self.active_types {
                predicates.push(quote!(#ty: #reflect_));
            }
        }

        let where_tokens = if predicates.is_empty() {
            crate::utils::empty()
        } else {
            quote!(where #(#predicates,)*)
        };

        (impl_generics, ty_generics, where_tokens)
    }
}
