use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_typed};
use crate::derive_data::ReflectEnum;

/// Implement full reflect for enum type.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Enum
    let enum_trait_tokens = impl_trait_enum(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Enum));

    quote! {
        #typed_trait_tokens

        #enum_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Enum` trait implementation tokens.
fn impl_trait_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();

    let enum_ = crate::path::enum_(vc_reflect_path);
    let typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let enum_info_ = crate::path::enum_info_(vc_reflect_path);

    let variant_index = info.variants().iter().enumerate().map(|(index, variant)| {
        let ident = &variant.data.ident;
        quote! {
            Self::#ident { .. } => #index
        }
    });

    // An enum without variants has no value to match on.
    let variant_index_body = if info.variants().is_empty() {
        quote!(match *self {})
    } else {
        quote! {
            match self {
                #(#variant_index,)*
            }
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #enum_ for #real_ident #ty_generics #where_clause {
            fn enum_info(&self) -> &'static #enum_info_ {
                match <Self as #typed_>::type_info() {
                    #type_info_::Enum(info) => info,
                    _ => unreachable!(),
                }
            }

            fn variant_index(&self) -> usize {
                #variant_index_body
            }
        }
    }
}
