use proc_macro2::TokenStream;
use quote::quote;

macro_rules! info_path {
    ($($name:ident => $item:ident),* $(,)?) => {
        $(
            #[inline(always)]
            pub(crate) fn $name(vc_reflect_path: &syn::Path) -> TokenStream {
                quote! {
                    #vc_reflect_path::info::$item
                }
            }
        )*
    };
}

info_path!(
    typed_ => Typed,
    type_info_ => TypeInfo,
    reflect_kind_ => ReflectKind,
    struct_info_ => StructInfo,
    named_field_ => NamedField,
    visibility_ => Visibility,
    enum_info_ => EnumInfo,
    variant_info_ => VariantInfo,
    variant_kind_ => VariantKind,
    variant_value_ => VariantValue,
    custom_attributes_ => CustomAttributes,
);
