use syn::{Data, DeriveInput, Fields};

use super::{ReflectEnum, ReflectMeta, ReflectStruct, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(..) | Fields::Unit => {
                    ReflectStruct::new(meta, &data.fields).map(Self::Struct)
                }
                Fields::Unnamed(..) => Err(syn::Error::new_spanned(
                    &data.fields,
                    "`Reflect` cannot be derived for tuple structs, use named fields",
                )),
            },
            Data::Enum(data) => ReflectEnum::new(meta, &data.variants).map(Self::Enum),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}
