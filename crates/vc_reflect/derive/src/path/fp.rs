//! Fully qualified paths of std items used in generated code.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! fully_qualified {
    ($($name:ident => { $($path:tt)* }),* $(,)?) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    quote!($($path)*).to_tokens(tokens);
                }
            }
        )*
    };
}

fully_qualified!(
    OptionFP => { ::core::option::Option },
    SendFP => { ::core::marker::Send },
    SyncFP => { ::core::marker::Sync },
);
