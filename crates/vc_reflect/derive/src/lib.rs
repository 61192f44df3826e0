//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits:
///
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
/// - `Enum` (for `enum T { ... }`)
///
/// Tuple structs and unions are rejected.
///
/// ## Field Visibility
///
/// Each field records the visibility class of its declaration:
///
/// - `pub` -> `Visibility::Public`
/// - `pub(crate)`, `pub(super)`, `pub(in path)` -> `Visibility::Protected`
/// - no modifier -> `Visibility::Private`
///
/// ## Custom Attributes
///
/// Any expression prefixed with `@` is stored in the `CustomAttributes` of
/// the type, field or variant it is attached to. Values are keyed by their
/// type, so there can be at most one value of each type.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(@AliasGenerator::new("snake"))]
/// struct User {
///     #[reflect(@Alias::new("full_name"))]
///     pub name: String,
///     #[reflect(@Ignore::new().validation(false))]
///     pub post_id: u64,
/// }
/// ```
///
/// The expression is evaluated once, when the type info is first requested.
///
/// ## Ignored Fields
///
/// `#[reflect(ignore)]` removes a field from reflection entirely. The field
/// type does not need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Handle {
///     pub id: u32,
///     #[reflect(ignore)]
///     cache: std::sync::Mutex<Vec<u8>>,
/// }
/// ```
///
/// ## Backed Enums
///
/// A fieldless enum with explicit discriminants is integer-backed.
/// `#[reflect(value = ...)]` on variants gives explicit backing values
/// instead (string or integer literals), taking precedence over discriminants.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// enum Priority {
///     Low = 1,
///     High = 10,
/// }
///
/// #[derive(Reflect)]
/// enum Status {
///     #[reflect(value = "draft")]
///     Draft,
///     #[reflect(value = "published")]
///     Published,
/// }
/// ```
///
/// Variants with fields are allowed; they are described by their kind but
/// their fields are not reflected.
///
/// ## Crate Path
///
/// The path of `vc_reflect` is resolved from the caller's Cargo.toml: either
/// `::vc_reflect` or `::vc_attrs::reflect`. It can be set explicitly:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(crate = my_reexport::reflect)]
/// struct Foo { /* ... */ }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
