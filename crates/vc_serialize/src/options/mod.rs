//! Metadata that steers serialization.
//!
//! Attach these values to types and fields with `#[reflect(@...)]`; the
//! [`Serializer`] looks them up in the custom attributes of the reflected
//! type info.
//!
//! - [`Ignore`]: on a field, drops it from serialization and/or validation.
//! - [`Alias`]: on a field, overrides its output name.
//! - [`AliasGenerator`]: on a type, renames fields through a [`NamingStrategy`].
//!
//! [`Serializer`]: crate::Serializer

// -----------------------------------------------------------------------------
// Modules

mod alias;
mod alias_generator;
mod ignore;
mod naming;

// -----------------------------------------------------------------------------
// Exports

pub use alias::Alias;
pub use alias_generator::{AliasGenerator, UnknownAliasGenerator};
pub use ignore::Ignore;
pub use naming::NamingStrategy;
