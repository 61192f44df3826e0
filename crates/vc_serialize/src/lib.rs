#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod primitive;
mod serializable;

pub mod formats;
pub mod options;
pub mod ser;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use config::{AliasFn, SerializerConfig};
pub use error::{ErrorKind, SerializeError};
pub use options::{Alias, AliasGenerator, Ignore, NamingStrategy, UnknownAliasGenerator};
pub use primitive::Primitive;
pub use ser::{SerializeOptions, Serializer};
pub use serializable::{Serializable, SerializeExt, default_serializer, install_default_serializer};

#[cfg(feature = "auto_register")]
pub use inventory;
