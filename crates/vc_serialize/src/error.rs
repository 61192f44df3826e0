use alloc::string::String;

use thiserror::Error;
use vc_reflect::ops::EnumError;

/// The category of a [`SerializeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The serializer or the type metadata is misconfigured.
    Configuration,
    /// A value could not be introspected.
    Introspection,
}

/// An error raised while converting a value into a [`Primitive`].
///
/// Every error aborts the whole call; no partial output is returned.
///
/// [`Primitive`]: crate::Primitive
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    /// An allowed visibility token is not `public`, `private` or `protected`.
    ///
    /// Raised on the first traversal, not when the serializer is built.
    #[error("Invalid property visibility '{0}'. Expected 'public', 'private' or 'protected'.")]
    InvalidVisibility(String),

    /// An `AliasGenerator` names a strategy that is not registered.
    #[error("type `{type_name}` uses the unknown alias generator `{name}`")]
    UnknownAliasGenerator {
        type_name: &'static str,
        name: String,
    },

    /// The configured datetime format cannot be rendered for a value.
    #[error("cannot format `{type_name}` with the datetime format `{format}`")]
    DateTimeFormat {
        type_name: &'static str,
        format: String,
    },

    /// The active variant of an enum has no name or backing value.
    #[error("unable to serialize enum `{type_name}`")]
    Enum {
        type_name: &'static str,
        #[source]
        source: EnumError,
    },
}

impl SerializeError {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVisibility(_)
            | Self::UnknownAliasGenerator { .. }
            | Self::DateTimeFormat { .. } => ErrorKind::Configuration,
            Self::Enum { .. } => ErrorKind::Introspection,
        }
    }
}
