use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::info::Visibility;

use crate::formats;

/// A function turning a raw field name into an output name.
pub type AliasFn = fn(&str) -> String;

/// Returns the raw field name unchanged.
pub(crate) fn identity(name: &str) -> String {
    name.to_owned()
}

/// The immutable configuration of a [`Serializer`].
///
/// Built with the consuming builder methods and consumed by
/// [`Serializer::with_config`].
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Visibility;
/// use vc_serialize::{Serializer, SerializerConfig, formats};
///
/// let config = SerializerConfig::new()
///     .allow_visibility([Visibility::Public])
///     .datetime_format(formats::COOKIE);
///
/// assert_eq!(config.allowed(), ["public"]);
/// let serializer = Serializer::with_config(config);
/// ```
///
/// [`Serializer`]: crate::Serializer
/// [`Serializer::with_config`]: crate::Serializer::with_config
#[derive(Clone)]
pub struct SerializerConfig {
    allow: Vec<String>,
    datetime_format: String,
    alias_generator: AliasFn,
}

impl SerializerConfig {
    /// Creates the default configuration.
    ///
    /// - all three visibilities are allowed,
    /// - datetimes are rendered with [`formats::ATOM`],
    /// - field names are kept as declared.
    pub fn new() -> Self {
        Self {
            allow: Visibility::ALL
                .iter()
                .map(|vis| vis.as_str().to_owned())
                .collect(),
            datetime_format: formats::ATOM.to_owned(),
            alias_generator: identity,
        }
    }

    /// Sets the allowed visibility tokens.
    ///
    /// Tokens are matched case-insensitively against `public`, `private` and
    /// `protected`. Unknown tokens are reported by the first serialization,
    /// see [`SerializeError::InvalidVisibility`]. An empty list allows every
    /// visibility.
    ///
    /// [`SerializeError::InvalidVisibility`]: crate::SerializeError::InvalidVisibility
    pub fn allow<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the allowed visibilities.
    pub fn allow_visibility(self, visibilities: impl IntoIterator<Item = Visibility>) -> Self {
        self.allow(visibilities.into_iter().map(Visibility::as_str))
    }

    /// Sets the `strftime` format of date/time values, see [`formats`].
    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Sets the alias generator used for types without `AliasGenerator`
    /// metadata.
    pub fn alias_generator(mut self, generator: AliasFn) -> Self {
        self.alias_generator = generator;
        self
    }

    /// Returns the allowed visibility tokens, as configured.
    #[inline]
    pub fn allowed(&self) -> &[String] {
        &self.allow
    }

    /// Returns the datetime format.
    #[inline]
    pub fn format(&self) -> &str {
        &self.datetime_format
    }

    /// Returns the root alias generator.
    #[inline]
    pub fn default_alias_generator(&self) -> AliasFn {
        self.alias_generator
    }
}

impl Default for SerializerConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerConfig")
            .field("allow", &self.allow)
            .field("datetime_format", &self.datetime_format)
            .finish_non_exhaustive()
    }
}
