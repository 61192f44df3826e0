use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::AliasFn;
use crate::options::NamingStrategy;

/// A strategy name that no [`NamingStrategy`] is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no naming strategy is registered as `{name}`")]
pub struct UnknownAliasGenerator {
    pub name: String,
}

#[derive(Clone)]
enum Strategy {
    Named(Cow<'static, str>),
    Custom(AliasFn),
}

/// Type metadata that renames every field lacking an explicit [`Alias`].
///
/// The generator of a type also applies to nested values whose types carry
/// no `AliasGenerator` of their own.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_serialize::{AliasGenerator, SerializeExt};
///
/// #[derive(Reflect)]
/// #[reflect(@AliasGenerator::pascal())]
/// struct Invoice {
///     pub total_amount: u32,
/// }
///
/// let output = Invoice { total_amount: 12 }.to_primitive().unwrap();
/// assert_eq!(output.get("TotalAmount").and_then(|v| v.as_i64()), Some(12));
/// ```
///
/// [`Alias`]: crate::Alias
#[derive(Clone)]
pub struct AliasGenerator {
    strategy: Strategy,
}

impl AliasGenerator {
    /// Refers to the [`NamingStrategy`] called `name`.
    ///
    /// The name is resolved when the type is serialized.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            strategy: Strategy::Named(name.into()),
        }
    }

    /// Uses `generator` directly.
    #[inline]
    pub const fn custom(generator: AliasFn) -> Self {
        Self {
            strategy: Strategy::Custom(generator),
        }
    }

    /// `fullName` -> `full_name`
    #[inline]
    pub const fn snake() -> Self {
        Self::named("snake")
    }

    /// `full_name` -> `fullName`
    #[inline]
    pub const fn camel() -> Self {
        Self::named("camel")
    }

    /// `full_name` -> `FullName`
    #[inline]
    pub const fn pascal() -> Self {
        Self::named("pascal")
    }

    /// `fullName` -> `full-name`
    #[inline]
    pub const fn kebab() -> Self {
        Self::named("kebab")
    }

    /// `fullName` -> `FULL_NAME`
    #[inline]
    pub const fn screaming_snake() -> Self {
        Self::named("screaming_snake")
    }

    #[inline]
    const fn named(name: &'static str) -> Self {
        Self {
            strategy: Strategy::Named(Cow::Borrowed(name)),
        }
    }

    /// Returns the strategy name, `None` for custom generators.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match &self.strategy {
            Strategy::Named(name) => Some(&**name),
            Strategy::Custom(_) => None,
        }
    }

    /// Resolves the naming function.
    pub fn generator(&self) -> Result<AliasFn, UnknownAliasGenerator> {
        match &self.strategy {
            Strategy::Custom(generator) => Ok(*generator),
            Strategy::Named(name) => {
                NamingStrategy::lookup(name).ok_or_else(|| UnknownAliasGenerator {
                    name: String::from(&**name),
                })
            }
        }
    }
}

impl fmt::Debug for AliasGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            Strategy::Named(name) => f.debug_tuple("AliasGenerator").field(name).finish(),
            Strategy::Custom(_) => f.write_str("AliasGenerator(<custom>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AliasGenerator, UnknownAliasGenerator};

    #[test]
    fn resolve() {
        let snake = AliasGenerator::snake().generator().unwrap();
        assert_eq!(snake("myPostId"), "my_post_id");
        assert_eq!(AliasGenerator::snake().name(), Some("snake"));

        let custom = AliasGenerator::custom(|name| format!("x_{name}"));
        assert_eq!(custom.name(), None);
        assert_eq!((custom.generator().unwrap())("id"), "x_id");
        assert_eq!(format!("{custom:?}"), "AliasGenerator(<custom>)");
    }

    #[test]
    fn unknown_strategy() {
        let err = AliasGenerator::new("klingon").generator().unwrap_err();
        assert_eq!(
            err,
            UnknownAliasGenerator {
                name: "klingon".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "no naming strategy is registered as `klingon`"
        );
    }
}
