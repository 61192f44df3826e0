use alloc::string::String;

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

use crate::AliasFn;

// -----------------------------------------------------------------------------
// NamingStrategy

/// A named alias generator that [`AliasGenerator::new`] can refer to.
///
/// The built-in strategies are `snake`, `camel`, `pascal`, `kebab` and
/// `screaming_snake`. With the `auto_register` feature, more strategies can
/// be registered from any crate:
///
/// ```
/// # #[cfg(feature = "auto_register")]
/// # {
/// use vc_serialize::{AliasGenerator, NamingStrategy};
///
/// fn dotted(name: &str) -> String {
///     name.replace('_', ".")
/// }
///
/// vc_serialize::inventory::submit! {
///     NamingStrategy::new("dotted", dotted)
/// }
///
/// let generator = AliasGenerator::new("dotted").generator().unwrap();
/// assert_eq!(generator("created_at"), "created.at");
/// # }
/// ```
///
/// Built-in names cannot be overridden.
///
/// [`AliasGenerator::new`]: crate::AliasGenerator::new
#[derive(Debug, Clone, Copy)]
pub struct NamingStrategy {
    name: &'static str,
    apply: AliasFn,
}

impl NamingStrategy {
    /// Creates a strategy called `name`.
    #[inline]
    pub const fn new(name: &'static str, apply: AliasFn) -> Self {
        Self { name, apply }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the naming function.
    #[inline]
    pub const fn apply(&self) -> AliasFn {
        self.apply
    }

    /// Finds the strategy called `name`.
    pub(crate) fn lookup(name: &str) -> Option<AliasFn> {
        if let Some(strategy) = BUILTIN.iter().find(|s| s.name == name) {
            return Some(strategy.apply);
        }

        #[cfg(feature = "auto_register")]
        if let Some(strategy) = inventory::iter::<NamingStrategy>
            .into_iter()
            .find(|s| s.name == name)
        {
            return Some(strategy.apply);
        }

        None
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(NamingStrategy);

// -----------------------------------------------------------------------------
// Built-in strategies

fn snake(name: &str) -> String {
    name.to_snake_case()
}

fn camel(name: &str) -> String {
    name.to_lower_camel_case()
}

fn pascal(name: &str) -> String {
    name.to_upper_camel_case()
}

fn kebab(name: &str) -> String {
    name.to_kebab_case()
}

fn screaming_snake(name: &str) -> String {
    name.to_shouty_snake_case()
}

static BUILTIN: [NamingStrategy; 5] = [
    NamingStrategy::new("snake", snake),
    NamingStrategy::new("camel", camel),
    NamingStrategy::new("pascal", pascal),
    NamingStrategy::new("kebab", kebab),
    NamingStrategy::new("screaming_snake", screaming_snake),
];

#[cfg(test)]
mod tests {
    use super::NamingStrategy;

    #[test]
    fn builtin_lookup() {
        let cases = [
            ("snake", "fullName", "full_name"),
            ("camel", "full_name", "fullName"),
            ("pascal", "full_name", "FullName"),
            ("kebab", "fullName", "full-name"),
            ("screaming_snake", "fullName", "FULL_NAME"),
        ];
        for (strategy, input, expected) in cases {
            let apply = NamingStrategy::lookup(strategy).unwrap();
            assert_eq!(apply(input), expected, "strategy `{strategy}`");
        }

        assert!(NamingStrategy::lookup("Snake").is_none());
        assert!(NamingStrategy::lookup("unknown").is_none());
    }

    #[cfg(feature = "auto_register")]
    fn reversed(name: &str) -> String {
        name.chars().rev().collect()
    }

    #[cfg(feature = "auto_register")]
    inventory::submit! {
        NamingStrategy::new("test_reversed", reversed)
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn registered_lookup() {
        let apply = NamingStrategy::lookup("test_reversed").unwrap();
        assert_eq!(apply("abc"), "cba");
    }
}
