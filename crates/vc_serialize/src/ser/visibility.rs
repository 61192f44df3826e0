use alloc::string::{String, ToString};
use core::fmt;

use vc_reflect::info::Visibility;

use crate::SerializeError;

/// The resolved set of allowed visibilities.
///
/// An empty set is unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct VisibilityFilter {
    allowed: [bool; 3],
}

impl VisibilityFilter {
    /// Resolves the configured tokens.
    ///
    /// A set covering every visibility collapses to the unrestricted set.
    pub fn resolve(tokens: &[String]) -> Result<Self, SerializeError> {
        let mut allowed = [false; 3];
        for token in tokens {
            let vis = Visibility::from_token(token)
                .ok_or_else(|| SerializeError::InvalidVisibility(token.to_lowercase()))?;
            allowed[slot(vis)] = true;
        }

        if allowed == [true; 3] {
            allowed = [false; 3];
        }
        Ok(Self { allowed })
    }

    #[inline]
    pub fn is_unrestricted(&self) -> bool {
        self.allowed == [false; 3]
    }

    /// Returns `true` if a field of visibility `vis` passes the filter.
    #[inline]
    pub fn allows(&self, vis: Visibility) -> bool {
        self.is_unrestricted() || self.allowed[slot(vis)]
    }
}

#[inline]
const fn slot(vis: Visibility) -> usize {
    match vis {
        Visibility::Public => 0,
        Visibility::Protected => 1,
        Visibility::Private => 2,
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unrestricted() {
            return f.write_str("unrestricted");
        }
        let mut list = f.debug_list();
        for vis in Visibility::ALL {
            if self.allowed[slot(vis)] {
                list.entry(&vis.to_string());
            }
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use vc_reflect::info::Visibility;

    use super::VisibilityFilter;
    use crate::SerializeError;

    fn resolve(tokens: &[&str]) -> Result<VisibilityFilter, SerializeError> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        VisibilityFilter::resolve(&tokens)
    }

    #[test]
    fn collapse_law() {
        let all = resolve(&["public", "PRIVATE", "Protected"]).unwrap();
        let none = resolve(&[]).unwrap();
        assert_eq!(all, none);
        assert!(all.is_unrestricted());
        for vis in Visibility::ALL {
            assert!(all.allows(vis));
        }
    }

    #[test]
    fn partial_set() {
        let filter = resolve(&["public", "public", "private"]).unwrap();
        assert!(!filter.is_unrestricted());
        assert!(filter.allows(Visibility::Public));
        assert!(filter.allows(Visibility::Private));
        assert!(!filter.allows(Visibility::Protected));
        assert_eq!(filter.to_string(), r#"["public", "private"]"#);
    }

    #[test]
    fn invalid_token() {
        let err = resolve(&["public", "Internal"]).unwrap_err();
        assert!(matches!(err, SerializeError::InvalidVisibility(ref t) if t == "internal"));
    }
}
