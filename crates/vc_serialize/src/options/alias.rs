use alloc::borrow::Cow;

/// Field metadata that overrides the output name of a field.
///
/// An explicit alias takes precedence over the type's [`AliasGenerator`].
/// [`Alias::raw`] keeps the declared name, which also shields the field from
/// the generator.
///
/// [`AliasGenerator`]: crate::AliasGenerator
///
/// # Examples
///
/// ```
/// use vc_serialize::Alias;
///
/// assert_eq!(Alias::new("my_title").alias("title"), "my_title");
/// assert_eq!(Alias::raw().alias("title"), "title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alias {
    name: Option<Cow<'static, str>>,
}

impl Alias {
    /// Renames the field to `name`.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Keeps the declared field name.
    #[inline]
    pub const fn raw() -> Self {
        Self { name: None }
    }

    /// Returns the explicit name, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the output name of a field declared as `raw`.
    #[inline]
    pub fn alias<'a>(&'a self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(self.name.as_deref().unwrap_or(raw))
    }
}
