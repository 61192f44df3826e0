/// Per-call switches of a serialization.
///
/// The switches are passed down unchanged to every nested value.
///
/// | switch | default | effect |
/// |--------|---------|--------|
/// | `use_ignores` | `true` | honour [`Ignore`] metadata |
/// | `use_validation` | `false` | read the validation flag of [`Ignore`] instead of the serialization flag |
/// | `use_visibility_methods` | `true` | filter fields by the allowed visibilities |
/// | `by_alias` | `true` | name fields through [`Alias`] and [`AliasGenerator`] |
///
/// # Examples
///
/// ```
/// use vc_serialize::SerializeOptions;
///
/// let options = SerializeOptions::new().by_alias(false);
/// assert!(options.use_ignores);
/// assert!(!options.by_alias);
/// ```
///
/// [`Ignore`]: crate::Ignore
/// [`Alias`]: crate::Alias
/// [`AliasGenerator`]: crate::AliasGenerator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerializeOptions {
    pub use_ignores: bool,
    pub use_validation: bool,
    pub use_visibility_methods: bool,
    pub by_alias: bool,
}

impl SerializeOptions {
    /// Creates the default options.
    #[inline]
    pub const fn new() -> Self {
        Self {
            use_ignores: true,
            use_validation: false,
            use_visibility_methods: true,
            by_alias: true,
        }
    }

    #[inline]
    pub const fn use_ignores(mut self, value: bool) -> Self {
        self.use_ignores = value;
        self
    }

    #[inline]
    pub const fn use_validation(mut self, value: bool) -> Self {
        self.use_validation = value;
        self
    }

    #[inline]
    pub const fn use_visibility_methods(mut self, value: bool) -> Self {
        self.use_visibility_methods = value;
        self
    }

    #[inline]
    pub const fn by_alias(mut self, value: bool) -> Self {
        self.by_alias = value;
        self
    }
}

impl Default for SerializeOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
