/// Field metadata that suppresses a field in serialization and/or
/// validation output.
///
/// Both flags are set by [`Ignore::new`]; clear one to keep the field in
/// that mode. When the serializer honours ignores, this metadata alone
/// decides whether the field is kept, visibility is not consulted.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_serialize::{Ignore, SerializeExt, SerializeOptions};
///
/// #[derive(Reflect)]
/// struct Form {
///     // Only used when validating.
///     #[reflect(@Ignore::new().validation(false))]
///     pub captcha: String,
///     pub email: String,
/// }
///
/// let form = Form { captcha: "x7".into(), email: "a@b.c".into() };
///
/// let output = form.to_primitive().unwrap();
/// assert!(output.get("captcha").is_none());
///
/// let output = form.to_primitive_with(SerializeOptions::new().use_validation(true)).unwrap();
/// assert!(output.get("captcha").is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ignore {
    validation: bool,
    serialization: bool,
}

impl Ignore {
    /// Ignores the field in both modes.
    #[inline]
    pub const fn new() -> Self {
        Self {
            validation: true,
            serialization: true,
        }
    }

    /// Sets whether the field is ignored in validation mode.
    #[inline]
    pub const fn validation(mut self, ignore: bool) -> Self {
        self.validation = ignore;
        self
    }

    /// Sets whether the field is ignored in serialization mode.
    #[inline]
    pub const fn serialization(mut self, ignore: bool) -> Self {
        self.serialization = ignore;
        self
    }

    #[inline]
    pub const fn ignores_validation(&self) -> bool {
        self.validation
    }

    #[inline]
    pub const fn ignores_serialization(&self) -> bool {
        self.serialization
    }
}

impl Default for Ignore {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Ignore;

    #[test]
    fn flags() {
        let ignore = Ignore::new();
        assert!(ignore.ignores_validation() && ignore.ignores_serialization());

        let ignore = Ignore::new().validation(false);
        assert!(!ignore.ignores_validation());
        assert!(ignore.ignores_serialization());

        let ignore = Ignore::default().serialization(false);
        assert!(ignore.ignores_validation());
        assert!(!ignore.ignores_serialization());
    }
}
