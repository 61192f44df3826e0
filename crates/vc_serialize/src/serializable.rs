use alloc::boxed::Box;
use std::sync::OnceLock;

use vc_reflect::Reflect;

use crate::{Primitive, SerializeError, SerializeOptions, Serializer};

// -----------------------------------------------------------------------------
// Serializable

/// An engine that converts reflected values into [`Primitive`] trees.
///
/// [`Serializer`] is the provided implementation. Implement this trait to
/// wrap or replace it, then pass it explicitly with
/// [`SerializeExt::to_primitive_using`] or install it as the process-wide
/// default with [`install_default_serializer`].
pub trait Serializable: Send + Sync {
    /// Converts `model` into a [`Primitive`].
    fn serialize(
        &self,
        model: &dyn Reflect,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError>;
}

impl Serializable for Serializer {
    #[inline]
    fn serialize(
        &self,
        model: &dyn Reflect,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        Serializer::serialize(self, model, options)
    }
}

// -----------------------------------------------------------------------------
// Default serializer

static DEFAULT_SERIALIZER: OnceLock<Box<dyn Serializable>> = OnceLock::new();

/// Installs the serializer used by [`SerializeExt::to_primitive`] and
/// [`SerializeExt::to_primitive_with`].
///
/// The default can be installed once, before its first use. Returns `false`
/// if a default is already in place, either installed or created on demand
/// as [`Serializer::default`].
///
/// # Examples
///
/// ```
/// use vc_serialize::{Serializer, default_serializer, install_default_serializer, formats};
///
/// assert!(install_default_serializer(Serializer::new(["public"], formats::RFC2822)));
/// assert!(!install_default_serializer(Serializer::default()));
/// ```
pub fn install_default_serializer(serializer: impl Serializable + 'static) -> bool {
    let mut installed = false;
    DEFAULT_SERIALIZER.get_or_init(|| {
        installed = true;
        Box::new(serializer)
    });
    if installed {
        log::debug!("installed a custom default serializer");
    }
    installed
}

/// Returns the process-wide default serializer.
///
/// Creates a [`Serializer::default`] if none was installed.
pub fn default_serializer() -> &'static dyn Serializable {
    &**DEFAULT_SERIALIZER.get_or_init(|| Box::new(Serializer::default()))
}

// -----------------------------------------------------------------------------
// SerializeExt

/// Serialization methods for every reflected value.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_serialize::{SerializeExt, SerializeOptions, Serializer};
///
/// #[derive(Reflect)]
/// struct Tag {
///     pub id: u32,
///     pub name: String,
/// }
///
/// let tag = Tag { id: 10, name: "rust".into() };
///
/// let output = tag.to_primitive().unwrap();
/// assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"id":10,"name":"rust"}"#);
///
/// let only_private = Serializer::new(["private"], vc_serialize::formats::ATOM);
/// let output = tag.to_primitive_using(&only_private, SerializeOptions::new()).unwrap();
/// assert_eq!(serde_json::to_string(&output).unwrap(), "{}");
/// ```
pub trait SerializeExt {
    /// Serializes `self` with the default serializer and default options.
    fn to_primitive(&self) -> Result<Primitive, SerializeError>;

    /// Serializes `self` with the default serializer.
    fn to_primitive_with(&self, options: SerializeOptions) -> Result<Primitive, SerializeError>;

    /// Serializes `self` with `serializer`.
    fn to_primitive_using(
        &self,
        serializer: &dyn Serializable,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError>;
}

impl<T: Reflect> SerializeExt for T {
    #[inline]
    fn to_primitive(&self) -> Result<Primitive, SerializeError> {
        self.to_primitive_with(SerializeOptions::new())
    }

    #[inline]
    fn to_primitive_with(&self, options: SerializeOptions) -> Result<Primitive, SerializeError> {
        default_serializer().serialize(self, options)
    }

    #[inline]
    fn to_primitive_using(
        &self,
        serializer: &dyn Serializable,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        serializer.serialize(self, options)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;

    use super::{Serializable, SerializeExt};
    use crate::{Ignore, Primitive, SerializeError, SerializeOptions, Serializer};

    /// Counts calls and forwards to a default serializer.
    struct Counting {
        calls: AtomicUsize,
        inner: Serializer,
    }

    impl Serializable for Counting {
        fn serialize(
            &self,
            model: &dyn Reflect,
            options: SerializeOptions,
        ) -> Result<Primitive, SerializeError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.serialize(model, options)
        }
    }

    #[derive(Reflect)]
    struct Model {
        pub id: u32,
        pub name: String,
        #[reflect(@Ignore::new())]
        pub secret: String,
        #[reflect(ignore)]
        serializer: Option<Box<dyn Serializable>>,
    }

    fn model() -> Model {
        Model {
            id: 10,
            name: "Andre".into(),
            secret: "hunter2".into(),
            serializer: None,
        }
    }

    #[test]
    fn convenience_trait() {
        let output = model().to_primitive().unwrap();
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"id":10,"name":"Andre"}"#
        );

        let output = model()
            .to_primitive_with(SerializeOptions::new().use_ignores(false))
            .unwrap();
        assert_eq!(output.get("secret").and_then(Primitive::as_str), Some("hunter2"));
    }

    #[test]
    fn explicit_serializer() {
        let counting = Counting {
            calls: AtomicUsize::new(0),
            inner: Serializer::default(),
        };
        let value = model();
        let output = value
            .to_primitive_using(&counting, SerializeOptions::new())
            .unwrap();
        assert_eq!(output.get("id").and_then(Primitive::as_i64), Some(10));
        assert_eq!(counting.calls.load(Ordering::Relaxed), 1);
    }
}
