use std::sync::OnceLock;

use crate::Reflect;
use crate::ops::{ReflectRef, Scalar};

/// An unset `OnceLock` is a declared but never assigned value.
impl<T: Reflect> Reflect for OnceLock<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self.get() {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Scalar(Scalar::Null),
        }
    }

    #[inline]
    fn is_initialized(&self) -> bool {
        self.get().is_some_and(Reflect::is_initialized)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use crate::Reflect;
    use crate::ops::{ReflectRef, Scalar};

    #[test]
    fn initialization_state() {
        let cell: OnceLock<String> = OnceLock::new();
        assert!(!cell.is_initialized());
        assert!(matches!(cell.reflect_ref(), ReflectRef::Scalar(Scalar::Null)));

        let _ = cell.set("ready".to_owned());
        assert!(cell.is_initialized());
        assert!(matches!(cell.reflect_ref(), ReflectRef::Scalar(Scalar::Str("ready"))));
    }
}
