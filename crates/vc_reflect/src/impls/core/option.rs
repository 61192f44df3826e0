use crate::Reflect;
use crate::ops::{ReflectRef, Scalar};

/// `None` is reflected as [`Scalar::Null`], `Some(v)` as `v` itself.
impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Scalar(Scalar::Null),
        }
    }

    #[inline]
    fn is_initialized(&self) -> bool {
        match self {
            Some(value) => value.is_initialized(),
            None => true,
        }
    }
}
