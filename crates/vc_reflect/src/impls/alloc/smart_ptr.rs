use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::ReflectRef;

// Pointers reflect the pointee; `ty_id` still reports the pointer type
// so it stays consistent with `downcast_ref`.
macro_rules! impl_reflect_pointer {
    ($ptr:ident) => {
        impl<T: Reflect> Reflect for $ptr<T> {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                (**self).reflect_ref()
            }

            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                (**self).reflect_kind()
            }

            #[inline]
            fn reflect_type_name(&self) -> &'static str {
                (**self).reflect_type_name()
            }

            #[inline]
            fn is_initialized(&self) -> bool {
                (**self).is_initialized()
            }
        }
    };
}

impl_reflect_pointer!(Box);
impl_reflect_pointer!(Arc);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;
    use core::any::TypeId;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn delegates_to_pointee() {
        let value = Arc::new(vec![1_u8]);
        assert_eq!(value.reflect_kind(), ReflectKind::List);
        assert_eq!(value.reflect_type_name(), core::any::type_name::<Vec<u8>>());

        let value = Box::new(3_u8);
        assert_eq!(value.reflect_kind(), ReflectKind::Scalar);
        assert_eq!(Reflect::ty_id(&value), TypeId::of::<Box<u8>>());
    }
}
