use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(self.as_slice().iter().map(|item| item as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for Box<[T]> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect> List for Box<[T]> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(<[T]>::iter(self).map(|item| item as &dyn Reflect))
    }
}
