use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect> Reflect for Vec<T> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(<[T]>::iter(self).map(|item| item as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(VecDeque::iter(self).map(|item| item as &dyn Reflect))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;

    use crate::Reflect;
    use crate::ops::{ReflectRef, Scalar};

    #[test]
    fn deque_order() {
        let mut deque = VecDeque::new();
        deque.push_back(2_u8);
        deque.push_front(1_u8);

        let ReflectRef::List(list) = deque.reflect_ref() else {
            panic!("expected a list");
        };
        let items: Vec<_> = list.iter().map(|v| v.reflect_ref().as_scalar().ok()).collect();
        assert_eq!(items, [Some(Scalar::UInt(1)), Some(Scalar::UInt(2))]);
        assert!(!list.is_empty());
    }
}
