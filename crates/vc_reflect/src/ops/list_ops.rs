use alloc::boxed::Box;

use crate::Reflect;

/// A boxed iterator over the items of a [`List`].
pub type ListItemIter<'a> = Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>;

/// A trait for type-erased list-like operations via reflection.
///
/// This trait represents any sequential collection that is serialized as a
/// sequence, including:
/// - vectors and deques (`Vec<T>`, `VecDeque<T>`)
/// - arrays and boxed slices (`[T; N]`, `Box<[T]>`)
/// - sets (`BTreeSet<T>`, `HashSet<T>`, `IndexSet<T>`)
///
/// Items are yielded in the iteration order of the underlying collection.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let vec = vec![10_u32, 20_u32, 30_u32];
/// let list_ref: &dyn List = &vec;
///
/// assert_eq!(list_ref.len(), 3);
/// let items: Vec<_> = list_ref
///     .iter()
///     .filter_map(|v| v.downcast_ref::<u32>())
///     .collect();
/// assert_eq!(items, [&10, &20, &30]);
/// ```
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns an iterator over the items.
    fn iter(&self) -> ListItemIter<'_>;

    /// Returns `true` if the collection contains no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
