use alloc::boxed::Box;

use indexmap::{IndexMap, IndexSet};

use crate::Reflect;
use crate::ops::{List, ListItemIter, Map, MapEntryIter, MapKey};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect, S: Send + Sync + 'static> Reflect for IndexSet<T, S> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect, S: Send + Sync + 'static> List for IndexSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(IndexSet::iter(self).map(|item| item as &dyn Reflect))
    }
}

impl<K: MapKey, V: Reflect, S: Send + Sync + 'static> Reflect for IndexMap<K, V, S> {
    impl_reflect_cast_fn!(Map);
}

impl<K: MapKey, V: Reflect, S: Send + Sync + 'static> Map for IndexMap<K, V, S> {
    #[inline]
    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    #[inline]
    fn iter(&self) -> MapEntryIter<'_> {
        Box::new(IndexMap::iter(self).map(|(key, value)| (key.map_key(), value as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::Reflect;
    use crate::ops::ReflectRef;

    #[test]
    fn insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zeta", 1_u8);
        map.insert("alpha", 2_u8);

        let ReflectRef::Map(view) = map.reflect_ref() else {
            panic!("expected a map");
        };
        let keys: Vec<_> = view.iter().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }
}
