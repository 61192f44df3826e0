use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};

use crate::Reflect;
use crate::ops::{List, ListItemIter, Map, MapEntryIter, MapKey};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect> Reflect for BTreeSet<T> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect> List for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(BTreeSet::iter(self).map(|item| item as &dyn Reflect))
    }
}

impl<K: MapKey, V: Reflect> Reflect for BTreeMap<K, V> {
    impl_reflect_cast_fn!(Map);
}

impl<K: MapKey, V: Reflect> Map for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn iter(&self) -> MapEntryIter<'_> {
        Box::new(BTreeMap::iter(self).map(|(key, value)| (key.map_key(), value as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ReflectRef;

    #[test]
    fn sorted_keys() {
        let map: BTreeMap<i32, bool> = [(10, true), (-1, false)].into_iter().collect();
        let ReflectRef::Map(view) = map.reflect_ref() else {
            panic!("expected a map");
        };
        let keys: Vec<_> = view.iter().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, ["-1", "10"]);
        assert!(view.get("10").is_some());

        let set: BTreeSet<&'static str> = ["b", "a"].into_iter().collect();
        assert_eq!(set.reflect_kind(), ReflectKind::List);
    }
}
