use alloc::boxed::Box;
use std::collections::{HashMap, HashSet};

use crate::Reflect;
use crate::ops::{List, ListItemIter, Map, MapEntryIter, MapKey};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect, S: Send + Sync + 'static> Reflect for HashSet<T, S> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect, S: Send + Sync + 'static> List for HashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        Box::new(HashSet::iter(self).map(|item| item as &dyn Reflect))
    }
}

impl<K: MapKey, V: Reflect, S: Send + Sync + 'static> Reflect for HashMap<K, V, S> {
    impl_reflect_cast_fn!(Map);
}

impl<K: MapKey, V: Reflect, S: Send + Sync + 'static> Map for HashMap<K, V, S> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn iter(&self) -> MapEntryIter<'_> {
        Box::new(HashMap::iter(self).map(|(key, value)| (key.map_key(), value as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use crate::Reflect;
    use crate::ops::ReflectRef;

    #[test]
    fn hashed_containers() {
        let map: HashMap<String, u8> = [("a".to_owned(), 1)].into_iter().collect();
        let ReflectRef::Map(view) = map.reflect_ref() else {
            panic!("expected a map");
        };
        assert_eq!(view.len(), 1);
        assert_eq!(view.get("a").unwrap().downcast_ref::<u8>(), Some(&1));

        let set: HashSet<char> = ['x'].into_iter().collect();
        let ReflectRef::List(view) = set.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(view.len(), 1);
    }
}
