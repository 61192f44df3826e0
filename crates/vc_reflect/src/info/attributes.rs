use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

// -----------------------------------------------------------------------------
// AttributeValue

/// A value that can be stored in [`CustomAttributes`].
///
/// Implemented for every `Debug + Send + Sync + 'static` type.
pub trait AttributeValue: Any + Send + Sync + fmt::Debug {}

impl<T: Any + Send + Sync + fmt::Debug> AttributeValue for T {}

// -----------------------------------------------------------------------------
// CustomAttributes

const ATTRIBUTES_SEED: u64 = 0x7C3A_51E0_9D24_B86F;

/// A collection of custom attributes for a type, field, or variant.
///
/// These attributes can be created with the [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// Attributes are stored by their [`TypeId`].
/// Because of this, there can only be one attribute per type.
///
/// # Example
///
/// ```
/// # use vc_reflect::{derive::Reflect, info::Typed};
/// #[derive(Debug)]
/// struct Label(&'static str);
///
/// #[derive(Reflect)]
/// #[reflect(@Label("slider"))]
/// struct Slider {
///     #[reflect(@10.0f32)]
///     value: f32,
///     name: String,
/// }
///
/// let info = <Slider as Typed>::type_info().as_struct().unwrap();
/// assert_eq!(info.get_attribute::<Label>().unwrap().0, "slider");
///
/// let field = info.field("value").unwrap();
/// assert!(!field.has_attribute::<i32>());
/// assert_eq!(*field.get_attribute::<f32>().unwrap(), 10.0f32);
///
/// let field = info.field("name").unwrap();
/// assert!(field.custom_attributes().is_empty());
/// ```
pub struct CustomAttributes {
    attributes: HashMap<TypeId, Box<dyn AttributeValue>, FixedState>,
}

impl CustomAttributes {
    /// A static reference to an empty [`CustomAttributes`].
    ///
    /// Type information stores custom attributes as `Option<Arc<..>>` to avoid
    /// heap allocations when there are no attributes.
    pub(crate) const EMPTY: &'static Self = &Self::new();

    /// Creates an empty [`CustomAttributes`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            attributes: HashMap::with_hasher(FixedState::with_seed(ATTRIBUTES_SEED)),
        }
    }

    /// Creates an empty [`CustomAttributes`] with specific capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: HashMap::with_capacity_and_hasher(
                capacity,
                FixedState::with_seed(ATTRIBUTES_SEED),
            ),
        }
    }

    /// Adds an attribute.
    ///
    /// Attributes are keyed by their concrete type; later insertions for the
    /// same type overwrite earlier values.
    #[inline]
    pub fn with_attribute<T: AttributeValue>(mut self, value: T) -> Self {
        self.attributes.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    /// Returns `true` if an attribute of type `T` is present.
    #[inline]
    pub fn contains<T: AttributeValue>(&self) -> bool {
        self.contains_by_id(TypeId::of::<T>())
    }

    /// Returns `true` if it contains the attribute with the given `TypeId`.
    #[inline]
    pub fn contains_by_id(&self, id: TypeId) -> bool {
        self.attributes.contains_key(&id)
    }

    /// Returns the attribute of type `T`, if present.
    #[inline]
    pub fn get<T: AttributeValue>(&self) -> Option<&T> {
        let value: &dyn Any = &**self.attributes.get(&TypeId::of::<T>())?;
        value.downcast_ref::<T>()
    }

    /// Returns an iterator over the stored attributes, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &dyn AttributeValue)> {
        self.attributes.iter().map(|(key, val)| (key, &**val))
    }

    /// Returns the number of stored attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no attributes are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Default for CustomAttributes {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CustomAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.attributes.values()).finish()
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `custom_attributes` and some methods like `get_attribute`.
macro_rules! impl_custom_attributes_fn {
    ($field:ident) => {
        /// Returns the custom attributes of this item.
        #[inline]
        pub fn custom_attributes(&self) -> &$crate::info::CustomAttributes {
            match &self.$field {
                Some(ptr) => &**ptr,
                None => $crate::info::CustomAttributes::EMPTY,
            }
        }

        /// Returns the attribute of type `T`, if present.
        #[inline]
        pub fn get_attribute<T: $crate::info::AttributeValue>(&self) -> Option<&T> {
            self.custom_attributes().get::<T>()
        }

        /// Returns `true` if it contains the given attribute type.
        #[inline]
        pub fn has_attribute<T: $crate::info::AttributeValue>(&self) -> bool {
            self.custom_attributes().contains::<T>()
        }
    };
}

/// Implement `with_custom_attributes`.
macro_rules! impl_with_custom_attributes {
    ($field:ident) => {
        /// Replaces stored attributes (overwrite, do not merge).
        ///
        /// Used by the proc-macro crate.
        pub fn with_custom_attributes(self, attributes: $crate::info::CustomAttributes) -> Self {
            if attributes.is_empty() {
                Self {
                    $field: None,
                    ..self
                }
            } else {
                Self {
                    $field: Some(::alloc::sync::Arc::new(attributes)),
                    ..self
                }
            }
        }
    };
}

pub(crate) use impl_custom_attributes_fn;
pub(crate) use impl_with_custom_attributes;
