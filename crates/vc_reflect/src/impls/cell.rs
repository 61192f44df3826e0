//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! ## NonGenericTypeInfoCell
//!
//! Internally, there is an [`OnceLock<T>`], almost no additional expenses.
//!
//! ## GenericTypeInfoCell
//!
//! If the type is generic, the `static CELL` inside the function is shared
//! by every instantiation. Therefore, the inner of this container is a map
//! keyed by [`TypeId`] wrapped in [`RwLock`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::TypeInfo;

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{EnumInfo, TypeInfo, Typed, VariantInfo};
///
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl Typed for Level {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Enum(EnumInfo::new::<Self>(&[
///                 VariantInfo::unit("Low"),
///                 VariantInfo::unit("High"),
///             ]))
///         })
///     }
/// }
///
/// assert!(core::ptr::eq(Level::type_info(), Level::type_info()));
/// assert_eq!(Level::type_info().as_enum().unwrap().variant_len(), 2);
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `TypeInfo` stored in the cell.
    ///
    /// If the cell is empty, the info is generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

const CELL_SEED: u64 = 0x3F1D_27A9_C4E8_0B65;

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use vc_reflect::impls::GenericTypeInfoCell;
/// use vc_reflect::info::{NamedField, StructInfo, TypeInfo, Typed, Visibility};
///
/// struct Wrapper<T> {
///     value: T,
/// }
///
/// impl<T: Send + Sync + 'static> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[
///                 NamedField::new::<T>("value", Visibility::Private),
///             ]))
///         })
///     }
/// }
///
/// let a = <Wrapper<u8>>::type_info().as_struct().unwrap();
/// let b = <Wrapper<String>>::type_info().as_struct().unwrap();
/// assert!(a.field_at(0).unwrap().type_is::<u8>());
/// assert!(b.field_at(0).unwrap().type_is::<String>());
/// ```
pub struct GenericTypeInfoCell(RwLock<HashMap<TypeId, &'static TypeInfo, FixedState>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FixedState::with_seed(
            CELL_SEED,
        ))))
    }

    /// Returns a reference to the `TypeInfo` stored for type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // `f()` runs outside the lock; a racing insert wins and the loser is dropped.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}

impl Default for GenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
