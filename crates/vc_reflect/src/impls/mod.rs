//! Provide reflection for foreign types and utilities for implementing
//! reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - basic:
//!     - `bool`, `char`, `()`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64` (Scalar)
//!     - `&'static str`, `String`, `Cow<'static, str>` (Scalar)
//!     - `[T; N]`, `Box<[T]>` (List)
//! - core:
//!     - `Option<T>`: `None` is `Scalar::Null`, `Some` is the inner value.
//! - alloc:
//!     - `Vec<T>`, `VecDeque<T>`, `BTreeSet<T>` (List)
//!     - `BTreeMap<K, V>` (Map)
//!     - `Box<T>`, `Arc<T>`: the inner value.
//! - std:
//!     - `HashSet<T, S>` (List), `HashMap<K, V, S>` (Map)
//!     - `OnceLock<T>`: uninitialized while unset.
//! - chrono: ("chrono" feature)
//!     - `DateTime<Tz>`, `NaiveDateTime`, `NaiveDate`, `NaiveTime` (DateTime)
//! - indexmap: ("indexmap" feature)
//!     - `IndexMap<K, V, S>` (Map), `IndexSet<T, S>` (List)
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod alloc;
mod core;
mod native;
mod std;

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "indexmap")]
mod indexmap;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
