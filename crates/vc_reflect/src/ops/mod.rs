//! Provide the kind-specific views of reflected values.
//!
//! ## Menu
//!
//! ### Interface
//!
//! The following are subtraits of [`Reflect`], each providing read access to
//! one kind of value.
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`), fields in declaration order.
//! - [`Enum`]: For fieldless enums, with an optional backing value.
//! - [`List`]: For list-like (e.g. `Vec<i32>`, `[u8; 4]`, `BTreeSet<String>`).
//! - [`Map`]: For map-like with string-renderable keys (e.g. `BTreeMap<String, f32>`).
//! - [`Record`]: For loose key/value objects without static type information.
//! - [`DateTime`]: For date/time values that can be formatted.
//!
//! Everything else is a [`Scalar`].
//!
//! ### Dynamic Type
//!
//! - [`DynamicRecord`]: an insertion-ordered `(name, Box<dyn Reflect>)` record.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod datetime_ops;
mod enum_ops;
mod kind;
mod list_ops;
mod map_ops;
mod record_ops;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;
pub use scalar::Scalar;

pub use datetime_ops::DateTime;
pub use enum_ops::{Enum, EnumError};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapEntryIter, MapKey};
pub use record_ops::{DynamicRecord, Record};
pub use struct_ops::{Struct, StructFieldIter};
