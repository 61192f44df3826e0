//! The serialization engine.
//!
//! [`Serializer::serialize`] converts a reflected value into a [`Primitive`],
//! dispatching on the value's kind in this order:
//!
//! 1. [`Record`]: serialized as its map view.
//! 2. [`DateTime`]: rendered with the configured format.
//! 3. [`List`] and [`Map`]: items in iteration order.
//! 4. [`Enum`]: the backing value, or the variant name of an unbacked enum.
//! 5. [`Struct`]: initialized, included fields in declaration order.
//! 6. [`Scalar`]: the value itself.
//!
//! Every nested non-scalar value is serialized by a fork of the engine, so
//! the alias generator resolved for one type never leaks into its siblings.
//!
//! [`Primitive`]: crate::Primitive
//! [`Record`]: vc_reflect::ops::Record
//! [`DateTime`]: vc_reflect::ops::DateTime
//! [`List`]: vc_reflect::ops::List
//! [`Map`]: vc_reflect::ops::Map
//! [`Enum`]: vc_reflect::ops::Enum
//! [`Struct`]: vc_reflect::ops::Struct
//! [`Scalar`]: vc_reflect::ops::Scalar

// -----------------------------------------------------------------------------
// Modules

mod options;
mod serializer;
mod visibility;

// -----------------------------------------------------------------------------
// Exports

pub use options::SerializeOptions;
pub use serializer::Serializer;
