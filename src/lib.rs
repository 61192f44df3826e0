#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_reflect as reflect;
pub use vc_serialize as serialize;

/// The most common imports.
///
/// ```
/// use vc_attrs::prelude::*;
///
/// #[derive(Reflect)]
/// #[reflect(@AliasGenerator::snake())]
/// struct Session {
///     pub userId: u64,
///     #[reflect(@Ignore::new())]
///     pub token: String,
/// }
///
/// let session = Session { userId: 7, token: "t".into() };
/// let output = session.to_primitive().unwrap();
/// assert_eq!(output.get("user_id"), Some(&Primitive::UInt(7)));
/// ```
pub mod prelude {
    pub use vc_reflect::derive::Reflect;

    pub use vc_serialize::{
        Alias, AliasGenerator, Ignore, Primitive, Serializable, SerializeError, SerializeExt,
        SerializeOptions, Serializer, SerializerConfig, formats,
    };
}
