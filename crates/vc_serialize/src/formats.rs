//! Common datetime formats, as `chrono` `strftime` strings.
//!
//! Use one with [`SerializerConfig::datetime_format`] or [`Serializer::new`].
//!
//! `%Z` renders the zone abbreviation for zone-aware values and the offset
//! for `FixedOffset` values. Naive values cannot render offsets or zones, so
//! formats containing `%z`, `%:z` or `%Z` fail for them.
//!
//! [`SerializerConfig::datetime_format`]: crate::SerializerConfig::datetime_format
//! [`Serializer::new`]: crate::Serializer::new

/// `2005-08-15T15:52:01+00:00`, the default.
pub const ATOM: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// `Monday, 15-Aug-2005 15:52:01 UTC`
pub const COOKIE: &str = "%A, %d-%b-%Y %H:%M:%S %Z";

/// `2005-08-15T15:52:01+0000`
pub const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%z";

/// `Mon, 15 Aug 05 15:52:01 +0000`
pub const RFC822: &str = "%a, %d %b %y %H:%M:%S %z";

/// `Monday, 15-Aug-05 15:52:01 UTC`
pub const RFC850: &str = "%A, %d-%b-%y %H:%M:%S %Z";

/// `Mon, 15 Aug 05 15:52:01 +0000`
pub const RFC1036: &str = RFC822;

/// `Mon, 15 Aug 2005 15:52:01 +0000`
pub const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %z";

/// `Mon, 15 Aug 2005 15:52:01 GMT`
///
/// The value is not converted to GMT; convert it before serializing.
pub const RFC7231: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `Mon, 15 Aug 2005 15:52:01 +0000`
pub const RFC2822: &str = RFC1123;

/// `2005-08-15T15:52:01+00:00`
pub const RFC3339: &str = ATOM;

/// `2005-08-15T15:52:01.000+00:00`
pub const RFC3339_EXTENDED: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// `Mon, 15 Aug 2005 15:52:01 +0000`
pub const RSS: &str = RFC1123;

/// `2005-08-15T15:52:01+00:00`
pub const W3C: &str = ATOM;
