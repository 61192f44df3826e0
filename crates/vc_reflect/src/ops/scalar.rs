use core::fmt;

/// A borrowed primitive value.
///
/// Integers are widened: signed types become [`Scalar::Int`], unsigned types
/// become [`Scalar::UInt`] and both float widths become [`Scalar::Float`].
/// Absent values (`None`, `()`, an unset `OnceLock`) are [`Scalar::Null`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Returns `true` for [`Scalar::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::UInt(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.pad(v),
        }
    }
}
