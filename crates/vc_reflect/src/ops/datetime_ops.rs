use alloc::string::String;
use core::fmt;

use crate::Reflect;

/// A trait for date/time values that render through a format string.
///
/// Implemented for the `chrono` types with the `chrono` feature.
/// The format string uses `strftime` specifiers, see
/// [`chrono::format::strftime`](https://docs.rs/chrono/latest/chrono/format/strftime/index.html).
///
/// # Errors
///
/// Returns [`fmt::Error`] if the format string contains an invalid specifier,
/// or a specifier the value cannot provide (e.g. `%H` for a date).
#[cfg_attr(
    feature = "chrono",
    doc = r#"
# Examples

```
use chrono::NaiveDate;
use vc_reflect::ops::DateTime;

let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
assert_eq!(date.format_with("%d/%m/%Y").unwrap(), "01/03/2024");
assert!(date.format_with("%H:%M").is_err());
```
"#
)]
pub trait DateTime: Reflect {
    /// Renders this value with the given format.
    fn format_with(&self, format: &str) -> Result<String, fmt::Error>;
}
