use alloc::string::String;
use core::fmt::{self, Display, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::Reflect;
use crate::ops;
use crate::reflection::impl_reflect_cast_fn;

// `DelayedFormat` reports invalid specifiers as `fmt::Error`, which `write!`
// surfaces instead of panicking like `to_string`.
fn render(value: impl Display) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{value}")?;
    Ok(out)
}

impl<Tz> Reflect for DateTime<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Display + Send + Sync,
{
    impl_reflect_cast_fn!(DateTime);
}

impl<Tz> ops::DateTime for DateTime<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Display + Send + Sync,
{
    #[inline]
    fn format_with(&self, format: &str) -> Result<String, fmt::Error> {
        render(self.format(format))
    }
}

macro_rules! impl_reflect_naive {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                impl_reflect_cast_fn!(DateTime);
            }

            impl ops::DateTime for $ty {
                #[inline]
                fn format_with(&self, format: &str) -> Result<String, fmt::Error> {
                    render(self.format(format))
                }
            }
        )*
    };
}

impl_reflect_naive!(NaiveDateTime, NaiveDate, NaiveTime);

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    use crate::Reflect;
    use crate::ops::ReflectRef;

    #[test]
    fn format_zoned() {
        let value = Utc.with_ymd_and_hms(2021, 6, 5, 13, 4, 9).unwrap();
        let ReflectRef::DateTime(view) = value.reflect_ref() else {
            panic!("expected a datetime");
        };
        assert_eq!(
            view.format_with("%Y-%m-%dT%H:%M:%S%:z").unwrap(),
            "2021-06-05T13:04:09+00:00"
        );

        let offset = FixedOffset::east_opt(3600).unwrap();
        let value = offset.with_ymd_and_hms(2021, 6, 5, 13, 4, 9).unwrap();
        assert_eq!(
            crate::ops::DateTime::format_with(&value, "%H:%M%:z").unwrap(),
            "13:04+01:00"
        );
    }

    #[test]
    fn invalid_format() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        assert!(crate::ops::DateTime::format_with(&date, "%Q").is_err());
        assert_eq!(
            crate::ops::DateTime::format_with(&date, "%Y/%m/%d").unwrap(),
            "2020/01/02"
        );
    }
}
