use alloc::borrow::Cow;
use alloc::string::String;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{ReflectRef, Scalar};

macro_rules! impl_reflect_scalar {
    ($($ty:ty => |$v:ident| $expr:expr),* $(,)?) => {
        $(
            impl Reflect for $ty {
                #[inline]
                fn reflect_kind(&self) -> ReflectKind {
                    ReflectKind::Scalar
                }

                #[inline]
                fn reflect_ref(&self) -> ReflectRef<'_> {
                    let $v = self;
                    ReflectRef::Scalar($expr)
                }
            }
        )*
    };
}

impl_reflect_scalar!(
    () => |_v| Scalar::Null,
    bool => |v| Scalar::Bool(*v),
    char => |v| Scalar::Char(*v),
    i8 => |v| Scalar::Int(i64::from(*v)),
    i16 => |v| Scalar::Int(i64::from(*v)),
    i32 => |v| Scalar::Int(i64::from(*v)),
    i64 => |v| Scalar::Int(*v),
    isize => |v| Scalar::Int(*v as i64),
    u8 => |v| Scalar::UInt(u64::from(*v)),
    u16 => |v| Scalar::UInt(u64::from(*v)),
    u32 => |v| Scalar::UInt(u64::from(*v)),
    u64 => |v| Scalar::UInt(*v),
    usize => |v| Scalar::UInt(*v as u64),
    f32 => |v| Scalar::Float(f64::from(*v)),
    f64 => |v| Scalar::Float(*v),
    String => |v| Scalar::Str(v.as_str()),
    &'static str => |v| Scalar::Str(v),
    Cow<'static, str> => |v| Scalar::Str(v.as_ref()),
);

// Values outside the 64-bit range degrade to floats.
impl_reflect_scalar!(
    i128 => |v| i64::try_from(*v).map_or(Scalar::Float(*v as f64), Scalar::Int),
    u128 => |v| u64::try_from(*v).map_or(Scalar::Float(*v as f64), Scalar::UInt),
);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::{ReflectRef, Scalar};

    fn scalar(value: &dyn Reflect) -> Scalar<'_> {
        match value.reflect_ref() {
            ReflectRef::Scalar(v) => v,
            other => panic!("expected a scalar, found {}", other.kind()),
        }
    }

    #[test]
    fn widening() {
        assert_eq!(scalar(&-3_i8), Scalar::Int(-3));
        assert_eq!(scalar(&7_usize), Scalar::UInt(7));
        assert_eq!(scalar(&1.5_f32), Scalar::Float(1.5));
        assert_eq!(scalar(&(1_u128 << 100)), Scalar::Float((1_u128 << 100) as f64));
        assert_eq!(scalar(&42_i128), Scalar::Int(42));
        assert_eq!(scalar(&()), Scalar::Null);
    }

    #[test]
    fn strings() {
        let owned = String::from("abc");
        let cow: Cow<'static, str> = Cow::Borrowed("def");
        assert_eq!(scalar(&owned), Scalar::Str("abc"));
        assert_eq!(scalar(&cow), Scalar::Str("def"));
        assert_eq!(scalar(&"ghi"), Scalar::Str("ghi"));
        assert_eq!('x'.reflect_kind(), ReflectKind::Scalar);
    }
}
