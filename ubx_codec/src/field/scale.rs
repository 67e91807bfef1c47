use num_traits::{float::FloatCore, ToPrimitive};

/// Inverse of a field scale: physical value back to the raw wire integer.
///
/// Holds `1 / scale`; conversions round to nearest and saturate at the
/// bounds of the target type, NaN maps to zero.
pub struct ScaleBack<T: FloatCore + ToPrimitive>(pub T);

macro_rules! scale_back_as {
    ($($name:ident / $to:ident => $ty:ty),*) => {
        $(
            pub fn $name(self, x: T) -> $ty {
                let x = (x * self.0).round();
                if x.is_nan() {
                    return 0;
                }
                match x.$to() {
                    Some(v) => v,
                    None if x < T::zero() => <$ty>::MIN,
                    None => <$ty>::MAX,
                }
            }
        )*
    };
}

impl<T: FloatCore + ToPrimitive> ScaleBack<T> {
    scale_back_as!(
        as_u8 / to_u8 => u8,
        as_i8 / to_i8 => i8,
        as_u16 / to_u16 => u16,
        as_i16 / to_i16 => i16,
        as_u32 / to_u32 => u32,
        as_i32 / to_i32 => i32,
        as_u64 / to_u64 => u64,
        as_i64 / to_i64 => i64
    );
}
