//! Conversion from the stored `f64` to each return type of `Randomizer`.
//!
//! Conversions are plain `as` casts: integers truncate toward zero and
//! saturate at the bounds of the target type, and NaN becomes 0.

pub(crate) trait FromDispensed {
    fn from_dispensed(value: f64) -> Self;
}

macro_rules! impl_from_dispensed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromDispensed for $ty {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                fn from_dispensed(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_from_dispensed!(f32, i32, i64, isize, u32, u64);

impl FromDispensed for f64 {
    fn from_dispensed(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_convert_exactly() {
        assert_eq!(isize::from_dispensed(4.0), 4);
        assert_eq!(i32::from_dispensed(4.0), 4);
        assert_eq!(i64::from_dispensed(4.0), 4);
        assert_eq!(u32::from_dispensed(4.0), 4);
        assert_eq!(u64::from_dispensed(4.0), 4);
        assert_eq!(f32::from_dispensed(4.0), 4.0_f32);
        assert_eq!(f64::from_dispensed(4.0), 4.0);
    }

    #[test]
    fn test_fractions_truncate_toward_zero() {
        assert_eq!(i32::from_dispensed(1.5), 1);
        assert_eq!(i64::from_dispensed(5.99), 5);
        assert_eq!(isize::from_dispensed(-35.5), -35);
        assert_eq!(u64::from_dispensed(0.999), 0);
    }

    #[test]
    fn test_out_of_range_values_saturate() {
        assert_eq!(u32::from_dispensed(-35.5), 0);
        assert_eq!(u64::from_dispensed(-1.0), 0);
        assert_eq!(i32::from_dispensed(1e12), i32::MAX);
        assert_eq!(i32::from_dispensed(-1e12), i32::MIN);
        assert_eq!(u32::from_dispensed(f64::INFINITY), u32::MAX);
        assert_eq!(i64::from_dispensed(f64::NAN), 0);
    }

    #[test]
    fn test_f32_rounds_to_nearest_representable() {
        assert_eq!(f32::from_dispensed(0.1), 0.1_f32);
        assert!(f32::from_dispensed(1e300).is_infinite());
    }
}
