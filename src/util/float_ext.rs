pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// `self != other`
    fn not_eq(self, other: Self) -> bool;

    /// `|self - other| <= tolerance`
    #[cfg(test)]
    fn almost_eq(self, other: Self, tolerance: Self) -> bool;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn not_eq(self, other: Self) -> bool {
                (self - other).abs() >= <$ty>::EPSILON
            }

            #[cfg(test)]
            fn almost_eq(self, other: Self, tolerance: Self) -> bool {
                (self - other).abs() <= tolerance
            }
        }
    };
}

impl_float_ext!(f64);
