mod sealed {
    pub trait Sealed {}
}

/// Bridge between one fixed machine integer width and the sign-magnitude
/// form the codec operates on. Implemented for the 8/16/32/64-bit signed
/// and unsigned types; magnitudes are carried in `u128`, which holds every
/// supported width losslessly.
pub trait Integer: Copy + Eq + sealed::Sealed {
    const SIGNED: bool;

    /// Splits a value into `(is_negative, magnitude)`. The minimum value of
    /// a signed width cannot be negated in-width, so implementations go
    /// through the unsigned counterpart rather than `-self`.
    fn to_parts(self) -> (bool, u128);

    /// Rebuilds a value from sign and magnitude. Returns `None` when the
    /// magnitude does not fit the width on that side of zero, or when a
    /// negative sign reaches an unsigned type.
    fn from_parts(negative: bool, magnitude: u128) -> Option<Self>;
}

macro_rules! unsigned_integer {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const SIGNED: bool = false;

            fn to_parts(self) -> (bool, u128) {
                (false, self as u128)
            }

            fn from_parts(negative: bool, magnitude: u128) -> Option<Self> {
                if negative || magnitude > <$t>::MAX as u128 {
                    return None;
                }
                Some(magnitude as $t)
            }
        }
    )*};
}

macro_rules! signed_integer {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const SIGNED: bool = true;

            fn to_parts(self) -> (bool, u128) {
                (self < 0, self.unsigned_abs() as u128)
            }

            fn from_parts(negative: bool, magnitude: u128) -> Option<Self> {
                if negative {
                    if magnitude > <$t>::MAX as u128 + 1 {
                        return None;
                    }
                    Some((magnitude as $u).wrapping_neg() as $t)
                } else {
                    if magnitude > <$t>::MAX as u128 {
                        return None;
                    }
                    Some(magnitude as $t)
                }
            }
        }
    )*};
}

unsigned_integer!(u8, u16, u32, u64);
signed_integer!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
