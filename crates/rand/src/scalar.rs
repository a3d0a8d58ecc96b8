//! Types that can be filled directly from random bytes

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width type for which every bit pattern is a valid value
///
/// Sealed: implementing it for a type with invalid bit patterns (`bool`,
/// `char`, enums) would make [`random_scalar`](crate::random_scalar) unsound.
pub trait RandomScalar: sealed::Sealed + Sized {
    /// Byte buffer exactly as wide as `Self`
    type Bytes: AsMut<[u8]>;

    /// An all-zero buffer to fill
    fn zeroed_bytes() -> Self::Bytes;

    /// Reinterpret filled bytes in native byte order
    fn from_random_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_random_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RandomScalar for $t {
                type Bytes = [u8; core::mem::size_of::<$t>()];

                #[inline]
                fn zeroed_bytes() -> Self::Bytes {
                    [0u8; core::mem::size_of::<$t>()]
                }

                #[inline]
                fn from_random_bytes(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_random_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<const N: usize> sealed::Sealed for [u8; N] {}

impl<const N: usize> RandomScalar for [u8; N] {
    type Bytes = [u8; N];

    #[inline]
    fn zeroed_bytes() -> Self::Bytes {
        [0u8; N]
    }

    #[inline]
    fn from_random_bytes(bytes: Self::Bytes) -> Self {
        bytes
    }
}
