use core::fmt;

const fn hex_size(bytes: usize) -> usize {
    bytes * 2
}

/// A trait for unsigned integers that can be rendered as hexadecimal digits.
///
/// `HEX_SIZE` is the largest number of significant hex digits the type can
/// produce, and `HexArray` is a stack buffer of exactly that size. Encoders
/// format into a `HexArray` first, so the hot path never touches the heap.
pub trait HexInt: Copy + fmt::LowerHex {
    const HEX_SIZE: usize;
    type HexArray: AsRef<[u8]> + AsMut<[u8]> + fmt::Debug + Default + Copy;

    /// The lowest four bits of the value.
    fn low_nibble(self) -> u8;
    /// The value shifted right by one hex digit.
    fn shr_nibble(self) -> Self;
    fn is_zero(self) -> bool;
}

macro_rules! impl_hex_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HexInt for $ty {
                const HEX_SIZE: usize = hex_size(core::mem::size_of::<$ty>());

                type HexArray = [u8; Self::HEX_SIZE];

                #[inline(always)]
                fn low_nibble(self) -> u8 {
                    (self & 0xF) as u8
                }

                #[inline(always)]
                fn shr_nibble(self) -> Self {
                    self >> 4
                }

                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_hex_int!(u8, u16, u32, u64, u128, usize);
