use crate::hex::HexInt;

/// Extension trait for fixed-width lowercase hex encoding of unsigned
/// integers.
///
/// Both methods produce identical bytes for the same `(value, width)` pair:
///
/// - exactly `width` characters, left-padded with `'0'`
/// - only the low `width` digits when the value needs more
///
/// # Example
///
/// ```
/// use hexgen::HexExt;
///
/// let mut line = Vec::with_capacity(17);
/// 0x2a_u64.append_hex(16, &mut line);
/// line.push(b'\n');
///
/// assert_eq!(0x2a_u64.encode_hex(16), "000000000000002a");
/// assert_eq!(line, b"000000000000002a\n");
/// ```
pub trait HexExt: HexInt {
    /// Encodes this value into a new [`String`].
    ///
    /// See also: [`HexExt::append_hex`] for the zero-allocation version.
    fn encode_hex(self, width: usize) -> String {
        super::encode_hex(self, width)
    }

    /// Appends this value's encoding to the end of `buf` without heap
    /// allocation when `buf` has `width` bytes of spare capacity.
    fn append_hex(self, width: usize, buf: &mut Vec<u8>) {
        super::append_hex(self, width, buf);
    }
}

impl<T: HexInt> HexExt for T {}
