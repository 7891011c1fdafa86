use crate::hex::HexInt;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Writes the significant hex digits of `value` right-aligned into `scratch`
/// and returns how many were written. Zero writes nothing.
///
/// `scratch` must hold at least [`HexInt::HEX_SIZE`] bytes, which
/// [`HexInt::HexArray`] guarantees.
#[inline(always)]
#[allow(clippy::inline_always)]
fn write_digits<T: HexInt>(mut value: T, scratch: &mut [u8]) -> usize {
    let mut pos = scratch.len();
    while !value.is_zero() {
        pos -= 1;
        scratch[pos] = ALPHABET[usize::from(value.low_nibble())];
        value = value.shr_nibble();
    }
    scratch.len() - pos
}

/// Appends exactly `width` lowercase hex characters for `value` to `buf`.
///
/// The value is left-padded with `'0'`. If it needs more than `width`
/// digits, only the low `width` digits are kept. Digits are formatted into a
/// stack scratch array first, so nothing is allocated as long as `buf`
/// already has `width` bytes of spare capacity.
///
/// # Example
///
/// ```
/// let mut buf = Vec::with_capacity(64);
/// hexgen::append_hex(42_u64, 8, &mut buf);
/// hexgen::append_hex(0_u64, 4, &mut buf);
/// assert_eq!(buf, b"0000002a0000");
/// ```
#[inline]
pub fn append_hex<T: HexInt>(value: T, width: usize, buf: &mut Vec<u8>) {
    let mut scratch = T::HexArray::default();
    let scratch = scratch.as_mut();
    let digits = write_digits(value, scratch);

    buf.reserve(width);
    if digits >= width {
        buf.extend_from_slice(&scratch[scratch.len() - width..]);
    } else {
        buf.resize(buf.len() + (width - digits), b'0');
        buf.extend_from_slice(&scratch[scratch.len() - digits..]);
    }
}

/// Encodes `value` into a new [`String`] of exactly `width` lowercase hex
/// characters.
///
/// This goes through the standard formatter and is the reference the
/// buffer-appending [`append_hex`] is checked against. Prefer
/// [`append_hex`] on hot paths.
///
/// # Example
///
/// ```
/// assert_eq!(hexgen::encode_hex(255_u32, 6), "0000ff");
/// assert_eq!(hexgen::encode_hex(0x1234_u32, 2), "34");
/// ```
pub fn encode_hex<T: HexInt>(value: T, width: usize) -> String {
    let mut out = format!("{value:0width$x}");
    if out.len() > width {
        out.drain(..out.len() - width);
    }
    out
}
