//! Unsigned base-128 variable-length integers.

use bytes::BufMut;
use slashwire_core::WireError;

/// Longest valid encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Append `value` as a varint: seven bits per byte, least-significant group
/// first, continuation bit on every byte but the last.
#[inline]
pub fn encode_varint(mut value: u64, buf: &mut impl BufMut) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Number of bytes [`encode_varint`] emits for `value`.
#[inline]
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Decode one varint from the start of `data`.
///
/// Returns the value and the number of bytes consumed. `offset` is the
/// absolute position of `data[0]` and is only used in errors.
pub fn decode_varint(data: &[u8], offset: usize) -> Result<(u64, usize), WireError> {
    let mut value = 0u64;
    for (i, &byte) in data.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            // The tenth byte may only carry the 64th bit and cannot continue.
            return Err(WireError::MalformedVarint { offset });
        }
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(WireError::truncated(offset, data.len() + 1, data.len()))
}
