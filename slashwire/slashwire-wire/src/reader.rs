//! Bounded cursor over an encoded message.

use bytes::{Buf, Bytes};
use slashwire_core::{WireCategory, WireError};

use crate::{tag::Tag, varint::decode_varint};

/// Cursor over a window of encoded bytes.
///
/// Every read checks the remaining length of the window, so a declared
/// payload length can never carry the cursor past the end of its enclosing
/// message. Offsets in errors are absolute positions in the top-level
/// payload.
#[derive(Debug, Clone)]
pub struct Reader {
    buf: Bytes,
    /// Absolute offset of the window start.
    base: usize,
    initial_len: usize,
}

impl Reader {
    pub fn new(buf: Bytes) -> Self {
        let initial_len = buf.len();
        Self {
            buf,
            base: 0,
            initial_len,
        }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Absolute offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.base + self.initial_len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn has_remaining(&self) -> bool {
        self.buf.has_remaining()
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        if self.buf.remaining() < needed {
            return Err(WireError::truncated(
                self.position(),
                needed,
                self.buf.remaining(),
            ));
        }
        Ok(())
    }

    pub fn read_varint(&mut self) -> Result<u64, WireError> {
        let (value, len) = decode_varint(&self.buf, self.position())?;
        self.buf.advance(len);
        Ok(value)
    }

    pub fn read_tag(&mut self) -> Result<Tag, WireError> {
        let offset = self.position();
        let raw = self.read_varint()?;
        Tag::from_u64(raw, offset)
    }

    /// Low 32 bits of a varint, reinterpreted as signed.
    pub fn read_int32(&mut self) -> Result<i32, WireError> {
        Ok(self.read_varint()? as i32)
    }

    pub fn read_int64(&mut self) -> Result<i64, WireError> {
        Ok(self.read_varint()? as i64)
    }

    pub fn read_uint64(&mut self) -> Result<u64, WireError> {
        self.read_varint()
    }

    pub fn read_bool(&mut self) -> Result<bool, WireError> {
        Ok(self.read_varint()? != 0)
    }

    pub fn read_fixed32(&mut self) -> Result<u32, WireError> {
        self.ensure(4)?;
        Ok(self.buf.get_u32_le())
    }

    pub fn read_fixed64(&mut self) -> Result<u64, WireError> {
        self.ensure(8)?;
        Ok(self.buf.get_u64_le())
    }

    pub fn read_float(&mut self) -> Result<f32, WireError> {
        self.read_fixed32().map(f32::from_bits)
    }

    pub fn read_double(&mut self) -> Result<f64, WireError> {
        self.read_fixed64().map(f64::from_bits)
    }

    /// Read a length prefix and check it against the remaining window.
    pub fn read_length(&mut self) -> Result<usize, WireError> {
        let offset = self.position();
        let raw = self.read_varint()?;
        let remaining = self.buf.remaining();
        match usize::try_from(raw) {
            Ok(len) if len <= remaining => Ok(len),
            Ok(len) => Err(WireError::truncated(offset, len, remaining)),
            Err(_) => Err(WireError::truncated(offset, usize::MAX, remaining)),
        }
    }

    /// Length-prefixed payload, shared with the underlying buffer.
    pub fn read_bytes(&mut self) -> Result<Bytes, WireError> {
        let len = self.read_length()?;
        Ok(self.buf.split_to(len))
    }

    pub fn read_string(&mut self) -> Result<String, WireError> {
        let len = self.read_length()?;
        let offset = self.position();
        let payload = self.buf.split_to(len);
        String::from_utf8(payload.to_vec()).map_err(|_| WireError::InvalidUtf8 { offset })
    }

    /// Split off a length-prefixed payload as its own bounded reader.
    ///
    /// This reader advances past the whole payload regardless of how much
    /// of it the sub-reader consumes.
    pub fn read_sub_reader(&mut self) -> Result<Reader, WireError> {
        let len = self.read_length()?;
        let base = self.position();
        Ok(Reader {
            buf: self.buf.split_to(len),
            base,
            initial_len: len,
        })
    }

    /// Advance past one field payload without interpreting it.
    pub fn skip(&mut self, category: WireCategory) -> Result<(), WireError> {
        match category {
            WireCategory::Varint => {
                self.read_varint()?;
            }
            WireCategory::Fixed64 => {
                self.ensure(8)?;
                self.buf.advance(8);
            }
            WireCategory::Fixed32 => {
                self.ensure(4)?;
                self.buf.advance(4);
            }
            WireCategory::LengthDelimited => {
                let len = self.read_length()?;
                self.buf.advance(len);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tag_then_varint() {
        let mut r = Reader::from_slice(&[0x08, 0x96, 0x01]);
        assert_eq!(r.read_tag().unwrap(), Tag::new(1, WireCategory::Varint));
        assert_eq!(r.read_varint().unwrap(), 150);
        assert!(!r.has_remaining());
        assert_eq!(r.position(), 3);
    }

    #[test]
    fn sign_extended_int32_reads_back_negative() {
        let mut r = Reader::from_slice(&[
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01,
        ]);
        assert_eq!(r.read_int32().unwrap(), -1);
    }

    #[test]
    fn length_beyond_window_is_truncated() {
        let mut r = Reader::from_slice(&[0x05, b'a', b'b']);
        assert_eq!(
            r.read_bytes().unwrap_err(),
            WireError::TruncatedMessage {
                offset: 0,
                needed: 5,
                remaining: 2,
            }
        );
    }

    #[test]
    fn short_fixed_width_is_truncated() {
        let mut r = Reader::from_slice(&[0x00, 0x00]);
        assert!(matches!(
            r.read_fixed32(),
            Err(WireError::TruncatedMessage { needed: 4, .. })
        ));
    }

    #[test]
    fn invalid_utf8_reports_payload_offset() {
        let mut r = Reader::from_slice(&[0x02, 0xC3, 0x28]);
        assert_eq!(
            r.read_string().unwrap_err(),
            WireError::InvalidUtf8 { offset: 1 }
        );
    }

    #[test]
    fn sub_reader_is_bounded_and_keeps_absolute_offsets() {
        let mut r = Reader::from_slice(&[0x02, 0x08, 0x01, 0x10, 0x02]);
        let mut sub = r.read_sub_reader().unwrap();
        assert_eq!(sub.position(), 1);
        assert_eq!(sub.remaining(), 2);
        sub.read_tag().unwrap();
        sub.read_varint().unwrap();
        assert!(!sub.has_remaining());
        assert_eq!(r.position(), 3);
        assert_eq!(r.read_tag().unwrap(), Tag::new(2, WireCategory::Varint));
    }

    #[test]
    fn parent_advances_past_unread_sub_payload() {
        let mut r = Reader::from_slice(&[0x03, 0x01, 0x02, 0x03, 0x08]);
        let _sub = r.read_sub_reader().unwrap();
        assert_eq!(r.position(), 4);
        assert_eq!(r.read_varint().unwrap(), 8);
    }

    #[test]
    fn skip_advances_by_payload_width() {
        let cases: [(WireCategory, &[u8]); 4] = [
            (WireCategory::Varint, &[0xAC, 0x02]),
            (WireCategory::Fixed64, &[1, 2, 3, 4, 5, 6, 7, 8]),
            (WireCategory::Fixed32, &[1, 2, 3, 4]),
            (WireCategory::LengthDelimited, &[0x03, b'x', b'y', b'z']),
        ];
        for (category, payload) in cases {
            let mut data = payload.to_vec();
            data.push(0x2A);
            let mut r = Reader::from_slice(&data);
            r.skip(category).unwrap();
            assert_eq!(r.position(), payload.len(), "{category}");
            assert_eq!(r.read_varint().unwrap(), 0x2A);
        }
    }
}
