//! Append-only byte builder with deferred length prefixes for nested
//! messages.

use bytes::{BufMut, Bytes, BytesMut};
use slashwire_core::{WireCategory, WireError};

use crate::{tag::Tag, varint::encode_varint};

/// Builds one flat encoded message.
///
/// Nested messages are written between [`fork`](Self::fork) and
/// [`join`](Self::join): the fork opens a fresh frame, and the join prefixes
/// the frame's finished bytes with their varint length and appends them to
/// the parent. Lengths are therefore never reserved up front.
#[derive(Debug, Default)]
pub struct Writer {
    root: BytesMut,
    /// Open frames, innermost last. Each frame's parent is the entry before
    /// it, or `root` for the first.
    frames: Vec<BytesMut>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of forks not yet joined.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn current(&mut self) -> &mut BytesMut {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    pub fn write_tag(&mut self, field_number: u32, category: WireCategory) {
        self.write_varint(Tag::new(field_number, category).to_u64());
    }

    pub fn write_varint(&mut self, value: u64) {
        encode_varint(value, self.current());
    }

    /// Signed 32-bit values are sign-extended, so negatives take ten bytes.
    pub fn write_int32(&mut self, value: i32) {
        self.write_varint(i64::from(value) as u64);
    }

    pub fn write_fixed32(&mut self, value: u32) {
        self.current().put_u32_le(value);
    }

    pub fn write_fixed64(&mut self, value: u64) {
        self.current().put_u64_le(value);
    }

    /// Length-prefixed raw bytes.
    pub fn write_length_delimited(&mut self, data: &[u8]) {
        let frame = self.current();
        encode_varint(data.len() as u64, frame);
        frame.put_slice(data);
    }

    pub fn write_varint_field(&mut self, field_number: u32, value: u64) {
        self.write_tag(field_number, WireCategory::Varint);
        self.write_varint(value);
    }

    pub fn write_int32_field(&mut self, field_number: u32, value: i32) {
        self.write_tag(field_number, WireCategory::Varint);
        self.write_int32(value);
    }

    pub fn write_bool_field(&mut self, field_number: u32, value: bool) {
        self.write_varint_field(field_number, u64::from(value));
    }

    pub fn write_double_field(&mut self, field_number: u32, value: f64) {
        self.write_tag(field_number, WireCategory::Fixed64);
        self.write_fixed64(value.to_bits());
    }

    pub fn write_float_field(&mut self, field_number: u32, value: f32) {
        self.write_tag(field_number, WireCategory::Fixed32);
        self.write_fixed32(value.to_bits());
    }

    pub fn write_string_field(&mut self, field_number: u32, value: &str) {
        self.write_bytes_field(field_number, value.as_bytes());
    }

    pub fn write_bytes_field(&mut self, field_number: u32, value: &[u8]) {
        self.write_tag(field_number, WireCategory::LengthDelimited);
        self.write_length_delimited(value);
    }

    /// Open a nested frame; subsequent writes target it until
    /// [`join`](Self::join).
    pub fn fork(&mut self) {
        self.frames.push(BytesMut::new());
        tracing::trace!(depth = self.frames.len(), "writer fork");
    }

    /// Close the innermost frame, appending its length and bytes to the
    /// parent frame.
    pub fn join(&mut self) -> Result<(), WireError> {
        let frame = self.frames.pop().ok_or(WireError::FrameUnderflow)?;
        tracing::trace!(
            depth = self.frames.len(),
            len = frame.len(),
            "writer join"
        );
        self.write_length_delimited(&frame);
        Ok(())
    }

    /// Return the encoded bytes.
    ///
    /// Fails with [`WireError::UnbalancedFraming`] if any fork is still open;
    /// the output is never silently truncated.
    pub fn finish(self) -> Result<Bytes, WireError> {
        if !self.frames.is_empty() {
            return Err(WireError::UnbalancedFraming {
                open_frames: self.frames.len(),
            });
        }
        Ok(self.root.freeze())
    }
}
