//! Binary tag/length/value encoding for `slashwire` message values.
//!
//! Each field is a varint tag `(field_number << 3) | category` followed by a
//! payload whose framing the category determines. Nested messages are
//! length-delimited; fields a reader does not know are skipped, so readers
//! and writers on different schema versions interoperate.

mod codec;
mod decode;
mod encode;
mod reader;
mod tag;
mod varint;
mod writer;

pub use codec::BinaryCodec;
pub use decode::{decode, decode_message};
pub use encode::{encode_message, encode_to_bytes};
pub use reader::Reader;
pub use tag::Tag;
pub use varint::{MAX_VARINT_LEN, decode_varint, encode_varint, encoded_len};
pub use writer::Writer;
