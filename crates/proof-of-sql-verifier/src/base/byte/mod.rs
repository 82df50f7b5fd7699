//! Typed, position-tracked reading of the flat proof, plan, and result
//! byte streams. All integers on the wire are big-endian.

mod byte_reader;
pub use byte_reader::ByteReader;
