use crate::base::{proof::VerificationError, scalar::BNScalar};
use alloc::vec::Vec;

/// Cursor over an untrusted byte buffer.
///
/// Every read is bounds-checked and fails with
/// [`VerificationError::ProofBufferUnderflow`] instead of panicking.
/// Length-prefixed reads validate the claimed span against the remaining
/// bytes before allocating, so a hostile length cannot trigger an
/// out-of-memory abort.
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current position, usable as a mark for [`Self::consumed_since`].
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The exact byte span consumed since `mark`. Used to replay proof
    /// messages into the transcript verbatim.
    pub fn consumed_since(&self, mark: usize) -> &'a [u8] {
        &self.bytes[mark..self.offset]
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], VerificationError> {
        if count > self.remaining() {
            return Err(VerificationError::ProofBufferUnderflow);
        }
        let span = &self.bytes[self.offset..self.offset + count];
        self.offset += count;
        Ok(span)
    }

    pub fn read_u8(&mut self) -> Result<u8, VerificationError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, VerificationError> {
        let span = self.take(4)?;
        Ok(u32::from_be_bytes(span.try_into().expect("span is 4 bytes")))
    }

    pub fn read_u64(&mut self) -> Result<u64, VerificationError> {
        let span = self.take(8)?;
        Ok(u64::from_be_bytes(span.try_into().expect("span is 8 bytes")))
    }

    pub fn read_i8(&mut self) -> Result<i8, VerificationError> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, VerificationError> {
        let span = self.take(2)?;
        Ok(i16::from_be_bytes(span.try_into().expect("span is 2 bytes")))
    }

    pub fn read_i32(&mut self) -> Result<i32, VerificationError> {
        let span = self.take(4)?;
        Ok(i32::from_be_bytes(span.try_into().expect("span is 4 bytes")))
    }

    pub fn read_i64(&mut self) -> Result<i64, VerificationError> {
        let span = self.take(8)?;
        Ok(i64::from_be_bytes(span.try_into().expect("span is 8 bytes")))
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], VerificationError> {
        self.take(count)
    }

    /// One 32-byte big-endian field word.
    pub fn read_scalar(&mut self) -> Result<BNScalar, VerificationError> {
        Ok(BNScalar::from_be_bytes_mod_order(self.take(32)?))
    }

    /// `count` consecutive field words, with no length prefix.
    pub fn read_scalars(&mut self, count: usize) -> Result<Vec<BNScalar>, VerificationError> {
        let span = self.take(count.checked_mul(32).ok_or(VerificationError::ProofBufferUnderflow)?)?;
        Ok(span
            .chunks_exact(32)
            .map(BNScalar::from_be_bytes_mod_order)
            .collect())
    }

    /// A `u64` length followed by that many field words.
    pub fn read_scalar_array(&mut self) -> Result<Vec<BNScalar>, VerificationError> {
        let length = self.read_array_length(32)?;
        self.read_scalars(length)
    }

    /// A `u64` length followed by that many big-endian `u64`s.
    pub fn read_u64_array(&mut self) -> Result<Vec<u64>, VerificationError> {
        let length = self.read_array_length(8)?;
        let span = self.take(length * 8)?;
        Ok(span
            .chunks_exact(8)
            .map(|chunk| u64::from_be_bytes(chunk.try_into().expect("chunk is 8 bytes")))
            .collect())
    }

    /// Reads a `u64` array length and checks that `length * element_size`
    /// bytes are actually present before anything is allocated.
    pub fn read_array_length(&mut self, element_size: usize) -> Result<usize, VerificationError> {
        let length = self.read_u64()?;
        let length = usize::try_from(length).map_err(|_| VerificationError::ProofBufferUnderflow)?;
        let byte_count = length
            .checked_mul(element_size)
            .ok_or(VerificationError::ProofBufferUnderflow)?;
        if byte_count > self.remaining() {
            return Err(VerificationError::ProofBufferUnderflow);
        }
        Ok(length)
    }
}
