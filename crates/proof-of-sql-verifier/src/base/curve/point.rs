use crate::base::{byte::ByteReader, proof::VerificationError};
use alloc::vec::Vec;
use ark_bn254::{Fq, G1Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};

/// Decodes a G1 point from two 32-byte big-endian base-field words.
///
/// `(0, 0)` decodes to the point at infinity, matching the EVM precompile
/// convention. The result is *unchecked*: curve membership is validated by
/// the operation that first uses the point, as the precompiles do.
pub fn g1_from_words(x: &[u8; 32], y: &[u8; 32]) -> G1Affine {
    if x.iter().all(|&byte| byte == 0) && y.iter().all(|&byte| byte == 0) {
        return G1Affine::identity();
    }
    G1Affine::new_unchecked(
        Fq::from_be_bytes_mod_order(x),
        Fq::from_be_bytes_mod_order(y),
    )
}

/// The `(x, y)` word pair of a G1 point; the identity encodes as `(0, 0)`.
pub fn g1_to_words(point: &G1Affine) -> [[u8; 32]; 2] {
    if point.is_zero() {
        return [[0u8; 32]; 2];
    }
    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    x.copy_from_slice(&point.x.into_bigint().to_bytes_be());
    y.copy_from_slice(&point.y.into_bigint().to_bytes_be());
    [x, y]
}

fn read_word(reader: &mut ByteReader) -> Result<[u8; 32], VerificationError> {
    let mut word = [0u8; 32];
    word.copy_from_slice(reader.read_bytes(32)?);
    Ok(word)
}

fn read_g1(reader: &mut ByteReader) -> Result<G1Affine, VerificationError> {
    let x = read_word(reader)?;
    let y = read_word(reader)?;
    Ok(g1_from_words(&x, &y))
}

/// A `u64` length followed by that many `(x, y)` point pairs.
pub fn read_g1_array(reader: &mut ByteReader) -> Result<Vec<G1Affine>, VerificationError> {
    let length = reader.read_array_length(64)?;
    read_g1_points(reader, length)
}

/// `count` consecutive `(x, y)` point pairs, with no length prefix.
pub fn read_g1_points(
    reader: &mut ByteReader,
    count: usize,
) -> Result<Vec<G1Affine>, VerificationError> {
    core::iter::repeat_with(|| read_g1(reader)).take(count).collect()
}
