use crate::base::{
    curve::g1_to_words,
    scalar::{BNScalar, MODULUS_MASK},
};
use alloc::vec::Vec;
use ark_bn254::G1Affine;
use tiny_keccak::{Hasher, Keccak};

/// Public coin transcript, hash-chained the way the on-chain verifier runs it.
///
/// The whole transcript is a single 32-byte state. Appending a message
/// replaces the state with `keccak256(state || message)`; drawing a challenge
/// emits `state & MODULUS_MASK` and rehashes the state. The byte layout of
/// every append is part of the wire format, so the helpers below are the only
/// ways the verifier ever feeds the transcript:
///
/// - raw bytes, for spans copied verbatim from the proof;
/// - a scalar array: a 32-byte length word, then each scalar's 32-byte
///   big-endian word;
/// - a point array: the same, with the length doubled because each point is
///   an `(x, y)` pair of words.
pub struct Keccak256Transcript {
    state: [u8; 32],
}

/// keccak-256 of the empty string, the state every transcript starts from.
const EMPTY_STRING_KECCAK: [u8; 32] = [
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
];

fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    for part in parts {
        hasher.update(part);
    }
    let mut digest = [0u8; 32];
    hasher.finalize(&mut digest);
    digest
}

fn length_word(length: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&length.to_be_bytes());
    word
}

impl Keccak256Transcript {
    pub fn new() -> Self {
        Self {
            state: EMPTY_STRING_KECCAK,
        }
    }

    /// `state <- keccak256(state || message)`
    pub fn append_bytes(&mut self, message: &[u8]) {
        self.state = keccak256(&[&self.state, message]);
    }

    pub fn append_scalars(&mut self, scalars: &[BNScalar]) {
        let mut buffer = Vec::with_capacity(32 * (scalars.len() + 1));
        buffer.extend_from_slice(&length_word(scalars.len() as u64));
        for scalar in scalars {
            buffer.extend_from_slice(&scalar.to_be_bytes());
        }
        self.append_bytes(&buffer);
    }

    pub fn append_points(&mut self, points: &[G1Affine]) {
        let mut buffer = Vec::with_capacity(64 * points.len() + 32);
        buffer.extend_from_slice(&length_word(2 * points.len() as u64));
        for point in points {
            let [x, y] = g1_to_words(point);
            buffer.extend_from_slice(&x);
            buffer.extend_from_slice(&y);
        }
        self.append_bytes(&buffer);
    }

    /// Emits `state & MODULUS_MASK` as a field element and rehashes the state.
    pub fn draw_challenge(&mut self) -> BNScalar {
        let mut masked = self.state;
        for (byte, mask) in masked.iter_mut().zip(MODULUS_MASK) {
            *byte &= mask;
        }
        self.state = keccak256(&[&self.state]);
        BNScalar::from_be_bytes_mod_order(&masked)
    }

    pub fn draw_challenges(&mut self, count: usize) -> Vec<BNScalar> {
        core::iter::repeat_with(|| self.draw_challenge())
            .take(count)
            .collect()
    }
}

impl Default for Keccak256Transcript {
    fn default() -> Self {
        Self::new()
    }
}
