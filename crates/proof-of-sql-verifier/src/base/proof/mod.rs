//! Proof-level primitives: the error taxonomy and the public-coin
//! keccak-256 transcript that drives the entire protocol.

mod error;
pub use error::VerificationError;

mod keccak256_transcript;
pub use keccak256_transcript::Keccak256Transcript;
