// RSA Errors
// Every fallible operation in the crate reports one of these

use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsaError {
    /// The random source failed while searching for primes or witnesses.
    #[error("random source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The message, read as a big-endian integer, is not below the modulus.
    #[error("message too large: {message_bits}-bit value does not fit a {modulus_bits}-bit modulus")]
    MessageTooLarge { message_bits: u64, modulus_bits: u64 },

    #[error("ciphertext is not below the modulus")]
    CiphertextOutOfRange,

    #[error("invalid prime bit length {0}: must be at least 2")]
    InvalidBitLength(u32),

    #[error("invalid key generation config: {0}")]
    InvalidConfig(&'static str),

    #[error("no usable prime pair found after {attempts} attempts")]
    KeyGenerationExhausted { attempts: u32 },

    #[error("decrypted message is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

pub type RsaResult<T> = Result<T, RsaError>;
