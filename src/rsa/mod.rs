// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;

pub use config::{KeyGenConfig, DEFAULT_PRIME_BITS, PUBLIC_EXPONENT};
pub use decrypt::{decrypt_padded, decrypt_to_string, private_decrypt};
pub use encrypt::{encrypt_string, public_encrypt};
pub use error::{RsaError, RsaResult};
pub use keygen::{generate_keys, generate_keys_with, import_public_key, RsaPrivateKey, RsaPublicKey};
