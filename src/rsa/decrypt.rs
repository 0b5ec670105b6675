// RSA Decryption Implementation
// Raw RSA: m = c^d mod n, no padding

use super::bigint::{mod_pow, to_bytes, to_bytes_padded, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::{check_components, RsaPrivateKey};

fn decrypt_integer(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<RsaBigInt> {
    check_components(private_key.n(), private_key.d(), "private")?;

    if ciphertext >= private_key.n() {
        return Err(RsaError::CiphertextOutOfRange);
    }

    // Compute m = c^d mod n
    Ok(mod_pow(ciphertext, private_key.d(), private_key.n()))
}

/// Decrypt a ciphertext using RSA private key.
///
/// The plaintext is returned as a minimal big-endian byte string: leading zero
/// bytes of the original message are not recovered, and a zero plaintext
/// decodes to an empty vector. Use [`decrypt_padded`] for fixed-width output.
pub fn private_decrypt(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<Vec<u8>> {
    let m = decrypt_integer(ciphertext, private_key)?;
    Ok(to_bytes(&m))
}

/// Decrypt to exactly `private_key.size()` bytes, left-padded with zeros
pub fn decrypt_padded(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<Vec<u8>> {
    let m = decrypt_integer(ciphertext, private_key)?;
    // m < n, so the result is exactly the modulus width
    Ok(to_bytes_padded(&m, private_key.size()))
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<String> {
    let plaintext = private_decrypt(ciphertext, private_key)?;
    Ok(String::from_utf8(plaintext)?)
}
