// RSA Encryption Implementation
// Raw RSA: c = m^e mod n, no padding

use super::bigint::{from_bytes, mod_pow, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::{check_components, RsaPublicKey};

/// Encrypt bytes using RSA public key.
///
/// The message is read as an unsigned big-endian integer and must be smaller
/// than the modulus, otherwise [`RsaError::MessageTooLarge`] is returned.
pub fn public_encrypt(plaintext: &[u8], public_key: &RsaPublicKey) -> RsaResult<RsaBigInt> {
    check_components(public_key.n(), public_key.e(), "public")?;

    let m = from_bytes(plaintext);
    if &m >= public_key.n() {
        return Err(RsaError::MessageTooLarge {
            message_bits: m.bits(),
            modulus_bits: public_key.n().bits(),
        });
    }

    // Compute c = m^e mod n
    Ok(mod_pow(&m, public_key.e(), public_key.n()))
}

/// Encrypt a string using RSA public key
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey) -> RsaResult<RsaBigInt> {
    public_encrypt(plaintext.as_bytes(), public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::{generate_keys, import_public_key};

    #[test]
    fn test_encrypt_bytes() {
        let key = generate_keys(256).unwrap().to_public_key();
        let message = b"Hello, RSA!";

        let ciphertext = public_encrypt(message, &key).unwrap();
        assert!(&ciphertext < key.n());

        // Verify it's not the same as plaintext
        assert_ne!(ciphertext, from_bytes(message));
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let key = generate_keys(256).unwrap().to_public_key();
        let first = encrypt_string("Test message", &key).unwrap();
        let second = encrypt_string("Test message", &key).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encrypt_textbook_values() {
        // p = 61, q = 53, e = 17: 65^17 mod 3233 = 2790
        let key = import_public_key(from_u64(3233), from_u64(17));
        assert_eq!(public_encrypt(&[65], &key).unwrap(), from_u64(2790));
    }

    #[test]
    fn test_encrypt_empty() {
        let key = generate_keys(64).unwrap().to_public_key();
        assert_eq!(public_encrypt(b"", &key).unwrap(), from_u64(0));
    }

    #[test]
    fn test_encrypt_message_too_large() {
        let key = generate_keys(64).unwrap().to_public_key();

        // One byte longer than the modulus
        let message = vec![0xFFu8; key.size() + 1];
        assert!(matches!(
            public_encrypt(&message, &key),
            Err(RsaError::MessageTooLarge { .. })
        ));

        // Exactly n
        let n_bytes = key.n().to_bytes_be();
        assert!(matches!(
            public_encrypt(&n_bytes, &key),
            Err(RsaError::MessageTooLarge { .. })
        ));

        // n - 1 still fits
        let below = (key.n() - 1u8).to_bytes_be();
        assert!(public_encrypt(&below, &key).is_ok());
    }

    #[test]
    fn test_encrypt_invalid_key() {
        let zero_modulus = import_public_key(from_u64(0), from_u64(65537));
        assert!(matches!(
            public_encrypt(b"", &zero_modulus),
            Err(RsaError::InvalidKey(_))
        ));

        let zero_exponent = import_public_key(from_u64(3233), from_u64(0));
        assert!(matches!(
            public_encrypt(b"A", &zero_exponent),
            Err(RsaError::InvalidKey(_))
        ));
    }
}
