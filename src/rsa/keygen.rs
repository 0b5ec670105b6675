// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::bigint::{from_u64, is_probable_prime, mod_inverse, random_prime, totient, RsaBigInt};
use super::config::{KeyGenConfig, DEFAULT_PRIMALITY_ROUNDS};
use super::error::{RsaError, RsaResult};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: RsaBigInt, // Modulus
    e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    n: RsaBigInt, // Modulus (same as public)
    d: RsaBigInt, // Private exponent
    e: RsaBigInt, // Public exponent
    // Prime factors, kept so the key can be validated
    primes: Vec<RsaBigInt>,
}

/// Size in bytes of a value below `n`
fn byte_size(n: &RsaBigInt) -> usize {
    ((n.bits() + 7) / 8) as usize
}

/// Reject moduli and exponents that make the transform meaningless
pub(crate) fn check_components(n: &RsaBigInt, exponent: &RsaBigInt, name: &str) -> RsaResult<()> {
    if n <= &RsaBigInt::one() {
        return Err(RsaError::InvalidKey("modulus must be greater than 1".to_string()));
    }
    if exponent.is_zero() {
        return Err(RsaError::InvalidKey(format!("{} exponent must be non-zero", name)));
    }
    Ok(())
}

impl RsaPublicKey {
    /// Build a public key from raw components. Nothing is validated.
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Self {
        Self { n, e }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Modulus size in bytes
    pub fn size(&self) -> usize {
        byte_size(&self.n)
    }

    /// Encrypt a message using this public key
    /// Returns the ciphertext integer
    pub fn encrypt(&self, plaintext: &[u8]) -> RsaResult<RsaBigInt> {
        super::encrypt::public_encrypt(plaintext, self)
    }
}

impl RsaPrivateKey {
    /// Build a private key from raw components. Call [`validate`](Self::validate)
    /// to check them.
    pub fn from_components(n: RsaBigInt, e: RsaBigInt, d: RsaBigInt, primes: Vec<RsaBigInt>) -> Self {
        Self { n, d, e, primes }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    pub fn primes(&self) -> &[RsaBigInt] {
        &self.primes
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Modulus size in bytes
    pub fn size(&self) -> usize {
        byte_size(&self.n)
    }

    /// Project out the public half
    pub fn to_public_key(&self) -> RsaPublicKey {
        import_public_key(self.n.clone(), self.e.clone())
    }

    /// Decrypt a ciphertext using this private key
    /// Returns plaintext as minimal big-endian bytes
    pub fn decrypt(&self, ciphertext: &RsaBigInt) -> RsaResult<Vec<u8>> {
        super::decrypt::private_decrypt(ciphertext, self)
    }

    /// Check that the components form a consistent two-prime key:
    /// n = p * q with p, q probable primes, and d * e ≡ 1 (mod φ(n))
    pub fn validate(&self) -> RsaResult<()> {
        check_components(&self.n, &self.e, "public")?;
        check_components(&self.n, &self.d, "private")?;
        if self.e <= RsaBigInt::one() {
            return Err(RsaError::InvalidKey("public exponent must be greater than 1".to_string()));
        }

        let (p, q) = match self.primes.as_slice() {
            [p, q] => (p, q),
            other => {
                return Err(RsaError::InvalidKey(format!(
                    "expected 2 prime factors, got {}",
                    other.len()
                )))
            }
        };

        if p == q {
            return Err(RsaError::InvalidKey("prime factors must be distinct".to_string()));
        }

        let mut rng = OsRng;
        for prime in [p, q] {
            if !is_probable_prime(prime, DEFAULT_PRIMALITY_ROUNDS, &mut rng)? {
                return Err(RsaError::InvalidKey("prime factor is composite".to_string()));
            }
        }

        if p * q != self.n {
            return Err(RsaError::InvalidKey("modulus is not the product of its primes".to_string()));
        }

        let phi = totient(p, q);
        if !((&self.d * &self.e) % &phi).is_one() {
            return Err(RsaError::InvalidKey("d * e is not 1 mod φ(n)".to_string()));
        }

        Ok(())
    }
}

/// Build a public key from a modulus and exponent. Pure projection: the pair
/// is not checked against any private key.
pub fn import_public_key(n: RsaBigInt, e: RsaBigInt) -> RsaPublicKey {
    RsaPublicKey::new(n, e)
}

/// Generate an RSA private key whose modulus is the product of two
/// `prime_bits`-bit primes, drawing entropy from the OS.
pub fn generate_keys(prime_bits: u32) -> RsaResult<RsaPrivateKey> {
    let config = KeyGenConfig::default().with_prime_bits(prime_bits);
    generate_keys_with(&config, &mut OsRng)
}

/// Generate an RSA private key with explicit parameters and random source.
///
/// A pair (p, q) is discarded and regenerated when p == q or when the public
/// exponent has no inverse modulo φ(n). Fails with
/// [`RsaError::KeyGenerationExhausted`] after `config.max_attempts` pairs.
pub fn generate_keys_with<R>(config: &KeyGenConfig, rng: &mut R) -> RsaResult<RsaPrivateKey>
where
    R: RngCore + CryptoRng + ?Sized,
{
    config.validate()?;

    let e = from_u64(config.public_exponent);

    for _ in 0..config.max_attempts {
        // Step 1: Generate two random primes p and q
        let p = random_prime(config.prime_bits, config.primality_rounds, rng)?;
        let q = random_prime(config.prime_bits, config.primality_rounds, rng)?;

        if p == q {
            continue;
        }

        // Step 2: Compute φ(n) = (p-1)(q-1)
        let phi = totient(&p, &q);

        // Step 3: Compute d = e^(-1) mod φ(n), redrawing p and q if e and φ(n) share a factor
        let d = match mod_inverse(&e, &phi) {
            Some(d) => d,
            None => continue,
        };

        // Step 4: Compute n = p * q
        let n = &p * &q;

        return Ok(RsaPrivateKey {
            n,
            d,
            e,
            primes: vec![p, q],
        });
    }

    Err(RsaError::KeyGenerationExhausted {
        attempts: config.max_attempts,
    })
}
