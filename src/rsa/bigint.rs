// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use super::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Primes used to sieve candidates before Miller-Rabin
const SMALL_PRIMES: [u32; 53] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241,
];

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian, minimal length).
/// Zero becomes the empty vector.
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Convert big integer to big-endian bytes, left-padded with zeros to at least
/// `len` bytes. Values wider than `len` are returned unpadded.
pub fn to_bytes_padded(n: &RsaBigInt, len: usize) -> Vec<u8> {
    let bytes = to_bytes(n);
    let width = len.max(bytes.len());
    let mut result = vec![0u8; width];
    result[width - bytes.len()..].copy_from_slice(&bytes);
    result
}

/// Modular exponentiation: base^exp mod modulus.
/// The modulus must be non-zero; key checks guarantee that before any call.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }
    base.modpow(exp, modulus)
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() || m.is_one() {
        return None;
    }

    let m_signed = BigInt::from(m.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from(a.clone()), &m_signed);

    if !gcd.is_one() {
        // Inverse doesn't exist
        return None;
    }

    x.mod_floor(&m_signed).to_biguint()
}

/// Euler's totient of n = p * q
pub fn totient(p: &RsaBigInt, q: &RsaBigInt) -> RsaBigInt {
    (p - 1u8) * (q - 1u8)
}

/// Uniform random integer in [0, bound), by rejection sampling
pub fn random_below<R>(bound: &RsaBigInt, rng: &mut R) -> RsaResult<RsaBigInt>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bound.is_zero() {
        return Err(RsaError::InvalidConfig("random bound must be non-zero"));
    }

    let bits = bound.bits();
    let byte_len = ((bits + 7) / 8) as usize;
    let excess = (byte_len as u64 * 8 - bits) as u32;
    let mut buf = vec![0u8; byte_len];

    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(RsaError::EntropyUnavailable)?;
        buf[0] &= 0xFF >> excess;

        let candidate = from_bytes(&buf);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime; witnesses come from `rng`
pub fn is_probable_prime<R>(n: &RsaBigInt, iterations: u32, rng: &mut R) -> RsaResult<bool>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let two = RsaBigInt::from(2u8);
    if n < &two {
        return Ok(false);
    }
    if n == &two || n == &RsaBigInt::from(3u8) {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    // Witnesses a in [2, n-2]
    let witness_span = n - 3u8;

    'witness: for _ in 0..iterations {
        let a = random_below(&witness_span, rng)? + &two;

        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return Ok(false);
    }

    // Probably prime
    Ok(true)
}

/// Generate a random prime of exactly `bit_length` bits.
///
/// The two most significant bits are always set, so the product of two such
/// primes has exactly `2 * bit_length` bits.
pub fn random_prime<R>(bit_length: u32, iterations: u32, rng: &mut R) -> RsaResult<RsaBigInt>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bit_length < 2 {
        return Err(RsaError::InvalidBitLength(bit_length));
    }

    let byte_len = ((bit_length + 7) / 8) as usize;
    let excess = byte_len as u32 * 8 - bit_length;
    let mut buf = vec![0u8; byte_len];
    let top = u64::from(bit_length - 1);

    'candidate: loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(RsaError::EntropyUnavailable)?;
        buf[0] &= 0xFF >> excess;

        let mut candidate = from_bytes(&buf);
        candidate.set_bit(top, true);
        candidate.set_bit(top - 1, true);
        candidate.set_bit(0, true);

        for &p in SMALL_PRIMES.iter() {
            if candidate == RsaBigInt::from(p) {
                return Ok(candidate);
            }
            if (&candidate % p).is_zero() {
                continue 'candidate;
            }
        }

        if is_probable_prime(&candidate, iterations, rng)? {
            return Ok(candidate);
        }
    }
}
