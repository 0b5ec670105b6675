// Key Generation Configuration

use super::error::{RsaError, RsaResult};

/// Bit length of each prime factor in the default configuration
pub const DEFAULT_PRIME_BITS: u32 = 2048;

/// Public exponent used for every generated key
pub const PUBLIC_EXPONENT: u64 = 65537;

/// Miller-Rabin rounds per prime candidate
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = 20;

/// Prime pairs tried before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

/// Parameters for key pair generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    pub prime_bits: u32,
    pub public_exponent: u64,
    pub primality_rounds: u32,
    pub max_attempts: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            prime_bits: DEFAULT_PRIME_BITS,
            public_exponent: PUBLIC_EXPONENT,
            primality_rounds: DEFAULT_PRIMALITY_ROUNDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl KeyGenConfig {
    pub fn with_prime_bits(mut self, bits: u32) -> Self {
        self.prime_bits = bits;
        self
    }

    pub fn with_public_exponent(mut self, e: u64) -> Self {
        self.public_exponent = e;
        self
    }

    pub fn with_primality_rounds(mut self, rounds: u32) -> Self {
        self.primality_rounds = rounds;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Check the parameters before any entropy is consumed
    pub fn validate(&self) -> RsaResult<()> {
        if self.prime_bits < 2 {
            return Err(RsaError::InvalidBitLength(self.prime_bits));
        }
        if self.public_exponent < 3 || self.public_exponent % 2 == 0 {
            return Err(RsaError::InvalidConfig("public exponent must be odd and at least 3"));
        }
        if self.primality_rounds == 0 {
            return Err(RsaError::InvalidConfig("primality rounds must be non-zero"));
        }
        if self.max_attempts == 0 {
            return Err(RsaError::InvalidConfig("max attempts must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeyGenConfig::default();
        assert_eq!(config.prime_bits, 2048);
        assert_eq!(config.public_exponent, 65537);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = KeyGenConfig::default()
            .with_prime_bits(512)
            .with_public_exponent(17)
            .with_primality_rounds(8)
            .with_max_attempts(3);
        assert_eq!(config.prime_bits, 512);
        assert_eq!(config.public_exponent, 17);
        assert_eq!(config.primality_rounds, 8);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_invalid_bit_length() {
        let config = KeyGenConfig::default().with_prime_bits(1);
        assert!(matches!(config.validate(), Err(RsaError::InvalidBitLength(1))));
    }

    #[test]
    fn test_invalid_exponent() {
        for e in [0, 1, 2, 65536] {
            let config = KeyGenConfig::default().with_public_exponent(e);
            assert!(matches!(config.validate(), Err(RsaError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_zero_rounds_and_attempts() {
        let config = KeyGenConfig::default().with_primality_rounds(0);
        assert!(config.validate().is_err());

        let config = KeyGenConfig::default().with_max_attempts(0);
        assert!(config.validate().is_err());
    }
}
