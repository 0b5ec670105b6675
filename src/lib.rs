//! Textbook RSA over raw modular exponentiation.
//!
//! Keys are generated from two random primes, messages are read as big-endian
//! integers and transformed with `m^e mod n` / `c^d mod n`. There is no padding,
//! so this is for demonstration only.

pub mod rsa;
pub mod util;
