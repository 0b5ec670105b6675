use std::process;

use anyhow::Context;
use raw_rsa::rsa::{generate_keys, import_public_key, DEFAULT_PRIME_BITS};
use raw_rsa::util::{format_duration, measure, ScopeTimer};

const MESSAGE: &str = "Hello, world";

fn run() -> anyhow::Result<()> {
    eprintln!("Generating RSA key pair ({}-bit primes)...", DEFAULT_PRIME_BITS);
    let (private_key, keygen_time) = measure(|| generate_keys(DEFAULT_PRIME_BITS));
    let private_key = private_key.context("failed to generate RSA key pair")?;
    let public_key = import_public_key(private_key.n().clone(), private_key.e().clone());
    eprintln!(
        "Modulus: {} bits (generated in {})",
        public_key.bit_length(),
        format_duration(keygen_time)
    );

    let ciphertext = public_key
        .encrypt(MESSAGE.as_bytes())
        .context("failed to encrypt message")?;
    eprintln!("Ciphertext: {}", hex::encode(ciphertext.to_bytes_be()));

    let decrypted = private_key
        .decrypt(&ciphertext)
        .context("failed to decrypt ciphertext")?;

    println!("{}", String::from_utf8_lossy(&decrypted));
    Ok(())
}

fn main() {
    let timer = ScopeTimer::new("time");

    if let Err(e) = run() {
        timer.finish();
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
