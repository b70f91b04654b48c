//! Seal a short message with a fresh random nonce, once with this crate and
//! once with the RustCrypto `aes-gcm` crate, and print both results in hex.
//!
//! Run with `cargo run --example seal_demo`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use rand::RngCore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = hex::decode("000102030405060708090A0B0C0E0F101112131415161718191A1B1C1E1F2021")?;
    let plaintext = b"sample text. this text is test text.";

    let mut nonce = [0u8; gcmseal::NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce);

    let ours = gcmseal::seal(plaintext, &key, &nonce, &[])?;

    let reference = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| format!("reference key setup failed: {}", e))?
        .encrypt(aes_gcm::Nonce::from_slice(&nonce), plaintext.as_ref())
        .map_err(|e| format!("reference encryption failed: {}", e))?;

    println!("nonce:     {}", hex::encode(nonce));
    println!("gcmseal:   {}", hex::encode(&ours));
    println!("aes-gcm:   {}", hex::encode(&reference));
    println!("match:     {}", ours == reference);

    let opened = gcmseal::open(&ours, &key, &nonce, &[])?;
    println!("opened:    {}", String::from_utf8_lossy(&opened));

    Ok(())
}
