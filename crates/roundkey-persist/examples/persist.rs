//! Saves an AES-192 instance's round keys as JSON and restores it without the key.

use aes_core::{Aes192, BlockCipher};
use roundkey_persist::{codec, extract, inject_inferred};

fn main() -> roundkey_persist::Result<()> {
    let key = *b"example key of 24 bytes!";
    let cipher = Aes192::new(&key);

    let json = codec::encode(&extract(&cipher)?)?;
    println!("{}", String::from_utf8_lossy(&json));

    let restored = inject_inferred(&codec::decode(&json)?)?;
    let block = *b"sixteen byte msg";
    assert_eq!(restored.encrypt_block(&block), cipher.encrypt_block(&block));
    println!("restored {} instance encrypts identically", restored.shape());
    Ok(())
}
