//! Demonstrates encrypting a short buffer and checking it against single-block S-AES.

use saes_core::{encrypt, SaesKey};
use saes_runtime::SaesCipher;

fn main() {
    let key = SaesKey(0xA73B);
    let cipher = SaesCipher::new(key);

    let mut buffer = *b"teaching";
    let expected_first = encrypt(u16::from_be_bytes([buffer[0], buffer[1]]), key.0);

    cipher
        .encrypt_in_place(&mut buffer)
        .expect("buffer length is a multiple of two");
    assert_eq!(u16::from_be_bytes([buffer[0], buffer[1]]), expected_first);

    cipher
        .decrypt_in_place(&mut buffer)
        .expect("buffer length is a multiple of two");
    assert_eq!(&buffer, b"teaching");

    println!("example succeeded; buffer round-trips through S-AES");
}
