use std::io::{Cursor, Read, Write};

use salsa20_stream::engine::{DecryptReader, EncryptWriter, SALSA20_CIPHER_ID};
use salsa20_stream::{CipherEngine, ErrorKind, Salsa20Engine, Salsa20Stream};

const KEY: [u8; 32] = [0x24; 32];
const NONCE: [u8; 8] = [0x42; 8];

fn message() -> Vec<u8> {
    (0..5000u32).map(|i| (i % 251) as u8).collect()
}

#[test]
fn test_engine_identity() {
    let engine = Salsa20Engine;

    assert_eq!(engine.cipher_id(), SALSA20_CIPHER_ID);
    assert_eq!(
        engine.cipher_id().0,
        [
            0xA6, 0xFF, 0x30, 0x81, 0xE9, 0x6E, 0x4F, 0xBA, 0xAE, 0xDC, 0x98, 0xB3, 0xEA, 0x55,
            0xFF, 0xFF
        ]
    );
    assert_eq!(engine.display_name(), "Salsa20 Cipher");
}

#[test]
fn test_engine_usable_as_trait_object() {
    let engines: Vec<Box<dyn CipherEngine>> = vec![Box::new(Salsa20Engine)];

    let found = engines
        .iter()
        .find(|e| e.cipher_id() == SALSA20_CIPHER_ID)
        .unwrap();
    assert_eq!(found.display_name(), "Salsa20 Cipher");
}

#[test]
fn test_encrypt_stream_matches_transform() {
    let plaintext = message();
    let expected = Salsa20Stream::new(&KEY, &NONCE)
        .unwrap()
        .transform_final(&plaintext)
        .unwrap();

    let mut sink = Vec::new();
    {
        let mut writer = Salsa20Engine
            .encrypt_stream(Box::new(&mut sink), &KEY, &NONCE)
            .unwrap();

        // Uneven chunks must not disturb the keystream.
        for chunk in plaintext.chunks(37) {
            writer.write_all(chunk).unwrap();
        }
        writer.flush().unwrap();
    }

    assert_eq!(sink, expected);
}

#[test]
fn test_decrypt_stream_roundtrip() {
    let plaintext = message();
    let ciphertext = Salsa20Stream::new(&KEY, &NONCE)
        .unwrap()
        .transform_final(&plaintext)
        .unwrap();

    let mut reader = Salsa20Engine
        .decrypt_stream(Box::new(Cursor::new(ciphertext)), &KEY, &NONCE)
        .unwrap();

    let mut recovered = Vec::new();
    let mut buf = [0u8; 100];
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        recovered.extend_from_slice(&buf[..n]);
    }

    assert_eq!(recovered, plaintext);
}

#[test]
fn test_engine_validates_key_and_nonce() {
    let engine = Salsa20Engine;

    let err = engine
        .encrypt_stream(Box::new(Vec::new()), &[0u8; 16], &NONCE)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = engine
        .decrypt_stream(Box::new(Cursor::new(Vec::new())), &KEY, &[0u8; 7])
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_writer_finish_returns_inner() {
    let cipher = Salsa20Stream::new(&KEY, &NONCE).unwrap();
    let mut writer = EncryptWriter::new(Vec::new(), cipher);

    writer.write_all(b"hello").unwrap();
    let sink = writer.finish().unwrap();

    let mut plain = sink.clone();
    Salsa20Stream::new(&KEY, &NONCE)
        .unwrap()
        .transform_in_place(&mut plain)
        .unwrap();
    assert_eq!(plain, b"hello");
}

#[test]
fn test_reader_into_inner() {
    let cipher = Salsa20Stream::new(&KEY, &NONCE).unwrap();
    let mut reader = DecryptReader::new(Cursor::new(vec![0u8; 10]), cipher);

    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).unwrap();

    let inner = reader.into_inner();
    assert_eq!(inner.position(), 4);
}
