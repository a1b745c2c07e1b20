//! Pluggable cipher interface
//!
//! Applications that select ciphers at runtime (for example a password
//! database choosing its payload cipher from a registry) only need four
//! things from a cipher: a stable identifier, a human-readable name, and a
//! way to wrap a byte sink or source in encryption or decryption.
//! [`CipherEngine`] captures exactly that, with no dependency on any host
//! type.
//!
//! [`Salsa20Engine`] is stateless. Every opened stream owns a fresh
//! [`Salsa20Stream`] built from the key and nonce passed to that call, so
//! no cipher state is ever shared between two messages.

mod io;

use std::io::{Read, Write};

use tracing::debug;

use crate::error::CipherError;
use crate::stream::Salsa20Stream;

pub use io::{DecryptReader, EncryptWriter};

/// 16-byte identifier under which a cipher is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherId(pub [u8; 16]);

/// Identifier of the Salsa20 engine.
pub const SALSA20_CIPHER_ID: CipherId = CipherId([
    0xA6, 0xFF, 0x30, 0x81, 0xE9, 0x6E, 0x4F, 0xBA, 0xAE, 0xDC, 0x98, 0xB3, 0xEA, 0x55, 0xFF, 0xFF,
]);

/// A stream cipher that a host can register and drive by identifier.
pub trait CipherEngine: Send + Sync {
    /// Stable identifier of the cipher.
    fn cipher_id(&self) -> CipherId;

    /// Name suitable for display in a user interface.
    fn display_name(&self) -> &str;

    /// Wraps `sink` so that everything written is encrypted first.
    fn encrypt_stream<'a>(
        &self,
        sink: Box<dyn Write + 'a>,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Box<dyn Write + 'a>, CipherError>;

    /// Wraps `source` so that everything read is decrypted.
    fn decrypt_stream<'a>(
        &self,
        source: Box<dyn Read + 'a>,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Box<dyn Read + 'a>, CipherError>;
}

/// Salsa20/20 with a 32-byte key and an 8-byte nonce.
#[derive(Debug, Default, Clone, Copy)]
pub struct Salsa20Engine;

impl CipherEngine for Salsa20Engine {
    fn cipher_id(&self) -> CipherId {
        SALSA20_CIPHER_ID
    }

    fn display_name(&self) -> &str {
        "Salsa20 Cipher"
    }

    fn encrypt_stream<'a>(
        &self,
        sink: Box<dyn Write + 'a>,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Box<dyn Write + 'a>, CipherError> {
        let cipher = Salsa20Stream::new(key, nonce)?;
        debug!("opened salsa20 encrypt stream");

        Ok(Box::new(EncryptWriter::new(sink, cipher)))
    }

    fn decrypt_stream<'a>(
        &self,
        source: Box<dyn Read + 'a>,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Box<dyn Read + 'a>, CipherError> {
        let cipher = Salsa20Stream::new(key, nonce)?;
        debug!("opened salsa20 decrypt stream");

        Ok(Box::new(DecryptReader::new(source, cipher)))
    }
}
