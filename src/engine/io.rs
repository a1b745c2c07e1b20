//! `std::io` adapters that run data through a [`Salsa20Stream`].

use std::io::{self, Read, Write};

use zeroize::Zeroizing;

use crate::error::CipherError;
use crate::stream::Salsa20Stream;

/// Size of the scratch buffer used by [`EncryptWriter`].
const CHUNK_SIZE: usize = 4096;

fn to_io(err: CipherError) -> io::Error {
    io::Error::other(err)
}

/// Encrypts everything written to it and forwards the ciphertext to `W`.
pub struct EncryptWriter<W: Write> {
    inner: W,
    cipher: Salsa20Stream,
    scratch: Zeroizing<Vec<u8>>,
}

impl<W: Write> EncryptWriter<W> {
    pub fn new(inner: W, cipher: Salsa20Stream) -> Self {
        Self {
            inner,
            cipher,
            scratch: Zeroizing::new(vec![0u8; CHUNK_SIZE]),
        }
    }

    /// Flushes the inner writer, wipes the cipher and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        self.cipher.dispose();

        Ok(self.inner)
    }
}

impl<W: Write> Write for EncryptWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = buf.len().min(CHUNK_SIZE);
        let out = &mut self.scratch[..len];

        self.cipher.transform(&buf[..len], out).map_err(to_io)?;

        // The keystream has already advanced, so the whole chunk must land.
        self.inner.write_all(out)?;

        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Decrypts everything read from `R`.
pub struct DecryptReader<R: Read> {
    inner: R,
    cipher: Salsa20Stream,
}

impl<R: Read> DecryptReader<R> {
    pub fn new(inner: R, cipher: Salsa20Stream) -> Self {
        Self { inner, cipher }
    }

    /// Wipes the cipher and returns the reader.
    pub fn into_inner(mut self) -> R {
        self.cipher.dispose();
        self.inner
    }
}

impl<R: Read> Read for DecryptReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;

        self.cipher
            .transform_in_place(&mut buf[..n])
            .map_err(to_io)?;

        Ok(n)
    }
}
