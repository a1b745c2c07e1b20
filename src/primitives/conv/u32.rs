//! Little-endian `u32` reads and writes at a byte offset.

use crate::error::CipherError;

#[cfg(not(feature = "speed"))]
/// Reads 4 bytes at `offset` as a little-endian word.
///
/// Fails with [`CipherError::OutOfBounds`] when fewer than 4 bytes remain.
pub fn u32_from_le_bytes(buf: &[u8], offset: usize) -> Result<u32, CipherError> {
    CipherError::check_region(offset, 4, buf.len())?;

    let mut word = [0u8; 4];
    word.copy_from_slice(&buf[offset..offset + 4]);

    Ok(u32::from_le_bytes(word))
}

#[cfg(feature = "speed")]
/// Reads 4 bytes at `offset` as a little-endian word (shift-and-or fast path).
pub fn u32_from_le_bytes(buf: &[u8], offset: usize) -> Result<u32, CipherError> {
    CipherError::check_region(offset, 4, buf.len())?;

    Ok((buf[offset] as u32)
        | ((buf[offset + 1] as u32) << 8)
        | ((buf[offset + 2] as u32) << 16)
        | ((buf[offset + 3] as u32) << 24))
}

#[cfg(not(feature = "speed"))]
/// Writes `value` as 4 little-endian bytes at `offset`.
///
/// Fails with [`CipherError::OutOfBounds`] when fewer than 4 bytes remain;
/// the buffer is left untouched in that case.
pub fn u32_to_le_bytes(value: u32, buf: &mut [u8], offset: usize) -> Result<(), CipherError> {
    CipherError::check_region(offset, 4, buf.len())?;

    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());

    Ok(())
}

#[cfg(feature = "speed")]
/// Writes `value` as 4 little-endian bytes at `offset` (fast path).
pub fn u32_to_le_bytes(value: u32, buf: &mut [u8], offset: usize) -> Result<(), CipherError> {
    CipherError::check_region(offset, 4, buf.len())?;

    buf[offset] = value as u8;
    buf[offset + 1] = (value >> 8) as u8;
    buf[offset + 2] = (value >> 16) as u8;
    buf[offset + 3] = (value >> 24) as u8;

    Ok(())
}
