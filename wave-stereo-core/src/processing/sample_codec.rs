//! Little-endian sample buffer codec.
//!
//! Converts raw data-chunk bytes into fixed-width integer samples and back.
//! Two widths are used: signed 16-bit PCM and the unsigned 32-bit words of
//! the dual-mono encoding.

use crate::models::error::WaveError;

/// A fixed-width integer sample stored little-endian on the wire.
pub trait PcmWord: Copy {
    /// Width of one sample in bytes.
    const WIDTH: usize;

    fn from_le_slice(bytes: &[u8]) -> Self;

    fn extend_le(self, out: &mut Vec<u8>);
}

impl PcmWord for i16 {
    const WIDTH: usize = 2;

    fn from_le_slice(bytes: &[u8]) -> Self {
        i16::from_le_bytes([bytes[0], bytes[1]])
    }

    fn extend_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl PcmWord for u32 {
    const WIDTH: usize = 4;

    fn from_le_slice(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn extend_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

/// Decode the first `count` samples of `bytes`.
///
/// Fails with [`WaveError::TruncatedData`] when fewer than
/// `count * T::WIDTH` bytes are available. Extra bytes are ignored.
pub fn decode<T: PcmWord>(bytes: &[u8], count: usize) -> Result<Vec<T>, WaveError> {
    let needed = count.checked_mul(T::WIDTH).ok_or(WaveError::TruncatedData {
        declared: usize::MAX,
        available: bytes.len(),
    })?;
    if bytes.len() < needed {
        return Err(WaveError::TruncatedData {
            declared: needed,
            available: bytes.len(),
        });
    }

    Ok(bytes[..needed].chunks_exact(T::WIDTH).map(T::from_le_slice).collect())
}

/// Encode samples as contiguous little-endian bytes.
pub fn encode<T: PcmWord>(samples: &[T]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * T::WIDTH);
    for &sample in samples {
        sample.extend_le(&mut data);
    }
    data
}

pub fn decode_i16(bytes: &[u8], count: usize) -> Result<Vec<i16>, WaveError> {
    decode(bytes, count)
}

pub fn encode_i16(samples: &[i16]) -> Vec<u8> {
    encode(samples)
}

pub fn decode_u32(bytes: &[u8], count: usize) -> Result<Vec<u32>, WaveError> {
    decode(bytes, count)
}

pub fn encode_u32(words: &[u32]) -> Vec<u8> {
    encode(words)
}
