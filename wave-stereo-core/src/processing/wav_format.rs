//! Canonical 44-byte WAVE/PCM header codec.
//!
//! Only the canonical layout is understood: a `fmt ` chunk of exactly 16
//! bytes immediately followed by the `data` chunk. Output headers are always
//! produced by [`build_header`]; nothing is copied from an input header.

use crate::models::error::WaveError;

/// Size of the canonical WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// PCM format code in the `fmt ` chunk.
pub const PCM_FORMAT: u16 = 1;

/// Size of the PCM `fmt ` chunk body.
pub const PCM_FMT_SIZE: u32 = 16;

/// Parsed fields of a canonical WAV header.
///
/// The four tags are validated during [`WaveHeader::parse`] and are not
/// stored. `byte_rate` and `block_align` hold what the input declared; use
/// [`WaveHeader::frame_size`] for the value derived from channels and depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    pub chunk_size: u32,
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WaveHeader {
    /// Parse the first 44 bytes of `bytes`.
    ///
    /// Layout:
    /// ```text
    /// [0-3]    "RIFF"
    /// [4-7]    chunk size (36 + data_size)
    /// [8-11]   "WAVE"
    /// [12-15]  "fmt "
    /// [16-19]  16 (PCM format chunk size)
    /// [20-21]  1 (PCM format code)
    /// [22-23]  channels
    /// [24-27]  sample_rate
    /// [28-31]  byte_rate
    /// [32-33]  block_align
    /// [34-35]  bits_per_sample
    /// [36-39]  "data"
    /// [40-43]  data_size
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, WaveError> {
        if bytes.len() < WAV_HEADER_SIZE {
            return Err(WaveError::MalformedHeader(format!(
                "need {} bytes, got {}",
                WAV_HEADER_SIZE,
                bytes.len()
            )));
        }

        expect_tag(bytes, 0, b"RIFF")?;
        expect_tag(bytes, 8, b"WAVE")?;
        expect_tag(bytes, 12, b"fmt ")?;
        expect_tag(bytes, 36, b"data")?;

        let header = Self {
            chunk_size: read_u32(bytes, 4),
            fmt_size: read_u32(bytes, 16),
            audio_format: read_u16(bytes, 20),
            channels: read_u16(bytes, 22),
            sample_rate: read_u32(bytes, 24),
            byte_rate: read_u32(bytes, 28),
            block_align: read_u16(bytes, 32),
            bits_per_sample: read_u16(bytes, 34),
            data_size: read_u32(bytes, 40),
        };

        if header.fmt_size != PCM_FMT_SIZE {
            return Err(WaveError::MalformedHeader(format!(
                "fmt chunk is {} bytes, only the 16-byte PCM layout is supported",
                header.fmt_size
            )));
        }
        if header.audio_format != PCM_FORMAT {
            return Err(WaveError::MalformedHeader(format!(
                "audio format {} is not integer PCM",
                header.audio_format
            )));
        }

        let frame_size = header.frame_size();
        let byte_rate = header.sample_rate as u64 * frame_size as u64;
        if header.block_align as u32 != frame_size || header.byte_rate as u64 != byte_rate {
            log::warn!(
                "input header declares block_align={} byte_rate={}, derived values are {} and {}",
                header.block_align,
                header.byte_rate,
                frame_size,
                byte_rate
            );
        }

        Ok(header)
    }

    /// Bytes per sample, derived from `bits_per_sample`.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame, derived from channels and bit depth.
    ///
    /// Widened to `u32`: 65535 channels of 32-bit samples do not fit `u16`.
    pub fn frame_size(&self) -> u32 {
        self.channels as u32 * self.bytes_per_sample() as u32
    }

    /// Number of whole frames in the declared data chunk.
    pub fn frame_count(&self) -> u32 {
        match self.frame_size() {
            0 => 0,
            size => self.data_size / size,
        }
    }

    /// Playback length of the declared data chunk.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Serialize these fields through [`build_header`], recomputing every
    /// derived field.
    pub fn to_bytes(&self) -> Result<[u8; WAV_HEADER_SIZE], WaveError> {
        build_header(self.channels, self.bytes_per_sample(), self.sample_rate, self.frame_count())
    }
}

/// Build a canonical header for `frame_count` frames.
///
/// `data_size = frame_count * channels * bytes_per_sample`, and the chunk
/// size, byte rate and block align are derived from it. Fails when the data
/// chunk would not fit the 32-bit size field.
pub fn build_header(
    channels: u16,
    bytes_per_sample: u16,
    sample_rate: u32,
    frame_count: u32,
) -> Result<[u8; WAV_HEADER_SIZE], WaveError> {
    let frame_size = channels as u64 * bytes_per_sample as u64;
    let data_size = frame_count as u64 * frame_size;
    let chunk_size =
        u32::try_from(data_size + 36).map_err(|_| WaveError::DataTooLarge { bytes: data_size })?;

    let overflow = || {
        WaveError::MalformedHeader(format!(
            "{channels} channel(s) of {bytes_per_sample} byte(s) at {sample_rate} Hz overflow the header fields"
        ))
    };
    let block_align = u16::try_from(frame_size).map_err(|_| overflow())?;
    let bits_per_sample = bytes_per_sample.checked_mul(8).ok_or_else(overflow)?;
    let byte_rate = u32::try_from(sample_rate as u64 * frame_size).map_err(|_| overflow())?;

    let mut header = [0u8; WAV_HEADER_SIZE];
    header[0..4].copy_from_slice(b"RIFF");
    write_u32(&mut header, 4, chunk_size);
    header[8..12].copy_from_slice(b"WAVE");
    header[12..16].copy_from_slice(b"fmt ");
    write_u32(&mut header, 16, PCM_FMT_SIZE);
    write_u16(&mut header, 20, PCM_FORMAT);
    write_u16(&mut header, 22, channels);
    write_u32(&mut header, 24, sample_rate);
    write_u32(&mut header, 28, byte_rate);
    write_u16(&mut header, 32, block_align);
    write_u16(&mut header, 34, bits_per_sample);
    header[36..40].copy_from_slice(b"data");
    // chunk_size fitting u32 bounds data_size too
    write_u32(&mut header, 40, chunk_size - 36);

    Ok(header)
}

fn expect_tag(bytes: &[u8], offset: usize, tag: &[u8; 4]) -> Result<(), WaveError> {
    let found = &bytes[offset..offset + 4];
    if found != tag {
        return Err(WaveError::MalformedHeader(format!(
            "expected {:?} at offset {}, found {:?}",
            String::from_utf8_lossy(tag),
            offset,
            String::from_utf8_lossy(found)
        )));
    }
    Ok(())
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

fn write_u16(bytes: &mut [u8], offset: usize, value: u16) {
    bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn write_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
