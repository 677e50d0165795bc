//! # wave-stereo-core
//!
//! Stereo/mono conversion for canonical 16-bit PCM WAVE buffers, plus the
//! dual-mono 32-bit encoding that packs two 16-bit channels into one word so
//! a mono player hears the high half and a stereo-aware decoder recovers both.
//!
//! All conversions are pure functions from complete file contents to
//! complete file contents. The `storage` module is a thin file front end.
//!
//! ## Architecture
//!
//! ```text
//! wave-stereo-core (this crate)
//! ├── models/       ← WaveError, ChannelRole, ConversionConfig, WaveInfo, ConversionReport
//! ├── processing/   ← WAV header codec, sample codec, channel transforms, dual-mono, Converter
//! └── storage/      ← WaveFileConverter, JSON report sidecars
//! ```

pub mod models;
pub mod processing;
pub mod storage;

// Re-export key types at crate root for convenience.
pub use models::channel_role::ChannelRole;
pub use models::config::ConversionConfig;
pub use models::error::WaveError;
pub use models::report::{ConversionReport, Operation, WaveInfo};
pub use processing::channel_transform::StereoFrame;
pub use processing::converter::Converter;
pub use processing::wav_format::{build_header, WaveHeader, WAV_HEADER_SIZE};
pub use storage::wave_file::{read_wave_file, write_wave_file, WaveFileConverter};

/// Collapse a 16-bit stereo WAV buffer to mono with default tolerances.
pub fn stereo_to_mono(buffer: &[u8], role: ChannelRole) -> Result<Vec<u8>, WaveError> {
    Converter::default().stereo_to_mono(buffer, role)
}

/// Interleave two 16-bit mono WAV buffers into one stereo buffer.
pub fn mono_pair_to_stereo(left: &[u8], right: &[u8]) -> Result<Vec<u8>, WaveError> {
    Converter::default().mono_pair_to_stereo(left, right)
}

/// Pack a 16-bit stereo WAV buffer into a 32-bit dual-mono buffer.
pub fn encode_dual_mono(buffer: &[u8]) -> Result<Vec<u8>, WaveError> {
    Converter::default().encode_dual_mono(buffer)
}

/// Unpack a 32-bit dual-mono WAV buffer into a 16-bit stereo buffer.
pub fn decode_dual_mono(buffer: &[u8]) -> Result<Vec<u8>, WaveError> {
    Converter::default().decode_dual_mono(buffer)
}

/// Validate a WAV buffer and summarize its format.
pub fn inspect(buffer: &[u8]) -> Result<WaveInfo, WaveError> {
    Converter::default().inspect(buffer)
}
