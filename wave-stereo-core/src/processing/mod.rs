pub mod channel_transform;
pub mod converter;
pub mod dual_mono;
pub mod sample_codec;
pub mod wav_format;
