use thiserror::Error;

/// Errors that can occur while converting WAVE buffers.
///
/// Every operation validates its inputs before transforming anything, so an
/// error always means no output was produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WaveError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("expected {expected} channel(s), found {found}")]
    ChannelCount { expected: u16, found: u16 },

    #[error("expected {expected}-bit samples, found {found}-bit")]
    BitDepth { expected: u16, found: u16 },

    #[error("data chunk declares {declared} bytes but only {available} are present")]
    TruncatedData { declared: usize, available: usize },

    #[error("data chunk of {data_size} bytes is not a whole number of {block_align}-byte frames")]
    PartialFrame { data_size: u32, block_align: u32 },

    #[error("output data chunk of {bytes} bytes exceeds the 32-bit WAVE size limit")]
    DataTooLarge { bytes: u64 },

    #[error("left input has {left} samples, right input has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("expected {expected_channels}-channel {expected_bits}-bit input, found {channels}-channel {bits}-bit")]
    FormatMismatch {
        expected_channels: u16,
        expected_bits: u16,
        channels: u16,
        bits: u16,
    },

    #[error("left input is {left} Hz, right input is {right} Hz")]
    SampleRateMismatch { left: u32, right: u32 },

    #[error("storage error: {0}")]
    StorageError(String),
}
