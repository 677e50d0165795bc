//! Per-frame channel arithmetic for 16-bit PCM.
//!
//! Stereo data arrives interleaved `[L0, R0, L1, R1, ...]`. It is grouped
//! into `(left, right)` frames, collapsed to mono by a [`ChannelRole`], or
//! rebuilt from two mono sequences.

use crate::models::channel_role::ChannelRole;
use crate::models::error::WaveError;

/// One stereo frame: `(left, right)`.
pub type StereoFrame = (i16, i16);

/// Group interleaved samples into stereo frames.
///
/// `channels` is the channel count declared by the source header and must be
/// 2. The sample count must be even.
pub fn frames_from_interleaved(samples: &[i16], channels: u16) -> Result<Vec<StereoFrame>, WaveError> {
    if channels != 2 {
        return Err(WaveError::ChannelCount {
            expected: 2,
            found: channels,
        });
    }
    if samples.len() % 2 != 0 {
        return Err(WaveError::PartialFrame {
            data_size: (samples.len() * 2) as u32,
            block_align: 4,
        });
    }

    Ok(samples.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}

/// Flatten frames back to `[L0, R0, L1, R1, ...]`.
pub fn interleave_frames(frames: &[StereoFrame]) -> Vec<i16> {
    let mut samples = Vec::with_capacity(frames.len() * 2);
    for &(left, right) in frames {
        samples.push(left);
        samples.push(right);
    }
    samples
}

/// Collapse one frame to a mono sample.
///
/// Sums and differences are formed in `i32`, so they never overflow, and are
/// halved with `/`, which truncates toward zero: `(-3 + 0) / 2 == -1`. The
/// halved result always fits back into `i16`.
pub fn collapse_frame((left, right): StereoFrame, role: ChannelRole) -> i16 {
    match role {
        ChannelRole::Left => left,
        ChannelRole::Right => right,
        ChannelRole::HalfSum => ((left as i32 + right as i32) / 2) as i16,
        ChannelRole::HalfDifference => ((left as i32 - right as i32) / 2) as i16,
    }
}

/// Collapse every frame with the same role.
pub fn stereo_to_mono(frames: &[StereoFrame], role: ChannelRole) -> Vec<i16> {
    frames.iter().map(|&frame| collapse_frame(frame, role)).collect()
}

/// Zip two mono sequences into stereo frames, position by position.
pub fn mono_pair_to_stereo(left: &[i16], right: &[i16]) -> Result<Vec<StereoFrame>, WaveError> {
    if left.len() != right.len() {
        return Err(WaveError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    Ok(left.iter().copied().zip(right.iter().copied()).collect())
}
