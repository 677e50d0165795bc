//! Dual-mono 32-bit packing.
//!
//! Each stereo frame becomes one 32-bit word:
//! ```text
//! bits 31..16   first sample  (raw 16-bit two's complement)
//! bits 15..0    second sample (raw 16-bit two's complement)
//! ```
//! A mono player reading the word as a 32-bit sample hears the high half.
//! Feeding `(half-sum, half-difference)` frames makes that the mono mix.
//!
//! [`decode_word`] is the exact bitwise inverse of [`encode_frame`]. It does
//! not recombine sum and difference into left and right.

use super::channel_transform::StereoFrame;

const HIGH_MASK: u32 = 0xFFFF_0000;
const LOW_MASK: u32 = 0x0000_FFFF;

pub fn encode_frame((high, low): StereoFrame) -> u32 {
    (((high as u16 as u32) << 16) & HIGH_MASK) | (low as u16 as u32 & LOW_MASK)
}

pub fn decode_word(word: u32) -> StereoFrame {
    ((word >> 16) as u16 as i16, (word & LOW_MASK) as u16 as i16)
}

pub fn encode(frames: &[StereoFrame]) -> Vec<u32> {
    frames.iter().map(|&frame| encode_frame(frame)).collect()
}

pub fn decode(words: &[u32]) -> Vec<StereoFrame> {
    words.iter().map(|&word| decode_word(word)).collect()
}
