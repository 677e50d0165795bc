use crate::models::channel_role::ChannelRole;
use crate::models::config::ConversionConfig;
use crate::models::error::WaveError;
use crate::models::report::WaveInfo;
use crate::processing::channel_transform::{self, StereoFrame};
use crate::processing::dual_mono;
use crate::processing::sample_codec;
use crate::processing::wav_format::{build_header, WaveHeader, WAV_HEADER_SIZE};

/// Buffer-to-buffer WAVE conversions.
///
/// Every operation takes complete file contents (header + data) and returns
/// complete file contents. Inputs are fully validated before any sample is
/// transformed:
/// ```text
/// parse header → check channels/depth → check data chunk → decode samples
///     → transform → build header → header + encoded samples
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Validate a buffer and summarize its format.
    ///
    /// Accepts the formats some operation can consume: mono or stereo, 16 or
    /// 32 bits per sample.
    pub fn inspect(&self, buffer: &[u8]) -> Result<WaveInfo, WaveError> {
        let header = WaveHeader::parse(buffer)?;
        require_supported(&header)?;
        self.data_chunk(buffer, &header)?;
        Ok(WaveInfo::from(&header))
    }

    /// Collapse a 16-bit stereo buffer to mono using the configured role.
    pub fn stereo_to_mono_default(&self, buffer: &[u8]) -> Result<Vec<u8>, WaveError> {
        self.stereo_to_mono(buffer, self.config.role)
    }

    /// Collapse a 16-bit stereo buffer to a 16-bit mono buffer.
    pub fn stereo_to_mono(&self, buffer: &[u8], role: ChannelRole) -> Result<Vec<u8>, WaveError> {
        let header = WaveHeader::parse(buffer)?;
        require_pcm(&header, 2, 16)?;
        let frames = self.read_stereo_frames(buffer, &header)?;

        let mono = channel_transform::stereo_to_mono(&frames, role);
        log::debug!(
            "stereo_to_mono: {} frames at {} Hz, role {}",
            mono.len(),
            header.sample_rate,
            role
        );

        let out_header = build_header(1, 2, header.sample_rate, frame_total(mono.len(), 2)?)?;
        Ok(assemble(&out_header, sample_codec::encode_i16(&mono)))
    }

    /// Interleave two 16-bit mono buffers into one stereo buffer.
    ///
    /// The output takes the left input's sample rate; the right header only
    /// contributes its samples.
    pub fn mono_pair_to_stereo(&self, left: &[u8], right: &[u8]) -> Result<Vec<u8>, WaveError> {
        let left_header = WaveHeader::parse(left)?;
        let right_header = WaveHeader::parse(right)?;
        require_pcm(&left_header, 1, 16)?;
        require_pcm(&right_header, 1, 16)?;

        if left_header.sample_rate != right_header.sample_rate {
            if !self.config.allow_sample_rate_mismatch {
                return Err(WaveError::SampleRateMismatch {
                    left: left_header.sample_rate,
                    right: right_header.sample_rate,
                });
            }
            log::warn!(
                "pairing {} Hz left with {} Hz right, output uses {} Hz",
                left_header.sample_rate,
                right_header.sample_rate,
                left_header.sample_rate
            );
        }

        let left_samples = self.read_samples::<i16>(left, &left_header)?;
        let right_samples = self.read_samples::<i16>(right, &right_header)?;
        let frames = channel_transform::mono_pair_to_stereo(&left_samples, &right_samples)?;
        log::debug!(
            "mono_pair_to_stereo: {} frames at {} Hz",
            frames.len(),
            left_header.sample_rate
        );

        let out_header = build_header(2, 2, left_header.sample_rate, frame_total(frames.len(), 4)?)?;
        let samples = channel_transform::interleave_frames(&frames);
        Ok(assemble(&out_header, sample_codec::encode_i16(&samples)))
    }

    /// Pack a 16-bit stereo buffer into a 32-bit mono buffer.
    pub fn encode_dual_mono(&self, buffer: &[u8]) -> Result<Vec<u8>, WaveError> {
        let header = WaveHeader::parse(buffer)?;
        require_format(&header, 2, 16)?;
        let frames = self.read_stereo_frames(buffer, &header)?;

        let words = dual_mono::encode(&frames);
        log::debug!("encode_dual_mono: {} frames at {} Hz", words.len(), header.sample_rate);

        let out_header = build_header(1, 4, header.sample_rate, frame_total(words.len(), 4)?)?;
        Ok(assemble(&out_header, sample_codec::encode_u32(&words)))
    }

    /// Unpack a 32-bit mono buffer into a 16-bit stereo buffer.
    pub fn decode_dual_mono(&self, buffer: &[u8]) -> Result<Vec<u8>, WaveError> {
        let header = WaveHeader::parse(buffer)?;
        require_format(&header, 1, 32)?;
        let words = self.read_samples::<u32>(buffer, &header)?;

        let frames = dual_mono::decode(&words);
        log::debug!("decode_dual_mono: {} frames at {} Hz", frames.len(), header.sample_rate);

        let out_header = build_header(2, 2, header.sample_rate, frame_total(frames.len(), 4)?)?;
        let samples = channel_transform::interleave_frames(&frames);
        Ok(assemble(&out_header, sample_codec::encode_i16(&samples)))
    }

    fn read_stereo_frames(&self, buffer: &[u8], header: &WaveHeader) -> Result<Vec<StereoFrame>, WaveError> {
        let samples = self.read_samples::<i16>(buffer, header)?;
        channel_transform::frames_from_interleaved(&samples, header.channels)
    }

    fn read_samples<T: sample_codec::PcmWord>(&self, buffer: &[u8], header: &WaveHeader) -> Result<Vec<T>, WaveError> {
        let data = self.data_chunk(buffer, header)?;
        let count = header.frame_count() as usize * header.channels as usize;
        sample_codec::decode(data, count)
    }

    /// The declared data chunk, checked against the bytes actually present.
    ///
    /// Requires a non-zero frame size; callers check channels and depth first.
    fn data_chunk<'a>(&self, buffer: &'a [u8], header: &WaveHeader) -> Result<&'a [u8], WaveError> {
        let frame_size = header.frame_size();
        if header.data_size % frame_size != 0 {
            return Err(WaveError::PartialFrame {
                data_size: header.data_size,
                block_align: frame_size,
            });
        }

        let declared = header.data_size as usize;
        let available = buffer.len() - WAV_HEADER_SIZE;
        if available < declared {
            return Err(WaveError::TruncatedData { declared, available });
        }
        if available > declared {
            let trailing = available - declared;
            if !self.config.allow_trailing_bytes {
                return Err(WaveError::MalformedHeader(format!(
                    "{trailing} byte(s) follow the data chunk"
                )));
            }
            log::warn!("ignoring {} byte(s) after the data chunk", trailing);
        }

        Ok(&buffer[WAV_HEADER_SIZE..WAV_HEADER_SIZE + declared])
    }
}

/// Any channel layout and depth handled by at least one operation.
fn require_supported(header: &WaveHeader) -> Result<(), WaveError> {
    if !matches!(header.channels, 1 | 2) {
        return Err(WaveError::ChannelCount {
            expected: header.channels.clamp(1, 2),
            found: header.channels,
        });
    }
    if !matches!(header.bits_per_sample, 16 | 32) {
        return Err(WaveError::BitDepth {
            expected: if header.bits_per_sample > 16 { 32 } else { 16 },
            found: header.bits_per_sample,
        });
    }
    Ok(())
}

/// Channel-transform precondition: separate channel and depth errors.
fn require_pcm(header: &WaveHeader, channels: u16, bits: u16) -> Result<(), WaveError> {
    if header.channels != channels {
        return Err(WaveError::ChannelCount {
            expected: channels,
            found: header.channels,
        });
    }
    if header.bits_per_sample != bits {
        return Err(WaveError::BitDepth {
            expected: bits,
            found: header.bits_per_sample,
        });
    }
    Ok(())
}

/// Dual-mono precondition: channels and depth are checked as one format.
fn require_format(header: &WaveHeader, channels: u16, bits: u16) -> Result<(), WaveError> {
    if header.channels != channels || header.bits_per_sample != bits {
        return Err(WaveError::FormatMismatch {
            expected_channels: channels,
            expected_bits: bits,
            channels: header.channels,
            bits: header.bits_per_sample,
        });
    }
    Ok(())
}

fn frame_total(frames: usize, frame_size: u64) -> Result<u32, WaveError> {
    u32::try_from(frames).map_err(|_| WaveError::DataTooLarge {
        bytes: frames as u64 * frame_size,
    })
}

fn assemble(header: &[u8; WAV_HEADER_SIZE], data: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + data.len());
    out.extend_from_slice(header);
    out.extend(data);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_i16(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let frames = samples.len() as u32 / channels as u32;
        assemble(
            &build_header(channels, 2, sample_rate, frames).unwrap(),
            sample_codec::encode_i16(samples),
        )
    }

    fn wav_u32(sample_rate: u32, words: &[u32]) -> Vec<u8> {
        assemble(
            &build_header(1, 4, sample_rate, words.len() as u32).unwrap(),
            sample_codec::encode_u32(words),
        )
    }

    fn samples_i16(buffer: &[u8]) -> Vec<i16> {
        let header = WaveHeader::parse(buffer).unwrap();
        sample_codec::decode_i16(&buffer[WAV_HEADER_SIZE..], (header.data_size / 2) as usize).unwrap()
    }

    #[test]
    fn stereo_to_mono_each_role() {
        let converter = Converter::default();
        let input = wav_i16(2, 44100, &[100, 50, -3, 0]);

        let expected = [
            (ChannelRole::Left, vec![100, -3]),
            (ChannelRole::Right, vec![50, 0]),
            (ChannelRole::HalfSum, vec![75, -1]),
            (ChannelRole::HalfDifference, vec![25, -1]),
        ];
        for (role, samples) in expected {
            let output = converter.stereo_to_mono(&input, role).unwrap();
            let header = WaveHeader::parse(&output).unwrap();
            assert_eq!(header.channels, 1);
            assert_eq!(header.sample_rate, 44100);
            assert_eq!(header.byte_rate, 88200);
            assert_eq!(samples_i16(&output), samples, "role {role}");
        }
    }

    #[test]
    fn default_role_comes_from_config() {
        let input = wav_i16(2, 8000, &[10, 2]);
        let right = Converter::new(ConversionConfig::default().with_role(ChannelRole::Right));
        assert_eq!(samples_i16(&right.stereo_to_mono_default(&input).unwrap()), vec![2]);
        assert_eq!(samples_i16(&Converter::default().stereo_to_mono_default(&input).unwrap()), vec![6]);
    }

    #[test]
    fn stereo_to_mono_rejects_mono_input() {
        let input = wav_i16(1, 8000, &[1, 2]);
        assert_eq!(
            Converter::default().stereo_to_mono(&input, ChannelRole::Left),
            Err(WaveError::ChannelCount { expected: 2, found: 1 })
        );
    }

    #[test]
    fn stereo_to_mono_rejects_32_bit_input() {
        let input = assemble(&build_header(2, 4, 8000, 1).unwrap(), vec![0; 8]);
        assert_eq!(
            Converter::default().stereo_to_mono(&input, ChannelRole::Left),
            Err(WaveError::BitDepth { expected: 16, found: 32 })
        );
    }

    #[test]
    fn truncated_data_is_rejected() {
        let mut input = wav_i16(2, 8000, &[1, 2, 3, 4]);
        input.truncate(input.len() - 1);
        assert_eq!(
            Converter::default().stereo_to_mono(&input, ChannelRole::Left),
            Err(WaveError::TruncatedData {
                declared: 8,
                available: 7
            })
        );
    }

    #[test]
    fn partial_frame_is_rejected() {
        let mut input = wav_i16(2, 8000, &[1, 2, 3, 4]);
        input[40..44].copy_from_slice(&6u32.to_le_bytes());
        assert_eq!(
            Converter::default().encode_dual_mono(&input),
            Err(WaveError::PartialFrame {
                data_size: 6,
                block_align: 4
            })
        );
    }

    #[test]
    fn trailing_bytes_follow_config() {
        let mut input = wav_i16(2, 8000, &[1, 2]);
        input.extend_from_slice(b"LIST\0\0\0\0");

        let output = Converter::default().stereo_to_mono(&input, ChannelRole::Left).unwrap();
        assert_eq!(samples_i16(&output), vec![1]);

        let strict = Converter::new(ConversionConfig::strict());
        assert!(matches!(
            strict.stereo_to_mono(&input, ChannelRole::Left),
            Err(WaveError::MalformedHeader(_))
        ));
    }

    #[test]
    fn mono_pair_interleaves() {
        let left = wav_i16(1, 22050, &[1, 2, 3]);
        let right = wav_i16(1, 22050, &[-1, -2, -3]);

        let output = Converter::default().mono_pair_to_stereo(&left, &right).unwrap();
        let header = WaveHeader::parse(&output).unwrap();
        assert_eq!(header.channels, 2);
        assert_eq!(header.block_align, 4);
        assert_eq!(header.frame_count(), 3);
        assert_eq!(samples_i16(&output), vec![1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn mono_pair_length_mismatch() {
        let left = wav_i16(1, 8000, &[0; 10]);
        let right = wav_i16(1, 8000, &[0; 8]);
        assert_eq!(
            Converter::default().mono_pair_to_stereo(&left, &right),
            Err(WaveError::LengthMismatch { left: 10, right: 8 })
        );
    }

    #[test]
    fn mono_pair_requires_mono_inputs() {
        let left = wav_i16(1, 8000, &[0; 2]);
        let right = wav_i16(2, 8000, &[0; 2]);
        assert_eq!(
            Converter::default().mono_pair_to_stereo(&left, &right),
            Err(WaveError::ChannelCount { expected: 1, found: 2 })
        );
    }

    #[test]
    fn mono_pair_sample_rate_mismatch() {
        let left = wav_i16(1, 8000, &[1]);
        let right = wav_i16(1, 16000, &[2]);

        let output = Converter::default().mono_pair_to_stereo(&left, &right).unwrap();
        assert_eq!(WaveHeader::parse(&output).unwrap().sample_rate, 8000);

        assert_eq!(
            Converter::new(ConversionConfig::strict()).mono_pair_to_stereo(&left, &right),
            Err(WaveError::SampleRateMismatch {
                left: 8000,
                right: 16000
            })
        );
    }

    #[test]
    fn encode_packs_words() {
        let input = wav_i16(2, 48000, &[0x1234, -1]);
        let output = Converter::default().encode_dual_mono(&input).unwrap();

        let header = WaveHeader::parse(&output).unwrap();
        assert_eq!(header.channels, 1);
        assert_eq!(header.bits_per_sample, 32);
        assert_eq!(header.byte_rate, 192000);
        assert_eq!(header.data_size, 4);
        assert_eq!(
            sample_codec::decode_u32(&output[WAV_HEADER_SIZE..], 1).unwrap(),
            vec![0x1234_FFFF]
        );
    }

    #[test]
    fn encode_requires_16_bit_stereo() {
        let input = wav_i16(1, 8000, &[1, 2]);
        assert_eq!(
            Converter::default().encode_dual_mono(&input),
            Err(WaveError::FormatMismatch {
                expected_channels: 2,
                expected_bits: 16,
                channels: 1,
                bits: 16
            })
        );
    }

    #[test]
    fn decode_unpacks_words() {
        let input = wav_u32(16000, &[0x1234_FFFF, 0x8000_0001]);
        let output = Converter::default().decode_dual_mono(&input).unwrap();

        let header = WaveHeader::parse(&output).unwrap();
        assert_eq!(header.channels, 2);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.frame_count(), 2);
        assert_eq!(samples_i16(&output), vec![0x1234, -1, i16::MIN, 1]);
    }

    #[test]
    fn decode_requires_32_bit_mono() {
        let input = wav_i16(2, 8000, &[1, 2]);
        assert!(matches!(
            Converter::default().decode_dual_mono(&input),
            Err(WaveError::FormatMismatch { .. })
        ));
    }

    #[test]
    fn dual_mono_round_trip_is_bit_exact() {
        let input = wav_i16(2, 44100, &[0, 0, i16::MIN, i16::MAX, -1, 1, 1234, -4321]);
        let converter = Converter::default();
        let encoded = converter.encode_dual_mono(&input).unwrap();
        assert_eq!(converter.decode_dual_mono(&encoded).unwrap(), input);
    }

    #[test]
    fn zero_frames_everywhere() {
        let converter = Converter::default();
        let stereo = wav_i16(2, 8000, &[]);
        let mono = wav_i16(1, 8000, &[]);

        for output in [
            converter.stereo_to_mono(&stereo, ChannelRole::HalfSum).unwrap(),
            converter.mono_pair_to_stereo(&mono, &mono).unwrap(),
            converter.encode_dual_mono(&stereo).unwrap(),
            converter.decode_dual_mono(&wav_u32(8000, &[])).unwrap(),
        ] {
            assert_eq!(output.len(), WAV_HEADER_SIZE);
            let header = WaveHeader::parse(&output).unwrap();
            assert_eq!(header.data_size, 0);
            assert_eq!(header.chunk_size, 36);
        }
    }

    #[test]
    fn inspect_reports_format() {
        let info = Converter::default().inspect(&wav_i16(2, 8000, &[0; 8])).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.frame_count, 4);
        assert_eq!(info.data_size, 16);
    }

    #[test]
    fn inspect_rejects_zero_channels() {
        let input = build_header(0, 2, 8000, 0).unwrap();
        assert_eq!(
            Converter::default().inspect(&input),
            Err(WaveError::ChannelCount { expected: 1, found: 0 })
        );
    }

    #[test]
    fn inspect_rejects_multichannel_layouts() {
        let mut input = wav_i16(2, 8000, &[0; 4]);
        input[22..24].copy_from_slice(&3u16.to_le_bytes());
        assert_eq!(
            Converter::default().inspect(&input),
            Err(WaveError::ChannelCount { expected: 2, found: 3 })
        );

        // 32769 channels of 16 bits is a 65538-byte frame; 8 data bytes hold none.
        input[22..24].copy_from_slice(&32769u16.to_le_bytes());
        assert_eq!(
            Converter::default().inspect(&input),
            Err(WaveError::ChannelCount { expected: 2, found: 32769 })
        );
    }

    #[test]
    fn inspect_rejects_unsupported_depth() {
        let mut input = wav_i16(1, 8000, &[0; 6]);
        input[34..36].copy_from_slice(&24u16.to_le_bytes());
        assert_eq!(
            Converter::default().inspect(&input),
            Err(WaveError::BitDepth { expected: 32, found: 24 })
        );
    }

    #[test]
    fn inspect_accepts_dual_mono() {
        let info = Converter::default().inspect(&wav_u32(8000, &[1, 2, 3])).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.bits_per_sample, 32);
        assert_eq!(info.frame_count, 3);
    }
}
