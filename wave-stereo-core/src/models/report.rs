use serde::{Deserialize, Serialize};

use super::channel_role::ChannelRole;
use crate::processing::wav_format::WaveHeader;

/// Which conversion produced an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    StereoToMono,
    MonoPairToStereo,
    EncodeDualMono,
    DecodeDualMono,
}

/// Summary of a validated WAV buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub frame_count: u32,
    pub data_size: u32,
    pub duration_secs: f64,
}

impl From<&WaveHeader> for WaveInfo {
    fn from(header: &WaveHeader) -> Self {
        Self {
            channels: header.channels,
            sample_rate: header.sample_rate,
            bits_per_sample: header.bits_per_sample,
            frame_count: header.frame_count(),
            data_size: header.data_size,
            duration_secs: header.duration_secs(),
        }
    }
}

/// Sidecar describing one file conversion.
///
/// Serializable for JSON export next to the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ChannelRole>,
    pub inputs: Vec<String>,
    pub output: String,
    pub format: WaveInfo,
    pub checksum: String,
    pub created_at: String,
}

impl ConversionReport {
    pub fn new(
        operation: Operation,
        role: Option<ChannelRole>,
        inputs: Vec<String>,
        output: &str,
        format: WaveInfo,
        checksum: &str,
    ) -> Self {
        Self {
            operation,
            role,
            inputs,
            output: output.to_string(),
            format,
            checksum: checksum.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::wav_format::build_header;

    #[test]
    fn info_from_header() {
        let header = WaveHeader::parse(&build_header(1, 4, 8000, 800).unwrap()).unwrap();
        let info = WaveInfo::from(&header);
        assert_eq!(info.channels, 1);
        assert_eq!(info.bits_per_sample, 32);
        assert_eq!(info.frame_count, 800);
        assert_eq!(info.data_size, 3200);
        assert!((info.duration_secs - 0.1).abs() < 1e-9);
    }

    #[test]
    fn report_json_shape() {
        let header = WaveHeader::parse(&build_header(1, 2, 8000, 0).unwrap()).unwrap();
        let report = ConversionReport::new(
            Operation::StereoToMono,
            Some(ChannelRole::HalfSum),
            vec!["in.wav".into()],
            "out.wav",
            WaveInfo::from(&header),
            "abc",
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["operation"], "stereo-to-mono");
        assert_eq!(json["role"], "half-sum");
        assert_eq!(json["format"]["channels"], 1);
        assert!(chrono::DateTime::parse_from_rfc3339(json["created_at"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn report_omits_missing_role() {
        let header = WaveHeader::parse(&build_header(2, 2, 8000, 0).unwrap()).unwrap();
        let report = ConversionReport::new(
            Operation::DecodeDualMono,
            None,
            vec!["in.wav".into()],
            "out.wav",
            WaveInfo::from(&header),
            "abc",
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("role"));
        let parsed: ConversionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
