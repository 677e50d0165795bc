use std::fs;
use std::path::Path;

use crate::models::channel_role::ChannelRole;
use crate::models::error::WaveError;
use crate::models::report::{ConversionReport, Operation, WaveInfo};
use crate::processing::converter::Converter;
use crate::processing::wav_format::WaveHeader;

use super::report::{sha256_hex, write_report};

/// Read a whole WAV file into memory.
pub fn read_wave_file(path: &Path) -> Result<Vec<u8>, WaveError> {
    fs::read(path).map_err(|e| WaveError::StorageError(format!("failed to read {}: {}", path.display(), e)))
}

/// Write a complete WAV buffer, creating parent directories as needed.
pub fn write_wave_file(path: &Path, bytes: &[u8]) -> Result<(), WaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| WaveError::StorageError(format!("failed to create directory: {}", e)))?;
    }
    fs::write(path, bytes).map_err(|e| WaveError::StorageError(format!("failed to write {}: {}", path.display(), e)))
}

/// File-to-file front end for a [`Converter`].
///
/// Each call reads its inputs, converts in memory, and only then creates the
/// output file, so a rejected input never leaves a partial output behind.
#[derive(Debug, Clone, Default)]
pub struct WaveFileConverter {
    converter: Converter,
    write_reports: bool,
}

impl WaveFileConverter {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            write_reports: false,
        }
    }

    /// Also write a `<output>.report.json` sidecar after each conversion.
    pub fn with_reports(mut self, enabled: bool) -> Self {
        self.write_reports = enabled;
        self
    }

    pub fn inspect_file(&self, input: &Path) -> Result<WaveInfo, WaveError> {
        self.converter.inspect(&read_wave_file(input)?)
    }

    pub fn stereo_file_to_mono(&self, input: &Path, output: &Path, role: ChannelRole) -> Result<WaveInfo, WaveError> {
        let bytes = self.converter.stereo_to_mono(&read_wave_file(input)?, role)?;
        self.finish(Operation::StereoToMono, Some(role), &[input], output, &bytes)
    }

    /// [`Self::stereo_file_to_mono`] with the role from the converter's config.
    pub fn stereo_file_to_mono_default(&self, input: &Path, output: &Path) -> Result<WaveInfo, WaveError> {
        let role = self.converter.config().role;
        self.stereo_file_to_mono(input, output, role)
    }

    pub fn mono_files_to_stereo(&self, left: &Path, right: &Path, output: &Path) -> Result<WaveInfo, WaveError> {
        let left_bytes = read_wave_file(left)?;
        let right_bytes = read_wave_file(right)?;
        let bytes = self.converter.mono_pair_to_stereo(&left_bytes, &right_bytes)?;
        self.finish(Operation::MonoPairToStereo, None, &[left, right], output, &bytes)
    }

    pub fn encode_dual_mono_file(&self, input: &Path, output: &Path) -> Result<WaveInfo, WaveError> {
        let bytes = self.converter.encode_dual_mono(&read_wave_file(input)?)?;
        self.finish(Operation::EncodeDualMono, None, &[input], output, &bytes)
    }

    pub fn decode_dual_mono_file(&self, input: &Path, output: &Path) -> Result<WaveInfo, WaveError> {
        let bytes = self.converter.decode_dual_mono(&read_wave_file(input)?)?;
        self.finish(Operation::DecodeDualMono, None, &[input], output, &bytes)
    }

    fn finish(
        &self,
        operation: Operation,
        role: Option<ChannelRole>,
        inputs: &[&Path],
        output: &Path,
        bytes: &[u8],
    ) -> Result<WaveInfo, WaveError> {
        let info = WaveInfo::from(&WaveHeader::parse(bytes)?);
        write_wave_file(output, bytes)?;
        log::info!(
            "wrote {} ({} channel(s), {}-bit, {} frames)",
            output.display(),
            info.channels,
            info.bits_per_sample,
            info.frame_count
        );

        if self.write_reports {
            let report = ConversionReport::new(
                operation,
                role,
                inputs.iter().map(|p| p.display().to_string()).collect(),
                &output.display().to_string(),
                info,
                &sha256_hex(bytes),
            );
            let path = write_report(&report, output)?;
            log::debug!("wrote report {}", path.display());
        }

        Ok(info)
    }
}
