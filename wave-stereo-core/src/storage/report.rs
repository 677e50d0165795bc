use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::models::error::WaveError;
use crate::models::report::ConversionReport;

/// Sidecar path for a converted file: `mix.wav` becomes `mix.report.json`.
pub fn report_path(output_path: &Path) -> PathBuf {
    output_path.with_extension("report.json")
}

/// Write `report` next to `output_path` and return the sidecar path.
pub fn write_report(report: &ConversionReport, output_path: &Path) -> Result<PathBuf, WaveError> {
    let path = report_path(output_path);
    let mut json = serde_json::to_vec_pretty(report).map_err(|e| storage_error("serialize", &path, e))?;
    json.push(b'\n');
    fs::write(&path, json).map_err(|e| storage_error("write", &path, e))?;
    Ok(path)
}

/// Load the sidecar written for `output_path`.
pub fn read_report(output_path: &Path) -> Result<ConversionReport, WaveError> {
    let path = report_path(output_path);
    let json = fs::read(&path).map_err(|e| storage_error("read", &path, e))?;
    serde_json::from_slice(&json).map_err(|e| storage_error("parse", &path, e))
}

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> WaveError {
    WaveError::StorageError(format!("failed to {action} report {}: {err}", path.display()))
}

/// SHA-256 hex digest of a buffer.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    hex_encode(&digest)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
