pub mod report;
pub mod wave_file;
