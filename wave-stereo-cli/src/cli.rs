//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wave_stereo_core::ChannelRole;

/// Convert canonical PCM WAVE files between stereo, mono and dual-mono.
#[derive(Parser, Debug)]
#[command(name = "wave-stereo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Reject trailing bytes after the data chunk and mono pairs with
    /// different sample rates
    #[arg(long, global = true)]
    pub strict: bool,

    /// Write a `<output>.report.json` sidecar next to each output file
    #[arg(long, global = true)]
    pub report: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Collapse a 16-bit stereo file to mono
    ToMono {
        /// Stereo input file
        input: PathBuf,

        /// Mono output file
        output: PathBuf,

        /// Channel to keep: left, right, half-sum or half-difference
        /// [default: half-sum]
        #[arg(short, long)]
        role: Option<ChannelRole>,
    },

    /// Interleave two 16-bit mono files into one stereo file
    ToStereo {
        /// Mono file for the left channel
        left: PathBuf,

        /// Mono file for the right channel
        right: PathBuf,

        /// Stereo output file
        output: PathBuf,
    },

    /// Pack a 16-bit stereo file into a 32-bit dual-mono file
    Encode {
        /// Stereo input file
        input: PathBuf,

        /// Dual-mono output file
        output: PathBuf,
    },

    /// Unpack a 32-bit dual-mono file into a 16-bit stereo file
    Decode {
        /// Dual-mono input file
        input: PathBuf,

        /// Stereo output file
        output: PathBuf,
    },

    /// Print the format of a WAV file
    Info {
        /// File to inspect
        input: PathBuf,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
