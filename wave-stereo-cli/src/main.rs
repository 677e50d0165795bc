mod cli;

use anyhow::Context;
use clap::Parser;
use wave_stereo_core::{ConversionConfig, Converter, WaveFileConverter, WaveInfo};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);
    let mut config = if cli.strict {
        ConversionConfig::strict()
    } else {
        ConversionConfig::default()
    };
    if let Commands::ToMono { role: Some(role), .. } = cli.command {
        config = config.with_role(role);
    }
    let files = WaveFileConverter::new(Converter::new(config)).with_reports(cli.report);

    match cli.command {
        Commands::ToMono { input, output, .. } => {
            let info = files
                .stereo_file_to_mono_default(&input, &output)
                .with_context(|| format!("failed to convert {} to mono", input.display()))?;
            print_summary(&output.display().to_string(), &info);
        }
        Commands::ToStereo { left, right, output } => {
            let info = files
                .mono_files_to_stereo(&left, &right, &output)
                .with_context(|| format!("failed to join {} and {}", left.display(), right.display()))?;
            print_summary(&output.display().to_string(), &info);
        }
        Commands::Encode { input, output } => {
            let info = files
                .encode_dual_mono_file(&input, &output)
                .with_context(|| format!("failed to encode {}", input.display()))?;
            print_summary(&output.display().to_string(), &info);
        }
        Commands::Decode { input, output } => {
            let info = files
                .decode_dual_mono_file(&input, &output)
                .with_context(|| format!("failed to decode {}", input.display()))?;
            print_summary(&output.display().to_string(), &info);
        }
        Commands::Info { input, json } => {
            let info = files
                .inspect_file(&input)
                .with_context(|| format!("failed to inspect {}", input.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_summary(&input.display().to_string(), &info);
            }
        }
    }

    Ok(())
}

fn print_summary(label: &str, info: &WaveInfo) {
    println!(
        "{label}: {} channel(s), {} Hz, {}-bit, {} frames ({:.3} s)",
        info.channels, info.sample_rate, info.bits_per_sample, info.frame_count, info.duration_secs
    );
}
