// CLI that generates test signals and inspects their spectra
// using radix2_fft.

use clap::{Args, Parser, Subcommand};
use log::info;

use signal_analysis::signals::{self, Waveform};
use signal_analysis::spectrum;

// setup command line args

#[derive(Parser)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,
    /// Number of samples to generate; must be a power of two.
    #[clap(long, default_value_t = 8)]
    size: usize,
}

#[derive(Subcommand)]
pub enum Command {
    Analyze(SignalArgs),
    RoundTrip(SignalArgs),
}

#[derive(Debug, Args)]
pub struct SignalArgs {
    #[clap(long, value_enum, default_value = "cosine")]
    waveform: Waveform,
    #[clap(long, default_value_t = 1.0)]
    cycles: f64,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Command::Analyze(signal) => analyze(args.size, &signal),
        Command::RoundTrip(signal) => round_trip(args.size, &signal),
    }
}

/// Transform a generated signal and report its spectrum.
fn analyze(size: usize, signal: &SignalArgs) -> Result<(), String> {
    let mut samples = signals::generate(signal.waveform, size, signal.cycles);
    spectrum::print_samples("Input signal", &samples, 10);

    info!(
        "computing {}-point transform of {:?} signal",
        size, signal.waveform
    );
    radix2_fft::fft(&mut samples).map_err(|e| e.to_string())?;

    spectrum::print_spectrum("Spectrum", &samples, 10);
    println!(
        "Dominant bins: {:?}",
        spectrum::dominant_bins(&samples, 0.5)
    );

    Ok(())
}

/// Transform and inverse-transform a generated signal, reporting the
/// worst per-sample reconstruction error.
fn round_trip(size: usize, signal: &SignalArgs) -> Result<(), String> {
    let original = signals::generate(signal.waveform, size, signal.cycles);
    let mut samples = original.clone();

    info!("round-tripping {} samples through fft and ifft", size);
    radix2_fft::fft(&mut samples).map_err(|e| e.to_string())?;
    radix2_fft::ifft(&mut samples).map_err(|e| e.to_string())?;

    let worst = original
        .iter()
        .zip(&samples)
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max);

    spectrum::print_samples("Reconstructed signal", &samples, 10);
    println!("Max reconstruction error: {:e}", worst);

    Ok(())
}
