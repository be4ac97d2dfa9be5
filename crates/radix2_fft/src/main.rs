// This file is a place to exercise the FFT entry points by hand.

use ndarray::Array1;
use num_complex::Complex64;
use radix2_fft::{fft, ifft};
use std::f64::consts::PI;

/// Which test sequence to use.
const TEST: usize = 1;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
  #[arg(long)]
  test_number: Option<usize>,
}

/// Takes the FFT of a test sequence, followed by the inverse FFT.
/// Outputs the original sequence, the FFT, and the IFFT of the FFT.
fn main() {
  let args = Args::parse();
  let test = match args.test_number {
    Some(n) => n,
    None => TEST,
  };

  let mut test_data = match test {
    1 => harmonic_sequence(),
    2 => ramp_sequence(),
    3 => constant_sequence(),
    _ => unimplemented!(),
  };
  println!("Original:  {:#?}", test_data);

  fft(test_data.as_slice_mut().unwrap()).unwrap();
  println!("FT:        {:#?}", test_data);

  ifft(test_data.as_slice_mut().unwrap()).unwrap();
  println!("IFT of FT: {:#?}", test_data);
}

/// The kth harmonic, which should transform to a single nonzero bin.
fn harmonic_sequence() -> Array1<Complex64> {
  let n = 8;
  let k = 1f64;

  Array1::from_iter((0..n).map(|i| {
    let phase = 2f64 * PI * k * (i as f64) / (n as f64);
    Complex64::new(phase.cos(), phase.sin())
  }))
}

fn ramp_sequence() -> Array1<Complex64> {
  Array1::from_iter((1..=8).map(|i| Complex64::new(i as f64, 0f64)))
}

fn constant_sequence() -> Array1<Complex64> {
  Array1::from_iter((0..8).map(|_| Complex64::new(1f64, 0f64)))
}
