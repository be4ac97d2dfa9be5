// Test-signal generators that feed the FFT.

use clap::ValueEnum;
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

/// Harmonics and amplitudes summed by the multi-sine waveform.
const MULTI_SINE_HARMONICS: [(f64, f64); 3] = [(1.0, 1.0), (3.0, 0.5), (5.0, 0.25)];

/// Chirp sweep range, in cycles over the sequence.
const CHIRP_START_CYCLES: f64 = 0.1;
const CHIRP_END_CYCLES: f64 = 5.0;

/// The waveforms the generator can produce. All except `ComplexTone`
/// are real signals with zero imaginary parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Waveform {
    Cosine,
    Sine,
    MultiSine,
    Impulse,
    Step,
    Square,
    Noise,
    Chirp,
    ComplexTone,
}

/// Produce `size` samples of the requested waveform. `cycles` is the
/// number of periods over the whole sequence, i.e. the frequency bin
/// a pure tone should land in.
pub fn generate(waveform: Waveform, size: usize, cycles: f64) -> Vec<Complex64> {
    match waveform {
        Waveform::Cosine => cosine(size, cycles),
        Waveform::Sine => sine(size, cycles),
        Waveform::MultiSine => multi_sine(size, cycles),
        Waveform::Impulse => impulse(size),
        Waveform::Step => step(size),
        Waveform::Square => square(size, cycles),
        Waveform::Noise => noise(size),
        Waveform::Chirp => chirp(size),
        Waveform::ComplexTone => complex_tone(size, cycles, cycles / 2.0),
    }
}

pub fn cosine(size: usize, cycles: f64) -> Vec<Complex64> {
    (0..size)
        .map(|i| Complex64::new(sample_angle(i, size, cycles).cos(), 0.0))
        .collect()
}

pub fn sine(size: usize, cycles: f64) -> Vec<Complex64> {
    (0..size)
        .map(|i| Complex64::new(sample_angle(i, size, cycles).sin(), 0.0))
        .collect()
}

/// Sum of sine harmonics at decreasing amplitudes, with `cycles` as
/// the fundamental.
pub fn multi_sine(size: usize, cycles: f64) -> Vec<Complex64> {
    (0..size)
        .map(|i| {
            let value: f64 = MULTI_SINE_HARMONICS
                .iter()
                .map(|(harmonic, amplitude)| {
                    amplitude * sample_angle(i, size, cycles * harmonic).sin()
                })
                .sum();
            Complex64::new(value, 0.0)
        })
        .collect()
}

/// Unit impulse at the first sample; its spectrum is flat.
pub fn impulse(size: usize) -> Vec<Complex64> {
    let mut samples = vec![Complex64::new(0.0, 0.0); size];
    if size > 0 {
        samples[0] = Complex64::new(1.0, 0.0);
    }
    samples
}

/// Zero for the first half of the sequence, one for the second.
pub fn step(size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|i| {
            let level = if i < size / 2 { 0.0 } else { 1.0 };
            Complex64::new(level, 0.0)
        })
        .collect()
}

/// Square wave derived from the sign of the matching sine.
pub fn square(size: usize, cycles: f64) -> Vec<Complex64> {
    (0..size)
        .map(|i| {
            let level = if sample_angle(i, size, cycles).sin() >= 0.0 {
                1.0
            } else {
                -1.0
            };
            Complex64::new(level, 0.0)
        })
        .collect()
}

/// White noise, uniform in [-1, 1].
pub fn noise(size: usize) -> Vec<Complex64> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| Complex64::new(rng.random_range(-1.0..1.0), 0.0))
        .collect()
}

/// Linear frequency sweep across the sequence.
pub fn chirp(size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            let cycles = CHIRP_START_CYCLES + (CHIRP_END_CYCLES - CHIRP_START_CYCLES) * t;
            Complex64::new((2.0 * PI * cycles * t * size as f64).cos(), 0.0)
        })
        .collect()
}

/// A tone with independent real and imaginary frequencies: cosine in
/// the real part, sine in the imaginary part.
pub fn complex_tone(size: usize, real_cycles: f64, imag_cycles: f64) -> Vec<Complex64> {
    (0..size)
        .map(|i| {
            Complex64::new(
                sample_angle(i, size, real_cycles).cos(),
                sample_angle(i, size, imag_cycles).sin(),
            )
        })
        .collect()
}

fn sample_angle(index: usize, size: usize, cycles: f64) -> f64 {
    2.0 * PI * cycles * (index as f64) / (size as f64)
}
