// Console rendering of time- and frequency-domain sequences.
//
// Everything here is read-only over the transformed data; the FFT
// itself never depends on how its output is shown.

use num_complex::Complex64;

/// Magnitude of every bin.
pub fn magnitudes(data: &[Complex64]) -> Vec<f64> {
    data.iter().map(|value| value.norm()).collect()
}

/// Print up to `limit` samples as `[i] re + im i` rows.
pub fn print_samples(label: &str, data: &[Complex64], limit: usize) {
    println!("{}:", label);
    for (i, value) in data.iter().take(limit).enumerate() {
        println!("[{:2}] {:10.6} + {:10.6}i", i, value.re, value.im);
    }
    if data.len() > limit {
        println!("... ({} samples total)", data.len());
    }
    println!();
}

/// Print up to `limit` spectrum bins with magnitude and phase.
pub fn print_spectrum(label: &str, data: &[Complex64], limit: usize) {
    println!("{}:", label);
    for (i, value) in data.iter().take(limit).enumerate() {
        println!(
            "[{:2}] {:10.6} + {:10.6}i  (mag: {:8.6}, phase: {:7.2} deg)",
            i,
            value.re,
            value.im,
            value.norm(),
            value.arg().to_degrees()
        );
    }
    if data.len() > limit {
        println!("... ({} bins total)", data.len());
    }
    println!();
}

/// Indices of the bins whose magnitude is at least `ratio` times the
/// peak magnitude. Returns nothing for an all-zero spectrum.
pub fn dominant_bins(data: &[Complex64], ratio: f64) -> Vec<usize> {
    let peak = data.iter().map(|value| value.norm()).fold(0.0, f64::max);
    if peak == 0.0 {
        return Vec::new();
    }

    data.iter()
        .enumerate()
        .filter(|(_, value)| value.norm() >= ratio * peak)
        .map(|(i, _)| i)
        .collect()
}
