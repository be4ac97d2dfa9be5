// unit tests

use super::*;

const TOLERANCE: f64 = 1e-9;

/// Reverses the low `bits` bits of `value` by explicit bit extraction.
/// This is the ground-truth formula the permuter's carry-propagation
/// counter is checked against.
fn reverse_bits(value: usize, bits: u32) -> usize {
  let mut reversed = 0;
  for b in 0..bits {
    if value & (1 << b) != 0 {
      reversed |= 1 << (bits - 1 - b);
    }
  }
  reversed
}

/// Naive O(N^2) DFT straight from the definition, used as an oracle
/// that shares no code with the implementation under test.
fn reference_dft(input: &[Complex64]) -> Vec<Complex64> {
  let n = input.len();
  (0..n)
    .map(|k| {
      let mut sum = Complex64::new(0.0, 0.0);
      for (t, &sample) in input.iter().enumerate() {
        let angle = -2.0 * PI * ((k * t) as f64) / (n as f64);
        sum += sample * Complex64::from_polar(1.0, angle);
      }
      sum
    })
    .collect()
}

/// A deterministic complex sequence with nonzero real and imaginary
/// parts in every entry.
fn sample_sequence(n: usize) -> Vec<Complex64> {
  (0..n)
    .map(|i| Complex64::new((i as f64 * 0.37).sin() * 2.0, (i as f64 * 0.91).cos()))
    .collect()
}

fn assert_sequences_close(actual: &[Complex64], expected: &[Complex64], tolerance: f64) {
  assert_eq!(actual.len(), expected.len());
  for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
    assert!(
      (a - e).norm() <= tolerance,
      "entry {} differs: {} vs {}",
      i,
      a,
      e
    );
  }
}

#[test]
fn permute_matches_direct_bit_reversal() {
  for n in [1usize, 2, 4, 8, 16, 32, 64] {
    let original: Vec<Complex64> = (0..n).map(|i| Complex64::new(i as f64, 0.0)).collect();
    let mut permuted = original.clone();
    permute(&mut permuted);

    let bits = n.trailing_zeros();
    for i in 0..n {
      assert_eq!(
        permuted[i],
        original[reverse_bits(i, bits)],
        "index {} of length {}",
        i,
        n
      );
    }
  }
}

#[test]
fn permute_twice_restores_original_order() {
  let original = sample_sequence(16);
  let mut data = original.clone();

  permute(&mut data);
  permute(&mut data);

  assert_eq!(data, original);
}

#[test]
fn fft_rejects_lengths_that_are_not_powers_of_two() {
  for n in [0usize, 3, 6, 12] {
    let mut data = vec![Complex64::new(1.0, 0.0); n];
    assert_eq!(fft(&mut data), Err(FftError::InvalidLength(n)));
    assert_eq!(ifft(&mut data), Err(FftError::InvalidLength(n)));
  }
}

#[test]
fn single_element_sequence_is_unchanged() {
  let mut data = vec![Complex64::new(3.5, -1.25)];
  fft(&mut data).unwrap();
  assert_eq!(data, vec![Complex64::new(3.5, -1.25)]);
}

#[test]
fn constant_signal_concentrates_at_dc() {
  let mut data = vec![Complex64::new(1.0, 0.0); 4];
  fft(&mut data).unwrap();

  let expected = [
    Complex64::new(4.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
  ];
  assert_sequences_close(&data, &expected, TOLERANCE);
}

#[test]
fn impulse_has_flat_spectrum() {
  let mut data = vec![Complex64::new(0.0, 0.0); 8];
  data[0] = Complex64::new(1.0, 0.0);
  fft(&mut data).unwrap();

  let expected = vec![Complex64::new(1.0, 0.0); 8];
  assert_sequences_close(&data, &expected, TOLERANCE);
}

#[test]
fn real_cosine_peaks_at_symmetric_bin_pair() {
  let n = 8;
  let mut data: Vec<Complex64> = (0..n)
    .map(|i| Complex64::new((2.0 * PI * (i as f64) / (n as f64)).cos(), 0.0))
    .collect();
  fft(&mut data).unwrap();

  // a real single-tone input lands in a Hermitian pair of bins,
  // each holding half the total amplitude
  for (bin, value) in data.iter().enumerate() {
    let expected = if bin == 1 || bin == n - 1 { 4.0 } else { 0.0 };
    assert!(
      (value.norm() - expected).abs() <= TOLERANCE,
      "bin {} has magnitude {}",
      bin,
      value.norm()
    );
  }
}

#[test]
fn transform_is_linear() {
  let n = 16;
  let a = sample_sequence(n);
  let b: Vec<Complex64> = (0..n)
    .map(|i| Complex64::new((i as f64 * 1.3).cos(), (i as f64 * 0.17).sin()))
    .collect();

  let mut fft_a = a.clone();
  let mut fft_b = b.clone();
  let mut fft_sum: Vec<Complex64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();

  fft(&mut fft_a).unwrap();
  fft(&mut fft_b).unwrap();
  fft(&mut fft_sum).unwrap();

  let summed: Vec<Complex64> = fft_a.iter().zip(&fft_b).map(|(x, y)| x + y).collect();
  assert_sequences_close(&fft_sum, &summed, TOLERANCE);
}

#[test]
fn output_energy_is_n_times_input_energy() {
  let input = sample_sequence(32);
  let mut output = input.clone();
  fft(&mut output).unwrap();

  let input_energy: f64 = input.iter().map(|v| v.norm_sqr()).sum();
  let output_energy: f64 = output.iter().map(|v| v.norm_sqr()).sum();

  // Parseval: the transform scales total energy by N
  assert!((output_energy - 32.0 * input_energy).abs() <= 1e-6 * output_energy);
}

#[test]
fn matches_direct_dft_on_arbitrary_data() {
  let input = sample_sequence(16);
  let expected = reference_dft(&input);

  let mut output = input;
  fft(&mut output).unwrap();

  assert_sequences_close(&output, &expected, TOLERANCE);
}

#[test]
fn ifft_undoes_fft() {
  let original = sample_sequence(64);
  let mut data = original.clone();

  fft(&mut data).unwrap();
  ifft(&mut data).unwrap();

  assert_sequences_close(&data, &original, TOLERANCE);
}
