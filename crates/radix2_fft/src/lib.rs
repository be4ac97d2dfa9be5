#[cfg(test)]
mod tests;

// Home of the iterative radix-2 decimation-in-time FFT.

use num_complex::Complex64;
use std::f64::consts::PI;
use thiserror::Error;

/// Error reported by the validated transform entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
  /// The sequence length is not a positive power of two.
  #[error("sequence length {0} is not a positive power of two")]
  InvalidLength(usize),
}

/// Reorders the sequence in place so that each element lands at the
/// index obtained by reversing the low log2(N) bits of its original
/// index. Must run before [`transform`].
///
/// Rather than recomputing the reversed index from scratch for every
/// element, this keeps a running reversed counter `j` and advances it
/// with the standard carry-propagation step, swapping only when
/// `i < j` so no pair is swapped twice.
///
/// __Arguments:__
///
/// + `data` - the sequence of complex samples; its length must be a
///   power of two (validated by [`fft`]/[`ifft`], assumed here).
///
pub fn permute(data: &mut [Complex64]) {
  let n = data.len();

  let mut j: usize = 0;
  for i in 0..n.saturating_sub(1) {
    if i < j {
      data.swap(i, j);
    }

    // propagate the carry into the reversed counter
    let mut k = n / 2;
    while k <= j {
      j -= k;
      k >>= 1;
    }
    j += k;
  }
}

/// Applies the log2(N) butterfly stages to an already bit-reversed
/// sequence, in place. Stage spans double from 2 up to N; each stage
/// reads only its predecessor's output, so the stages must run in
/// increasing order.
///
/// __Arguments:__
///
/// + `data` - the bit-reversal-permuted sequence of complex samples;
///   its length must be a power of two (validated by [`fft`]/[`ifft`],
///   assumed here).
///
pub fn transform(data: &mut [Complex64]) {
  butterfly_stages(data, -1.0);
}

fn butterfly_stages(data: &mut [Complex64], sign: f64) {
  let n = data.len();

  let mut span: usize = 2;
  while span <= n {
    let half = span / 2;
    let angle_step = sign * 2f64 * PI / (span as f64);

    // one twiddle per group offset, shared by every group in the stage
    for j in 0..half {
      let twiddle = Complex64::from_polar(1.0, angle_step * (j as f64));

      for top in (j..n).step_by(span) {
        let bottom = top + half;

        // rotate the bottom operand before either output is written,
        // so both combines see the original top value
        let rotated = data[bottom] * twiddle;
        data[bottom] = data[top] - rotated;
        data[top] += rotated;
      }
    }

    span <<= 1;
  }
}

/// Computes the forward DFT of `data` in place: validates the length,
/// then runs the bit-reversal permutation followed by the butterfly
/// stages. The negative angle convention is used, with no
/// normalization on the forward transform.
///
/// __Arguments:__
///
/// + `data` - the caller-owned sequence of complex samples; mutated in
///   place into its spectrum.
///
/// __Errors:__
///
/// Returns [`FftError::InvalidLength`] without touching the sequence
/// if its length is not a positive power of two.
///
pub fn fft(data: &mut [Complex64]) -> Result<(), FftError> {
  check_length(data.len())?;

  permute(data);
  transform(data);

  Ok(())
}

/// Computes the inverse DFT of `data` in place. The convention here is
/// to put the 1/N normalizing factor on the inverse transform, so
/// `ifft` after [`fft`] reproduces the original sequence up to
/// floating-point rounding.
///
/// __Errors:__
///
/// Returns [`FftError::InvalidLength`] without touching the sequence
/// if its length is not a positive power of two.
///
pub fn ifft(data: &mut [Complex64]) -> Result<(), FftError> {
  check_length(data.len())?;

  permute(data);
  butterfly_stages(data, 1.0);

  let norm = 1f64 / (data.len() as f64);
  for value in data.iter_mut() {
    *value = value.scale(norm);
  }

  Ok(())
}

fn check_length(n: usize) -> Result<(), FftError> {
  // is_power_of_two is false for zero, so this also rejects empty input
  if n.is_power_of_two() {
    Ok(())
  } else {
    Err(FftError::InvalidLength(n))
  }
}
