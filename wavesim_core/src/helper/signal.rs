use bitvec::slice::BitSlice;

use crate::traits::{Sample, FP};

/// Generate the time axis of a signal with `len` samples:
/// timestamps evenly spaced at `1/sample_rate` seconds, starting at 0.
pub fn time_axis(len: usize, sample_rate: f32) -> Vec<FP> {
  let dt = FP::ONE / FP::from_f32(sample_rate);
  (0..len).map(|i| dt * FP::from_f32(i as f32)).collect()
}

/// Expand bits into the rectangular message signal:
/// bit '1' -> 1 and bit '0' -> 0, each held for `samples_per_bit` samples.
pub fn message_signal(bits: &BitSlice, samples_per_bit: usize) -> Vec<FP> {
  let mut signal = Vec::with_capacity(bits.len() * samples_per_bit);
  for bit in bits.iter().by_vals() {
    let level = if bit { FP::ONE } else { FP::ZERO };
    signal.extend(std::iter::repeat(level).take(samples_per_bit));
  }
  signal
}

/// Running cumulative sum of `seq` scaled by `scale`:
/// `out[i] = scale * (seq[0] + ... + seq[i])`
pub fn cumulative_sum(seq: &[FP], scale: FP) -> Vec<FP> {
  let mut sum = FP::ZERO;
  seq
    .iter()
    .map(|&x| {
      sum += x;
      sum * scale
    })
    .collect()
}
