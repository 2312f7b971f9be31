use std::f32::consts::TAU;

use super::Modulator;
use crate::default_config::SignalConfig;
use crate::helper::parse_bits;
use crate::scheme::ModulationScheme;
use crate::traits::Sample;
use crate::waveform::Waveform;

/// trigonometric reference values are computed in f32, allow rounding slack
const EPS: f32 = 1e-4;

fn modulator() -> Modulator {
  Modulator::new(&SignalConfig::default())
}

fn modulate(bits: &str, scheme: ModulationScheme) -> Waveform {
  modulator().modulate(&parse_bits(bits).unwrap(), scheme)
}

fn assert_matches<F>(waveform: &Waveform, reference: F)
where
  F: Fn(usize, f32) -> f32,
{
  assert_eq!(waveform.time.len(), waveform.samples.len());
  for (i, (&t, &x)) in waveform.time.iter().zip(&waveform.samples).enumerate() {
    let expected = reference(i, t.into_f32());
    let got = x.into_f32();
    assert!(
      (got - expected).abs() < EPS,
      "sample {i}: got {got}, expected {expected}"
    );
  }
}

/// m = 0 throughout, the output is the unmodified carrier
#[test]
fn am_of_zero_is_carrier() {
  let wave = modulate("0", ModulationScheme::Am);
  assert_eq!(wave.len(), 100);
  assert_matches(&wave, |_, t| (TAU * 50.0 * t).cos());
}

#[test]
fn am_of_one_is_scaled_carrier() {
  let wave = modulate("1", ModulationScheme::Am);
  assert_matches(&wave, |_, t| 1.5 * (TAU * 50.0 * t).cos());
}

/// the FM phase term is the cumulative sum of m scaled by kf/fs
#[test]
fn fm_cumulative_phase() {
  let wave = modulate("1", ModulationScheme::Fm);
  assert_matches(&wave, |i, t| {
    let phase = 50.0 * (i + 1) as f32 / 1000.0;
    (TAU * 50.0 * t + phase).cos()
  });

  // m = 0: no phase accumulates, the carrier is untouched
  let wave = modulate("0", ModulationScheme::Fm);
  assert_matches(&wave, |_, t| (TAU * 50.0 * t).cos());
}

/// kp = pi/2 turns the carrier into a negated sine while m = 1
#[test]
fn pm_quarter_phase() {
  let wave = modulate("1", ModulationScheme::Pm);
  assert_matches(&wave, |_, t| -(TAU * 50.0 * t).sin());

  let wave = modulate("0", ModulationScheme::Pm);
  assert_matches(&wave, |_, t| (TAU * 50.0 * t).cos());
}

/// m = 0 multiplies the carrier down to zero
#[test]
fn ask_of_zero_is_silent() {
  let wave = modulate("0", ModulationScheme::Ask);
  assert_eq!(wave.len(), 100);
  assert!(wave.samples.iter().all(|&x| x.into_f32() == 0.0));
}

#[test]
fn ask_of_one_is_carrier() {
  let wave = modulate("1", ModulationScheme::Ask);
  assert_matches(&wave, |_, t| (TAU * 50.0 * t).cos());
}

/// every sample of a '1' bit runs at the shifted instantaneous frequency
#[test]
fn fsk_instantaneous_frequency() {
  let wave = modulate("1", ModulationScheme::Fsk);
  assert_matches(&wave, |_, t| (TAU * 80.0 * t).cos());

  let wave = modulate("0", ModulationScheme::Fsk);
  assert_matches(&wave, |_, t| (TAU * 50.0 * t).cos());
}

/// the frequency switch is applied per-sample, not per-bit-smoothed:
/// the first sample after the bit edge already runs at the other frequency
#[test]
fn fsk_switches_at_bit_edge() {
  let wave = modulate("01", ModulationScheme::Fsk);
  assert_matches(&wave, |i, t| {
    let freq = if i < 100 { 50.0 } else { 80.0 };
    (TAU * freq * t).cos()
  });
}

/// a pi phase offset negates the carrier
#[test]
fn psk_phase_reversal() {
  let wave = modulate("1", ModulationScheme::Psk);
  assert_matches(&wave, |_, t| -(TAU * 50.0 * t).cos());

  let wave = modulate("0", ModulationScheme::Psk);
  assert_matches(&wave, |_, t| (TAU * 50.0 * t).cos());
}

/// modulate_all agrees with the per-scheme entry point
#[test]
fn modulate_all_consistent() {
  let modulator = modulator();
  let bits = parse_bits("1011").unwrap();
  let set = modulator.modulate_all(&bits);
  assert_eq!(set.time.len(), 400);
  for scheme in ModulationScheme::ALL {
    let single = modulator.modulate(&bits, scheme);
    assert_eq!(set.time, single.time);
    assert_eq!(set.select(scheme), single.samples.as_slice(), "{scheme}");
  }
}

#[test]
fn empty_input() {
  for scheme in ModulationScheme::ALL {
    let wave = modulate("", scheme);
    assert!(wave.is_empty());
    assert!(wave.time.is_empty());
  }
  let set = modulator().modulate_all(&parse_bits("").unwrap());
  assert!(set.time.is_empty());
  assert!(set.psk.is_empty());
}

/// the message expansion follows the same samples-per-bit rule as the line coder
#[test]
fn sample_count_per_bit() {
  let config = SignalConfig {
    sample_rate: 200.0,
    bit_duration: 0.05,
    ..SignalConfig::default()
  };
  let modulator = Modulator::new(&config);
  let wave = modulator.modulate(&parse_bits("1101").unwrap(), ModulationScheme::Am);
  assert_eq!(wave.len(), 4 * 10);
}
