use crate::default_config::SignalConfig;
use crate::helper::{cumulative_sum, message_signal, time_axis, BitSeq};
use crate::scheme::ModulationScheme;
use crate::traits::{Sample, FP};
use crate::waveform::{ModulationSet, Waveform};

/// Carrier modulator.
/// Expands the bit sequence into the rectangular message signal m(t)
/// and shifts it onto a cosine carrier, one formula per [`ModulationScheme`].
pub struct Modulator {
  config: SignalConfig,
  samples_per_bit: usize,
}

impl Modulator {
  pub fn new(config: &SignalConfig) -> Self {
    Self {
      config: *config,
      samples_per_bit: config.samples_per_bit(),
    }
  }

  /// Modulate `bits` under one `scheme`.
  /// The output holds exactly `bits.len() * samples_per_bit` samples.
  pub fn modulate(&self, bits: &BitSeq, scheme: ModulationScheme) -> Waveform {
    let time = time_axis(bits.len() * self.samples_per_bit, self.config.sample_rate);
    let message = message_signal(bits, self.samples_per_bit);
    let samples = match scheme {
      ModulationScheme::Am => self.am(&time, &message),
      ModulationScheme::Fm => self.fm(&time, &message),
      ModulationScheme::Pm => self.pm(&time, &message),
      ModulationScheme::Ask => self.ask(&time, &message),
      ModulationScheme::Fsk => self.fsk(&time, &message),
      ModulationScheme::Psk => self.psk(&time, &message),
    };
    Waveform::new(time, samples)
  }

  /// Modulate `bits` under all six schemes over one shared time axis.
  pub fn modulate_all(&self, bits: &BitSeq) -> ModulationSet {
    let time = time_axis(bits.len() * self.samples_per_bit, self.config.sample_rate);
    let message = message_signal(bits, self.samples_per_bit);
    ModulationSet {
      am: self.am(&time, &message),
      fm: self.fm(&time, &message),
      pm: self.pm(&time, &message),
      ask: self.ask(&time, &message),
      fsk: self.fsk(&time, &message),
      psk: self.psk(&time, &message),
      time,
    }
  }

  /// carrier phase 2*pi*fc*t
  fn carrier_phase(&self, t: FP) -> FP {
    FP::TAU * FP::from_f32(self.config.carrier_freq) * t
  }

  /// AM: (1 + 0.5*m(t)) * cos(2*pi*fc*t)
  fn am(&self, time: &[FP], message: &[FP]) -> Vec<FP> {
    let depth = FP::from_f32(0.5);
    time
      .iter()
      .zip(message)
      .map(|(&t, &m)| (FP::ONE + depth * m) * self.carrier_phase(t).cos())
      .collect()
  }

  /// FM: cos(2*pi*fc*t + kf * integral of m).
  /// The integral is the discrete cumulative sum of m scaled by 1/sample_rate,
  /// kept as-is so numeric output stays comparable to reference plots.
  fn fm(&self, time: &[FP], message: &[FP]) -> Vec<FP> {
    let scale = FP::from_f32(self.config.fm_sensitivity / self.config.sample_rate);
    let phase = cumulative_sum(message, scale);
    time
      .iter()
      .zip(phase)
      .map(|(&t, p)| (self.carrier_phase(t) + p).cos())
      .collect()
  }

  /// PM: cos(2*pi*fc*t + kp*m(t))
  fn pm(&self, time: &[FP], message: &[FP]) -> Vec<FP> {
    let kp = FP::from_f32(self.config.pm_phase);
    time
      .iter()
      .zip(message)
      .map(|(&t, &m)| (self.carrier_phase(t) + kp * m).cos())
      .collect()
  }

  /// ASK: m(t) * cos(2*pi*fc*t)
  fn ask(&self, time: &[FP], message: &[FP]) -> Vec<FP> {
    time
      .iter()
      .zip(message)
      .map(|(&t, &m)| m * self.carrier_phase(t).cos())
      .collect()
  }

  /// FSK: cos(2*pi*f(t)*t) with f(t) = fc when m(t) = 0 and fc + deviation otherwise.
  /// The instantaneous frequency is applied per-sample against the absolute
  /// timestamp, so the phase jumps at bit edges exactly as the reference plots do.
  fn fsk(&self, time: &[FP], message: &[FP]) -> Vec<FP> {
    let base = FP::from_f32(self.config.carrier_freq);
    let shifted = FP::from_f32(self.config.carrier_freq + self.config.fsk_deviation);
    time
      .iter()
      .zip(message)
      .map(|(&t, &m)| {
        let freq = if m == FP::ZERO { base } else { shifted };
        (FP::TAU * freq * t).cos()
      })
      .collect()
  }

  /// PSK: cos(2*pi*fc*t + pi*m(t))
  fn psk(&self, time: &[FP], message: &[FP]) -> Vec<FP> {
    time
      .iter()
      .zip(message)
      .map(|(&t, &m)| (self.carrier_phase(t) + FP::PI * m).cos())
      .collect()
  }
}

#[cfg(test)]
mod tests;
