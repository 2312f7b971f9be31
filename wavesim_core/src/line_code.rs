use crate::default_config::SignalConfig;
use crate::helper::{message_signal, time_axis, BitSeq};
use crate::scheme::LineCodeScheme;
use crate::traits::{Sample, FP};
use crate::waveform::Waveform;

/// Baseband line coder.
/// Maps a bit sequence to a piecewise-constant voltage waveform,
/// one rule per [`LineCodeScheme`], each bit holding one interval of
/// `samples_per_bit` samples.
pub struct LineCoder {
  sample_rate: f32,
  samples_per_bit: usize,
}

impl LineCoder {
  pub fn new(config: &SignalConfig) -> Self {
    Self {
      sample_rate: config.sample_rate,
      samples_per_bit: config.samples_per_bit(),
    }
  }

  /// Encode `bits` under `scheme`.
  /// The output holds exactly `bits.len() * samples_per_bit` samples.
  pub fn encode(&self, bits: &BitSeq, scheme: LineCodeScheme) -> Waveform {
    let levels = match scheme {
      LineCodeScheme::Digital => message_signal(bits, self.samples_per_bit),
      LineCodeScheme::NrzL => self.nrz_l(bits),
      LineCodeScheme::NrzI => self.nrz_i(bits),
      LineCodeScheme::Rz => self.rz(bits),
      LineCodeScheme::Manchester => self.manchester(bits),
      LineCodeScheme::DiffManchester => self.diff_manchester(bits),
    };
    let time = time_axis(levels.len(), self.sample_rate);
    Waveform::new(time, levels)
  }

  /// hold one level for a full bit interval
  fn hold(&self, levels: &mut Vec<FP>, level: FP) {
    levels.extend(std::iter::repeat(level).take(self.samples_per_bit));
  }

  /// split one bit interval into two half-interval levels;
  /// the second half takes the remainder so odd intervals keep their full length
  fn split(&self, levels: &mut Vec<FP>, first: FP, second: FP) {
    let half = self.samples_per_bit / 2;
    levels.extend(std::iter::repeat(first).take(half));
    levels.extend(std::iter::repeat(second).take(self.samples_per_bit - half));
  }

  fn interval_buffer(&self, bits: &BitSeq) -> Vec<FP> {
    Vec::with_capacity(bits.len() * self.samples_per_bit)
  }

  /// '1' -> level -1, '0' -> level +1, held for the full bit interval
  fn nrz_l(&self, bits: &BitSeq) -> Vec<FP> {
    let mut levels = self.interval_buffer(bits);
    for bit in bits.iter().by_vals() {
      self.hold(&mut levels, if bit { -FP::ONE } else { FP::ONE });
    }
    levels
  }

  /// The level inverts on '1' and holds on '0'.
  /// The running level starts at +1 and inverts before the interval is emitted.
  fn nrz_i(&self, bits: &BitSeq) -> Vec<FP> {
    let mut levels = self.interval_buffer(bits);
    let mut level = FP::ONE;
    for bit in bits.iter().by_vals() {
      if bit {
        level = -level;
      }
      self.hold(&mut levels, level);
    }
    levels
  }

  /// first half of the interval carries the sign of the bit, second half returns to zero
  fn rz(&self, bits: &BitSeq) -> Vec<FP> {
    let mut levels = self.interval_buffer(bits);
    for bit in bits.iter().by_vals() {
      self.split(&mut levels, if bit { FP::ONE } else { -FP::ONE }, FP::ZERO);
    }
    levels
  }

  /// '1' -> low-then-high transition, '0' -> high-then-low
  fn manchester(&self, bits: &BitSeq) -> Vec<FP> {
    let mut levels = self.interval_buffer(bits);
    for bit in bits.iter().by_vals() {
      if bit {
        self.split(&mut levels, -FP::ONE, FP::ONE);
      } else {
        self.split(&mut levels, FP::ONE, -FP::ONE);
      }
    }
    levels
  }

  /// Differential Manchester, keyed on the running polarity `p` (starts at +1):
  /// on '0' the polarity flips first and the interval is `[p, -p]`;
  /// on '1' the interval is `[p, -p]` and the polarity flips afterwards,
  /// taking effect in the next interval.
  fn diff_manchester(&self, bits: &BitSeq) -> Vec<FP> {
    let mut levels = self.interval_buffer(bits);
    let mut polarity = FP::ONE;
    for bit in bits.iter().by_vals() {
      if !bit {
        polarity = -polarity;
      }
      self.split(&mut levels, polarity, -polarity);
      if bit {
        polarity = -polarity;
      }
    }
    levels
  }
}
