use hound::WavSpec;

pub struct DefaultConfig;
impl DefaultConfig {
  pub const SAMPLE_RATE: f32 = 1000.0;
  pub const BIT_DURATION: f32 = 0.1;
  pub const CARRIER_FREQ: f32 = 50.0;
  pub const FM_SENSITIVITY: f32 = 50.0;
  pub const PM_PHASE: f32 = std::f32::consts::FRAC_PI_2;
  pub const FSK_DEVIATION: f32 = 30.0;
  pub const CHANNELS: u16 = 1;
  pub const BITS_PER_SAMPLE: u16 = 32;

  pub fn new<T>() -> T
  where
    Self: Into<T>,
  {
    DefaultConfig.into()
  }
}

/// Sampling and carrier parameters of one synthesis call.
/// Recreated per call, never shared between invocations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalConfig {
  /// samples per second
  pub sample_rate: f32,
  /// seconds per bit
  pub bit_duration: f32,
  /// carrier frequency in Hz
  pub carrier_freq: f32,
  /// FM sensitivity constant kf
  pub fm_sensitivity: f32,
  /// PM phase constant kp
  pub pm_phase: f32,
  /// FSK frequency deviation in Hz
  pub fsk_deviation: f32,
}

impl SignalConfig {
  /// Number of samples allotted to one bit interval.
  /// Panic when the bit interval is shorter than one sample, a caller contract violation.
  pub fn samples_per_bit(&self) -> usize {
    let count = (self.bit_duration * self.sample_rate).round();
    assert!(count >= 1.0, "bit interval shorter than one sample");
    count as usize
  }
}

impl Default for SignalConfig {
  fn default() -> Self {
    DefaultConfig::new()
  }
}

impl Into<SignalConfig> for DefaultConfig {
  fn into(self) -> SignalConfig {
    SignalConfig {
      sample_rate: Self::SAMPLE_RATE,
      bit_duration: Self::BIT_DURATION,
      carrier_freq: Self::CARRIER_FREQ,
      fm_sensitivity: Self::FM_SENSITIVITY,
      pm_phase: Self::PM_PHASE,
      fsk_deviation: Self::FSK_DEVIATION,
    }
  }
}

impl Into<WavSpec> for &SignalConfig {
  fn into(self) -> WavSpec {
    WavSpec {
      channels: DefaultConfig::CHANNELS,
      sample_rate: self.sample_rate.round() as u32,
      bits_per_sample: DefaultConfig::BITS_PER_SAMPLE,
      sample_format: hound::SampleFormat::Float,
    }
  }
}
