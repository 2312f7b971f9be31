use crate::scheme::ModulationScheme;
use crate::traits::FP;

/// A sampled time-domain signal: a time axis and one sample value per timestamp.
/// Immutable once produced, consumed by the presentation layer and discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct Waveform {
  /// timestamps in seconds, evenly spaced, starting at 0
  pub time: Vec<FP>,
  /// sample values, one per timestamp
  pub samples: Vec<FP>,
}

impl Waveform {
  /// Panic when the time axis and the sample sequence have unequal lengths.
  pub fn new(time: Vec<FP>, samples: Vec<FP>) -> Self {
    assert_eq!(time.len(), samples.len());
    Self { time, samples }
  }

  pub fn len(&self) -> usize {
    self.samples.len()
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }
}

/// The six carrier-modulated renditions of one bit string over a shared time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ModulationSet {
  pub time: Vec<FP>,
  pub am: Vec<FP>,
  pub fm: Vec<FP>,
  pub pm: Vec<FP>,
  pub ask: Vec<FP>,
  pub fsk: Vec<FP>,
  pub psk: Vec<FP>,
}

impl ModulationSet {
  /// the sample sequence of one scheme in the set
  pub fn select(&self, scheme: ModulationScheme) -> &[FP] {
    match scheme {
      ModulationScheme::Am => &self.am,
      ModulationScheme::Fm => &self.fm,
      ModulationScheme::Pm => &self.pm,
      ModulationScheme::Ask => &self.ask,
      ModulationScheme::Fsk => &self.fsk,
      ModulationScheme::Psk => &self.psk,
    }
  }
}
