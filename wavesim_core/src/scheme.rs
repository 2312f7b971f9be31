use std::fmt;
use std::str::FromStr;

/// Unknown-Scheme: the requested name is not in the recognized enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSchemeError {
  /// the rejected scheme name
  pub name: String,
}
impl fmt::Display for UnknownSchemeError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "unrecognized scheme name {:?}", self.name)
  }
}
impl std::error::Error for UnknownSchemeError {}

/// baseband line-coding rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCodeScheme {
  Digital,
  NrzL,
  NrzI,
  Rz,
  Manchester,
  DiffManchester,
}

impl LineCodeScheme {
  pub const ALL: [LineCodeScheme; 6] = [
    LineCodeScheme::Digital,
    LineCodeScheme::NrzL,
    LineCodeScheme::NrzI,
    LineCodeScheme::Rz,
    LineCodeScheme::Manchester,
    LineCodeScheme::DiffManchester,
  ];

  pub fn name(self) -> &'static str {
    match self {
      LineCodeScheme::Digital => "Digital",
      LineCodeScheme::NrzL => "NRZ-L",
      LineCodeScheme::NrzI => "NRZ-I",
      LineCodeScheme::Rz => "RZ",
      LineCodeScheme::Manchester => "Manchester",
      LineCodeScheme::DiffManchester => "Differential Manchester",
    }
  }
}

impl fmt::Display for LineCodeScheme {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for LineCodeScheme {
  type Err = UnknownSchemeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    LineCodeScheme::ALL
      .into_iter()
      .find(|scheme| scheme.name() == s)
      .ok_or_else(|| UnknownSchemeError { name: s.into() })
  }
}

/// carrier modulation rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModulationScheme {
  Am,
  Fm,
  Pm,
  Ask,
  Fsk,
  Psk,
}

impl ModulationScheme {
  pub const ALL: [ModulationScheme; 6] = [
    ModulationScheme::Am,
    ModulationScheme::Fm,
    ModulationScheme::Pm,
    ModulationScheme::Ask,
    ModulationScheme::Fsk,
    ModulationScheme::Psk,
  ];

  pub fn name(self) -> &'static str {
    match self {
      ModulationScheme::Am => "AM",
      ModulationScheme::Fm => "FM",
      ModulationScheme::Pm => "PM",
      ModulationScheme::Ask => "ASK",
      ModulationScheme::Fsk => "FSK",
      ModulationScheme::Psk => "PSK",
    }
  }
}

impl fmt::Display for ModulationScheme {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ModulationScheme {
  type Err = UnknownSchemeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ModulationScheme::ALL
      .into_iter()
      .find(|scheme| scheme.name() == s)
      .ok_or_else(|| UnknownSchemeError { name: s.into() })
  }
}

/// Any scheme the workbench can render, either baseband or carrier-modulated.
/// This is the enumeration behind the single scheme selector of the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
  Line(LineCodeScheme),
  Carrier(ModulationScheme),
}

impl fmt::Display for Scheme {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Scheme::Line(scheme) => scheme.fmt(f),
      Scheme::Carrier(scheme) => scheme.fmt(f),
    }
  }
}

impl FromStr for Scheme {
  type Err = UnknownSchemeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse()
      .map(Scheme::Line)
      .or_else(|_| s.parse().map(Scheme::Carrier))
  }
}
