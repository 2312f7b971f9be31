use std::{
  fs::File,
  io::{BufWriter, Seek, Write},
  path::Path,
};

use hound::{Error as WavError, WavWriter};

use crate::default_config::SignalConfig;
use crate::traits::{OutStream, Sample, FP};

/// Write synthesized waveform samples into a mono float WAV file,
/// so a waveform can be imported into external audio tools.
pub struct WavOutStream<W: Write + Seek>(WavWriter<W>);

impl<W: Write + Seek> WavOutStream<W> {
  pub fn new(wav_writer: WavWriter<W>) -> Self {
    Self(wav_writer)
  }

  /// flush the WAV header and close the stream
  pub fn finalize(self) -> Result<(), WavError> {
    self.0.finalize()
  }
}

impl WavOutStream<BufWriter<File>> {
  /// Create a WAV file whose sample rate is taken from `config`.
  pub fn create<P>(filename: P, config: &SignalConfig) -> Result<Self, WavError>
  where
    P: AsRef<Path>,
  {
    Ok(Self::new(WavWriter::create(filename, config.into())?))
  }
}

impl<W: Write + Seek> OutStream<FP, WavError> for WavOutStream<W> {
  fn write(&mut self, buf: &[FP]) -> Result<usize, WavError> {
    for &sample in buf {
      self.0.write_sample(sample.into_f32())?;
    }
    Ok(buf.len())
  }

  fn write_exact(&mut self, buf: &[FP]) -> Result<(), WavError> {
    self.write(buf).map(|_| ())
  }
}
