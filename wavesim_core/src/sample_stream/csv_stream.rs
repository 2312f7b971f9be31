use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::Path,
};

use crate::traits::{OutStream, Sample, FP};
use crate::waveform::Waveform;

/// Write `(timestamp, value)` pairs as CSV rows.
/// The CSV file replaces an embedded plot canvas: students feed it to
/// gnuplot or a spreadsheet to view the waveform.
pub struct CsvOutStream<W: Write>(W);

impl<W: Write> CsvOutStream<W> {
  pub fn new(out: W) -> Self {
    Self(out)
  }

  /// hand back the underlying writer
  pub fn into_inner(self) -> W {
    self.0
  }

  /// write the header row and one `time,value` row per sample
  pub fn write_waveform(&mut self, waveform: &Waveform) -> io::Result<()> {
    writeln!(self.0, "time,value")?;
    let rows: Vec<(FP, FP)> = waveform
      .time
      .iter()
      .zip(&waveform.samples)
      .map(|(&t, &x)| (t, x))
      .collect();
    self.write_exact(&rows)
  }
}

impl CsvOutStream<BufWriter<File>> {
  pub fn create<P>(filename: P) -> io::Result<Self>
  where
    P: AsRef<Path>,
  {
    Ok(Self::new(BufWriter::new(File::create(filename)?)))
  }
}

impl<W: Write> OutStream<(FP, FP), io::Error> for CsvOutStream<W> {
  fn write(&mut self, buf: &[(FP, FP)]) -> Result<usize, io::Error> {
    for &(t, x) in buf {
      writeln!(self.0, "{},{}", t.into_f32(), x.into_f32())?;
    }
    Ok(buf.len())
  }

  fn write_exact(&mut self, buf: &[(FP, FP)]) -> Result<(), io::Error> {
    self.write(buf).map(|_| ())
  }
}
