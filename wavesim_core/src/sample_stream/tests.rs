use super::{CsvOutStream, WavOutStream};
use crate::default_config::SignalConfig;
use crate::helper::parse_bits;
use crate::line_code::LineCoder;
use crate::scheme::LineCodeScheme;
use crate::traits::OutStream;

fn waveform() -> crate::waveform::Waveform {
  let coder = LineCoder::new(&SignalConfig::default());
  coder.encode(&parse_bits("101").unwrap(), LineCodeScheme::Manchester)
}

/// one header row plus one row per sample
#[test]
fn csv_row_count() {
  let wave = waveform();
  let mut sink = CsvOutStream::new(Vec::new());
  sink.write_waveform(&wave).unwrap();

  let written = String::from_utf8(sink.into_inner()).unwrap();
  let rows: Vec<&str> = written.lines().collect();
  assert_eq!(rows.len(), wave.len() + 1);
  assert_eq!(rows[0], "time,value");
  assert_eq!(rows[1], "0,-1");
}

/// the WAV file carries the configured sample rate and all samples
#[test]
fn wav_sample_count() {
  const FILENAME: &str = "wavesim_manchester_test.wav";
  let config = SignalConfig::default();
  let wave = waveform();

  let mut sink = WavOutStream::create(FILENAME, &config).unwrap();
  sink.write_exact(&wave.samples).unwrap();
  sink.finalize().unwrap();

  let reader = hound::WavReader::open(FILENAME).unwrap();
  assert_eq!(reader.spec().sample_rate, 1000);
  assert_eq!(reader.spec().channels, 1);
  assert_eq!(reader.len() as usize, wave.len());
  std::fs::remove_file(FILENAME).unwrap();
}
