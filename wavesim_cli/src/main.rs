use std::error::Error;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use console::style;

use wavesim_core::{
  helper::parse_bits,
  line_code::LineCoder,
  modulation::Modulator,
  sample_stream::{CsvOutStream, WavOutStream},
  scheme::Scheme,
  traits::OutStream,
  DefaultConfig, SignalConfig,
};

mod render;

/// Render a line-coding or modulation waveform for a binary sequence.
#[derive(Parser)]
struct WaveSim {
  /// the binary sequence, e.g. 10110
  bits: String,

  /// scheme name: Digital, NRZ-L, NRZ-I, RZ, Manchester, "Differential Manchester",
  /// AM, FM, PM, ASK, FSK or PSK
  scheme: String,

  #[arg(long, default_value_t = DefaultConfig::SAMPLE_RATE)]
  /// sampling rate in samples per second
  sample_rate: f32,

  #[arg(long, default_value_t = DefaultConfig::BIT_DURATION)]
  /// seconds per bit
  bit_duration: f32,

  #[arg(long, default_value_t = DefaultConfig::CARRIER_FREQ)]
  /// carrier frequency in Hz, used by the modulation schemes
  carrier_freq: f32,

  #[arg(long)]
  /// write the waveform as time,value CSV rows to this file
  csv: Option<PathBuf>,

  #[arg(long)]
  /// write the waveform samples as a mono float WAV to this file
  wav: Option<PathBuf>,

  #[arg(long, default_value_t = 72)]
  /// terminal plot width in characters
  width: usize,

  #[arg(long, default_value_t = 13)]
  /// terminal plot height in rows
  height: usize,
}

fn main() {
  env_logger::init();
  let args = WaveSim::parse();

  if let Err(err) = run(&args) {
    eprintln!("{} {}", style("error:").red().bold(), err);
    exit(1);
  }
}

fn run(args: &WaveSim) -> Result<(), Box<dyn Error>> {
  let bits = parse_bits(&args.bits)?;
  let scheme: Scheme = args.scheme.parse()?;

  if !(args.sample_rate > 0.0 && args.bit_duration > 0.0 && args.carrier_freq > 0.0) {
    return Err("sample rate, bit duration and carrier frequency must be positive".into());
  }
  let config = SignalConfig {
    sample_rate: args.sample_rate,
    bit_duration: args.bit_duration,
    carrier_freq: args.carrier_freq,
    ..SignalConfig::default()
  };
  if (config.bit_duration * config.sample_rate).round() < 1.0 {
    return Err("bit interval shorter than one sample".into());
  }
  log::debug!(
    "scheme={scheme} bits={} samples_per_bit={}",
    bits.len(),
    config.samples_per_bit()
  );

  let waveform = match scheme {
    Scheme::Line(scheme) => LineCoder::new(&config).encode(&bits, scheme),
    Scheme::Carrier(scheme) => Modulator::new(&config).modulate(&bits, scheme),
  };
  log::info!("synthesized {} samples under {scheme}", waveform.len());

  println!("{}", style(&args.scheme).green().bold());
  render::plot(&waveform, &args.bits, args.width, args.height);

  if let Some(path) = &args.csv {
    let mut sink = CsvOutStream::create(path)?;
    sink.write_waveform(&waveform)?;
    println!("{} {}", style("csv:").yellow(), path.display());
  }
  if let Some(path) = &args.wav {
    let mut sink = WavOutStream::create(path, &config)?;
    sink.write_exact(&waveform.samples)?;
    sink.finalize()?;
    println!("{} {}", style("wav:").yellow(), path.display());
  }
  Ok(())
}
