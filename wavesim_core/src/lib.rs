/// common helper functions: bit string parsing and shared signal building blocks
pub mod helper;

/// define the [`traits::Sample`] scalar abstraction and the [`traits::OutStream`] sink trait
pub mod traits;

/// recognized line-coding and modulation scheme names
pub mod scheme;

/// sampled waveform containers produced by the synthesizers
pub mod waveform;

/// baseband line coder: bit string to piecewise-constant voltage waveform
pub mod line_code;

/// carrier modulator: bit string to six carrier-modulated waveforms
pub mod modulation;

/// implementors of [`traits::OutStream`]: WAV and CSV waveform sinks
pub mod sample_stream;

mod default_config;
pub use default_config::{DefaultConfig, SignalConfig};
