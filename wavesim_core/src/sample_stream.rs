/// waveform sink writing WAV files with hound
mod hound_stream;
/// waveform sink writing `time,value` rows for external plotting tools
mod csv_stream;

pub use csv_stream::CsvOutStream;
pub use hound_stream::WavOutStream;

#[cfg(test)]
mod tests;
