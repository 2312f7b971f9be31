mod sample;
mod stream;
pub use sample::{Sample, FP};
pub use stream::OutStream;
