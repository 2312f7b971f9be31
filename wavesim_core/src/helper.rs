mod bits;
pub use bits::{parse_bits, BitSeq, ParseBitsError};

mod signal;
pub use signal::{cumulative_sum, message_signal, time_axis};
