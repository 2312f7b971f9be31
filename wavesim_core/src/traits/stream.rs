/// Write data of type `T` continuously into [`OutStream`].
/// Might encounter error of type `E`
pub trait OutStream<T, E> {
  /// Write data from a slice.
  /// Return the number of items accepted by the sink.
  fn write(&mut self, buf: &[T]) -> Result<usize, E>;
  /// Write data from a slice.
  /// The function will not return until all the data are written.
  fn write_exact(&mut self, buf: &[T]) -> Result<(), E>;
}
