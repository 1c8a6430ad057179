use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
  #[error("Index {index} is out of range for heap of length {len}")]
  IndexOutOfRange { index: usize, len: usize },
}
