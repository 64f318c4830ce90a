use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Every window of `size` bytes in the `len`-byte input repeats a value,
    /// or the input is shorter than a single window.
    #[display(fmt = "no window of {} distinct bytes in {} bytes of input", size, len)]
    NotFound { size: usize, len: usize },
}
