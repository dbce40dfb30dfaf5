use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    /// Channel planes that must share dimensions do not.
    ChannelMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::ChannelMismatch { expected, actual } => write!(
                f,
                "channel size mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for Error {}
