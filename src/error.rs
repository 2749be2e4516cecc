//! Error type for sample buffers

use core::fmt;

/// Error returned when a sample cannot be stored
///
/// Empty structures are not errors: `pop`, `extract_min` and `min` report
/// them as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The sample is NaN, which has no place in a min-ordering and never
    /// compares equal to itself for duplicate detection
    NotANumber,
    /// The integer sample has no exact `f32` counterpart (|ms| > 2^24 and
    /// not a multiple of the spacing there), so the heap would store a
    /// different value than the queue
    Unrepresentable(i32),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NotANumber => write!(f, "sample is NaN and cannot be ordered"),
            SampleError::Unrepresentable(ms) => {
                write!(f, "sample {} has no exact f32 representation", ms)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleError {}
