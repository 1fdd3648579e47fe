#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed-decimal conversion was asked for more than
    /// [`MAX_DIGITS`](crate::fixed::MAX_DIGITS) fraction digits.
    #[error("fraction digits must be between 0 and 100, got {0}")]
    DigitsOutOfRange(u32),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
