use std::{
    error::Error,
    fmt::{self, Display},
};

/// An orthonormal view basis cannot be built from the given inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateInputError {
    /// `eye` and `target` coincide, so there is no forward direction.
    ZeroForward,
    /// `up` is parallel to the forward direction (or zero), so there is no right direction.
    ParallelUp,
}

impl Display for DegenerateInputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForward => {
                write!(formatter, "degenerate input: eye and target coincide")
            }
            Self::ParallelUp => {
                write!(
                    formatter,
                    "degenerate input: up direction is parallel to the forward direction"
                )
            }
        }
    }
}

impl Error for DegenerateInputError {}
