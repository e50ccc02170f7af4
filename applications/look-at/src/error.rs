use std::{
    error::Error,
    fmt::{self, Display},
    io,
    process::ExitCode,
};

use lib_geometry::DegenerateInputError;

pub(crate) type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug)]
pub(crate) enum ApplicationError {
    Arguments(pico_args::Error),
    UnexpectedArguments(Vec<String>),
    Degenerate(DegenerateInputError),
    Output(io::Error),
    Serialize(serde_json::Error),
}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments(error) => write!(formatter, "invalid arguments: {error}"),
            Self::UnexpectedArguments(arguments) => {
                write!(formatter, "unexpected arguments: {}", arguments.join(" "))
            }
            Self::Degenerate(error) => write!(formatter, "cannot build view matrix: {error}"),
            Self::Output(error) => write!(formatter, "failed to write output: {error}"),
            Self::Serialize(error) => write!(formatter, "failed to serialize output: {error}"),
        }
    }
}

impl Error for ApplicationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arguments(error) => Some(error),
            Self::UnexpectedArguments(_) => None,
            Self::Degenerate(error) => Some(error),
            Self::Output(error) => Some(error),
            Self::Serialize(error) => Some(error),
        }
    }
}

impl From<pico_args::Error> for ApplicationError {
    fn from(value: pico_args::Error) -> Self {
        Self::Arguments(value)
    }
}

impl From<DegenerateInputError> for ApplicationError {
    fn from(value: DegenerateInputError) -> Self {
        Self::Degenerate(value)
    }
}

impl From<io::Error> for ApplicationError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

impl From<serde_json::Error> for ApplicationError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<ApplicationError> for ExitCode {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Output(_) | ApplicationError::Serialize(_) => ExitCode::FAILURE,
            ApplicationError::Arguments(_) | ApplicationError::UnexpectedArguments(_) => {
                ExitCode::from(2)
            }
            ApplicationError::Degenerate(_) => ExitCode::from(3),
        }
    }
}
