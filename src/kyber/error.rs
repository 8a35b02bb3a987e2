use crate::backends::error::PointError;
use crate::backends::error::RandomnessError;
use crate::backends::error::ScalarError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SchnorrError {
    #[error("invalid input length: expected {expected}, received {received}")]
    InvalidInputLength { expected: usize, received: usize },
    #[error("{0}")]
    Scalar(#[from] ScalarError),
    #[error("{0}")]
    Randomness(#[from] RandomnessError),
    #[error("invalid signature")]
    FailedVerification,
}

impl SchnorrError {
    /// Only a broken entropy source is unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SchnorrError::Randomness(_))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ElGamalError {
    #[error("invalid input length: expected at least {expected}, received {received}")]
    InvalidInputLength { expected: usize, received: usize },
    #[error("{0}")]
    Point(#[from] PointError),
    #[error("{0}")]
    Randomness(#[from] RandomnessError),
}

impl ElGamalError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ElGamalError::Randomness(_))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("malformed point list: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("point {index}: {source}")]
    Point { index: usize, source: PointError },
}
