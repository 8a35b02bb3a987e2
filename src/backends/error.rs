#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PointError {
    #[error("invalid input length: expected {expected}, received {received}")]
    InvalidInputLength { expected: usize, received: usize },
    #[error("invalid point")]
    InvalidPoint,
    #[error("input is not canonical")]
    NonCanonicalInput,
    #[error("invalid embedded data length: {len} exceeds {max}")]
    InvalidEmbedding { len: usize, max: usize },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScalarError {
    #[error("invalid input length: expected {expected}, received {received}")]
    InvalidInputLength { expected: usize, received: usize },
    #[error("input is not canonical")]
    NonCanonicalInput,
}

/// The entropy source could not supply bytes. Every guarantee of the schemes
/// depends on fresh randomness, callers should treat this as fatal.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("randomness source failure: {0}")]
pub struct RandomnessError(pub String);

impl From<rand_core::Error> for RandomnessError {
    fn from(err: rand_core::Error) -> Self {
        RandomnessError(err.to_string())
    }
}
