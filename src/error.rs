use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Seed length mismatch: {phrases} phrases, {weights} weights")]
    SeedLengthMismatch { phrases: usize, weights: usize },
    #[error("Invalid top-k: must keep at least one suggestion per prefix")]
    InvalidTopK,
}

pub type Result<T> = std::result::Result<T, Error>;
