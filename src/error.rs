use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The interval bounds do not satisfy `0 <= low < high`.
    #[error("invalid interval [{low}, {high}]: bounds must satisfy 0 <= low < high")]
    InvalidInterval { low: i64, high: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
