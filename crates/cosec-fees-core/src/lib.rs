pub mod error;
pub mod types;

#[cfg(feature = "estimator")]
pub mod estimator;

#[cfg(feature = "services")]
pub mod services;

pub use error::CosecFeesError;
pub use types::*;

/// Standard result type for all cosec-fees operations
pub type CosecFeesResult<T> = Result<T, CosecFeesError>;
