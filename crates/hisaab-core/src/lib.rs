pub mod error;
pub mod formatting;
pub mod time_value;
pub mod types;

#[cfg(feature = "calculator")]
pub mod expression;

#[cfg(any(feature = "calculator", feature = "reverse_percentage"))]
pub mod percentage;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "session")]
pub mod session;

pub use error::HisaabError;
pub use types::*;

/// Standard result type for all hisaab operations
pub type HisaabResult<T> = Result<T, HisaabError>;
