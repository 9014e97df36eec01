pub mod fare;

// Re-export commonly used types
pub use fare::{compute_fare, FareCalculator, FareInput, FareResult, RateTier, TierCharge};

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
