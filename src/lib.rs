//! # Taxi Fare
//!
//! Thai taxi fare calculator: a 35 THB base fare covering the first
//! kilometre, marginal per-kilometre pricing across six distance tiers, and
//! 3 THB per minute of traffic wait.
//!
//! ## Architecture
//!
//! - **domain**: the pure fare calculation, rate schedule and value types
//! - **application**: form input parsing, receipts and the quote service
//! - **config**: TOML configuration for logging and output
//! - **support**: error types
//!
//! ```
//! use taxi_fare::compute_fare;
//!
//! let fare = compute_fare(11.0, 0.0).unwrap();
//! assert_eq!(fare.distance_charge, rust_decimal::Decimal::from(65));
//! assert_eq!(fare.format_total(), "100.00 THB");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod support;
pub mod telemetry;

pub use config::{default_config_path, AppConfig};

pub use domain::fare::{compute_fare, FareCalculator, FareInput, FareResult};
pub use domain::{DomainError, DomainResult};

pub use application::{FareQuote, FareQuoteService, FareReceipt, FareRequest};
