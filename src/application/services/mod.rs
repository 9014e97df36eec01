//! Application services

mod quote;

pub use quote::{FareQuote, FareQuoteService};
