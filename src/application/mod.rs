pub mod input;
pub mod receipt;
pub mod services;

// Re-export key types for convenience
pub use input::{parse_numeric_input, FareRequest, INVALID_NUMBERS_MESSAGE};
pub use receipt::{render_schedule, FareReceipt, ReceiptLine};
pub use services::{FareQuote, FareQuoteService};
