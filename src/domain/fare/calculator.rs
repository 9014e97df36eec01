//! Fare calculation (pure function)
//!
//! # Rules (enforced in code)
//!
//! - Base fare is 35.00 and covers the first kilometre
//! - Distance beyond the first kilometre is priced marginally by [`RATE_SCHEDULE`]
//! - Traffic wait is 3.00 per minute, linear, uncapped
//! - Every field of the result is rounded to 2 places, half away from zero
//! - The total is rounded from the unrounded sum, not from rounded parts
//!
//! [`RATE_SCHEDULE`]: super::schedule::RATE_SCHEDULE

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::model::{FareInput, FareResult};
use super::schedule::tiered_distance_charge;
use crate::support::errors::DomainResult;

/// Flag-fall charged on every trip (THB).
pub const BASE_FARE: Decimal = Decimal::from_parts(3500, 0, 0, false, 2);

/// Traffic wait price per minute (THB).
pub const WAIT_RATE_PER_MINUTE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// Decimal places kept in every money field.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to [`MONEY_SCALE`] places, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Unrounded wait charge.
///
/// Expects a wait no larger than [`MAX_MEASUREMENT`](super::model::MAX_MEASUREMENT),
/// which [`FareInput`] guarantees.
pub fn time_charge(wait_minutes: Decimal) -> Decimal {
    wait_minutes * WAIT_RATE_PER_MINUTE
}

/// Stateless fare calculator.
///
/// Holds no data; the rate schedule is a process-wide constant, so a
/// calculator can be shared or copied freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FareCalculator;

impl FareCalculator {
    pub const fn new() -> Self {
        Self
    }

    /// Price a validated trip.
    pub fn compute(&self, input: &FareInput) -> FareResult {
        let base_fare = BASE_FARE;
        let distance_charge = tiered_distance_charge(input.distance_km());
        let time_charge = time_charge(input.wait_minutes());
        let total_fare = base_fare + distance_charge + time_charge;

        let result = FareResult {
            base_fare: round_money(base_fare),
            distance_charge: round_money(distance_charge),
            time_charge: round_money(time_charge),
            total_fare: round_money(total_fare),
        };

        debug!(
            distance_km = %input.distance_km(),
            wait_minutes = %input.wait_minutes(),
            total_fare = %result.total_fare,
            "Fare computed"
        );

        result
    }
}

/// Price a trip from raw measurements.
///
/// Negative, NaN, infinite or oversized inputs fail with
/// [`DomainError::InvalidInput`](crate::support::errors::DomainError::InvalidInput)
/// and no partial result is produced.
pub fn compute_fare(distance_km: f64, wait_minutes: f64) -> DomainResult<FareResult> {
    let input = FareInput::from_f64(distance_km, wait_minutes)?;
    Ok(FareCalculator::new().compute(&input))
}
