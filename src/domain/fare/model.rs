//! Fare domain values

use rust_decimal::Decimal;
use serde::Serialize;

use crate::support::errors::{DomainError, DomainResult};

/// Fixed display unit for every amount.
pub const CURRENCY: &str = "THB";

/// Largest accepted distance (km) or wait (minutes).
///
/// Keeps `value * rate` and the fare sum far inside the decimal range.
pub const MAX_MEASUREMENT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Validated trip measurements
///
/// Only [`FareInput::new`] and [`FareInput::from_f64`] build one, so every
/// value is non-negative and at most [`MAX_MEASUREMENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareInput {
    distance_km: Decimal,
    wait_minutes: Decimal,
}

impl FareInput {
    /// Build an input from already-decimal values.
    pub fn new(distance_km: Decimal, wait_minutes: Decimal) -> DomainResult<Self> {
        Ok(Self {
            distance_km: check_measurement("distance_km", distance_km)?,
            wait_minutes: check_measurement("wait_minutes", wait_minutes)?,
        })
    }

    /// Build an input from floating point measurements.
    ///
    /// NaN, infinities, negative values and magnitudes beyond the decimal
    /// range are rejected with [`DomainError::InvalidInput`].
    pub fn from_f64(distance_km: f64, wait_minutes: f64) -> DomainResult<Self> {
        let distance_km = to_decimal("distance_km", distance_km)?;
        let wait_minutes = to_decimal("wait_minutes", wait_minutes)?;
        Self::new(distance_km, wait_minutes)
    }

    pub fn distance_km(&self) -> Decimal {
        self.distance_km
    }

    pub fn wait_minutes(&self) -> Decimal {
        self.wait_minutes
    }
}

fn check_measurement(field: &'static str, value: Decimal) -> DomainResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::invalid_input(field, "must not be negative"));
    }
    if value > MAX_MEASUREMENT {
        return Err(DomainError::invalid_input(field, "is out of range"));
    }
    // drops the sign of -0
    Ok(value.abs())
}

fn to_decimal(field: &'static str, value: f64) -> DomainResult<Decimal> {
    if !value.is_finite() {
        return Err(DomainError::invalid_input(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(DomainError::invalid_input(field, "must not be negative"));
    }
    // Shortest round-trip form, so 1.333 becomes exactly 1.333 rather than
    // the nearest binary fraction.
    value
        .to_string()
        .parse::<Decimal>()
        .map_err(|_| DomainError::invalid_input(field, "is out of range"))
}

/// Priced trip, every field rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_fare: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub distance_charge: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub time_charge: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_fare: Decimal,
}

impl FareResult {
    /// Base fare plus distance charge, the "distance fare" shown to riders.
    pub fn distance_fare(&self) -> Decimal {
        self.base_fare + self.distance_charge
    }

    pub fn format_total(&self) -> String {
        format!("{} {}", format_money(self.total_fare), CURRENCY)
    }
}

/// Render an amount with exactly two decimals.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
