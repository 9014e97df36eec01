//! Fare domain: input validation, distance schedule and fare calculation

pub mod calculator;
pub mod model;
pub mod schedule;

pub use calculator::{
    compute_fare, round_money, time_charge, FareCalculator, BASE_FARE, MONEY_SCALE,
    WAIT_RATE_PER_MINUTE,
};
pub use model::{format_money, FareInput, FareResult, CURRENCY, MAX_MEASUREMENT};
pub use schedule::{
    chargeable_km, distance_breakdown, tier_for, tiered_distance_charge, RateTier, TierCharge,
    FREE_DISTANCE_KM, RATE_SCHEDULE,
};
