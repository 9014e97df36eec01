//! Distance rate schedule
//!
//! The first kilometre of every trip is covered by the base fare. Everything
//! after it is "chargeable" and priced marginally: each tier bills only the
//! kilometres that fall inside its own width, like a progressive tax bracket.
//!
//! | Tier | Chargeable km | THB/km |
//! |------|---------------|--------|
//! | 1    | 0 – 10        | 6.50   |
//! | 2    | 10 – 20       | 7.00   |
//! | 3    | 20 – 40       | 8.00   |
//! | 4    | 40 – 60       | 8.50   |
//! | 5    | 60 – 80       | 9.00   |
//! | 6    | 80 – ∞        | 10.50  |
//!
//! A chargeable distance sitting exactly on an upper bound (10, 20, 40, 60,
//! 80) belongs to the lower tier. Marginal pricing makes the charged amount
//! identical either way; the convention only matters for [`tier_for`].

use rust_decimal::Decimal;
use serde::Serialize;

/// Distance covered by the base fare, in km.
pub const FREE_DISTANCE_KM: Decimal = Decimal::ONE;

/// One bracket of the distance schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTier {
    /// 1-based position in the schedule
    pub number: u8,
    /// Width of the bracket in chargeable km; `None` for the open-ended last tier
    #[serde(with = "rust_decimal::serde::float_option")]
    pub width_km: Option<Decimal>,
    /// Price per km inside this bracket (THB)
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_per_km: Decimal,
}

impl RateTier {
    const fn bounded(number: u8, width_km: u32, rate_satang: u32) -> Self {
        Self {
            number,
            width_km: Some(Decimal::from_parts(width_km, 0, 0, false, 0)),
            rate_per_km: Decimal::from_parts(rate_satang, 0, 0, false, 2),
        }
    }

    const fn open(number: u8, rate_satang: u32) -> Self {
        Self {
            number,
            width_km: None,
            rate_per_km: Decimal::from_parts(rate_satang, 0, 0, false, 2),
        }
    }
}

/// The fixed distance schedule, ordered from the cheapest bracket upwards.
pub static RATE_SCHEDULE: [RateTier; 6] = [
    RateTier::bounded(1, 10, 650),
    RateTier::bounded(2, 10, 700),
    RateTier::bounded(3, 20, 800),
    RateTier::bounded(4, 20, 850),
    RateTier::bounded(5, 20, 900),
    RateTier::open(6, 1050),
];

/// Portion of a trip billed inside one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCharge {
    pub tier: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub km: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_per_km: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Kilometres of `distance_km` that are priced by the schedule.
pub fn chargeable_km(distance_km: Decimal) -> Decimal {
    if distance_km <= FREE_DISTANCE_KM {
        Decimal::ZERO
    } else {
        distance_km - FREE_DISTANCE_KM
    }
}

/// Split a trip across the tiers it consumes.
///
/// Tiers with nothing billed are omitted, so a trip of 1 km or less yields
/// an empty breakdown. Amounts are unrounded. Distances are expected to be
/// bounded by [`MAX_MEASUREMENT`](super::model::MAX_MEASUREMENT).
pub fn distance_breakdown(distance_km: Decimal) -> Vec<TierCharge> {
    let mut remaining = chargeable_km(distance_km);
    let mut lines = Vec::new();

    for tier in RATE_SCHEDULE.iter() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let km = match tier.width_km {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        lines.push(TierCharge {
            tier: tier.number,
            km,
            rate_per_km: tier.rate_per_km,
            amount: km * tier.rate_per_km,
        });
        remaining -= km;
    }

    lines
}

/// Unrounded distance charge for a trip of `distance_km`.
pub fn tiered_distance_charge(distance_km: Decimal) -> Decimal {
    distance_breakdown(distance_km)
        .iter()
        .map(|line| line.amount)
        .sum()
}

/// Tier that a chargeable distance falls into.
///
/// Upper bounds are inclusive: exactly 10 chargeable km is tier 1, not 2.
/// Returns `None` when nothing is chargeable.
pub fn tier_for(chargeable_km: Decimal) -> Option<&'static RateTier> {
    if chargeable_km <= Decimal::ZERO {
        return None;
    }

    let mut upper = Decimal::ZERO;
    for tier in RATE_SCHEDULE.iter() {
        match tier.width_km {
            Some(width) => {
                upper += width;
                if chargeable_km <= upper {
                    return Some(tier);
                }
            }
            None => return Some(tier),
        }
    }

    RATE_SCHEDULE.last()
}
