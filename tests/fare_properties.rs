use rust_decimal::Decimal;
use std::str::FromStr;

use taxi_fare::domain::fare::{tiered_distance_charge, RATE_SCHEDULE};
use taxi_fare::{compute_fare, DomainError, FareResult};

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn fare(distance_km: f64, wait_minutes: f64) -> FareResult {
    compute_fare(distance_km, wait_minutes).unwrap()
}

/// 0.0, 0.25, ... up to 120 km, crossing every tier boundary
fn distance_grid() -> Vec<f64> {
    (0..=480).map(|i| i as f64 * 0.25).collect()
}

#[test]
fn base_fare_is_constant() {
    for km in distance_grid() {
        assert_eq!(fare(km, 3.0).base_fare, d("35"));
    }
}

#[test]
fn total_is_non_decreasing_in_distance() {
    for wait in [0.0, 2.5, 15.0] {
        let mut previous = fare(0.0, wait).total_fare;
        for km in distance_grid() {
            let current = fare(km, wait).total_fare;
            assert!(current >= previous, "total dropped at {km} km, wait {wait}");
            previous = current;
        }
    }
}

#[test]
fn total_is_strictly_increasing_in_wait() {
    for km in [0.0, 5.0, 42.0, 90.0] {
        let mut previous = fare(km, 0.0).total_fare;
        for step in 1..=60 {
            let current = fare(km, step as f64 * 0.5).total_fare;
            assert!(current > previous, "total did not grow at {km} km, step {step}");
            previous = current;
        }
    }
}

#[test]
fn time_charge_is_linear() {
    for t in [0.0, 0.5, 1.0, 7.0, 12.25, 300.0] {
        let single = fare(0.0, t).time_charge;
        let double = fare(0.0, 2.0 * t).time_charge;
        assert_eq!(double, single * Decimal::TWO, "wait {t}");
    }
}

#[test]
fn total_matches_components_within_a_cent() {
    let tolerance = d("0.01");
    for km in [0.0, 1.333, 7.77, 19.999, 33.3333, 61.01, 150.123] {
        for wait in [0.0, 0.0015, 3.333, 9.999] {
            let r = fare(km, wait);
            let sum = r.base_fare + r.distance_charge + r.time_charge;
            assert!(
                (r.total_fare - sum).abs() <= tolerance,
                "km {km}, wait {wait}: total {} vs sum {}",
                r.total_fare,
                sum
            );
        }
    }
}

#[test]
fn all_fields_are_non_negative() {
    for km in distance_grid() {
        let r = fare(km, 1.5);
        assert!(r.base_fare >= Decimal::ZERO);
        assert!(r.distance_charge >= Decimal::ZERO);
        assert!(r.time_charge >= Decimal::ZERO);
        assert!(r.total_fare >= Decimal::ZERO);
    }
}

#[test]
fn distance_charge_has_no_jump_at_boundaries() {
    let epsilon = d("0.000001");
    let mut bound = Decimal::ONE;
    for tier in RATE_SCHEDULE.iter() {
        let Some(width) = tier.width_km else { break };
        bound += width;
        let left = tiered_distance_charge(bound - epsilon);
        let right = tiered_distance_charge(bound + epsilon);
        // at most two epsilons of the steepest rate apart
        assert!(right - left <= d("0.000021"), "jump at {bound} km");
    }
}

#[test]
fn flat_rate_policy_would_be_detected() {
    // 25 chargeable km: 10 * 6.5 + 10 * 7 + 5 * 8 = 175, a flat policy gives 200
    assert_eq!(fare(26.0, 0.0).distance_charge, d("175"));
}

#[test]
fn identical_inputs_give_identical_results() {
    let a = fare(58.8, 13.0);
    let b = fare(58.8, 13.0);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn invalid_inputs_are_rejected_without_result() {
    for (km, wait) in [(-0.1, 0.0), (0.0, -5.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
        match compute_fare(km, wait) {
            Err(DomainError::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput for ({km}, {wait}), got {other:?}"),
        }
    }
}
