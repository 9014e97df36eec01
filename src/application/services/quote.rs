//! Quote service for pricing trips

use serde::Serialize;
use tracing::{info, warn};

use crate::application::input::FareRequest;
use crate::application::receipt::FareReceipt;
use crate::domain::fare::{distance_breakdown, FareCalculator, FareInput, FareResult, TierCharge};
use crate::domain::DomainResult;

/// A priced trip with its per-tier detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareQuote {
    #[serde(flatten)]
    pub fare: FareResult,
    pub tiers: Vec<TierCharge>,
    #[serde(skip)]
    pub input: FareInput,
}

impl FareQuote {
    pub fn receipt(&self) -> FareReceipt {
        FareReceipt::from_result(&self.fare, self.input.wait_minutes())
    }

    pub fn detailed_receipt(&self) -> FareReceipt {
        self.receipt().with_tiers(&self.tiers)
    }
}

/// Service for quoting fares
#[derive(Debug, Clone, Default)]
pub struct FareQuoteService {
    calculator: FareCalculator,
}

impl FareQuoteService {
    pub fn new(calculator: FareCalculator) -> Self {
        Self { calculator }
    }

    pub fn quote(&self, input: FareInput) -> FareQuote {
        let fare = self.calculator.compute(&input);
        let tiers = distance_breakdown(input.distance_km());

        info!(
            distance_km = %input.distance_km(),
            wait_minutes = %input.wait_minutes(),
            total_fare = %fare.total_fare,
            tiers = tiers.len(),
            "Fare quoted"
        );

        FareQuote { fare, tiers, input }
    }

    /// Validate a form request, then quote it.
    pub fn quote_request(&self, request: FareRequest) -> DomainResult<FareQuote> {
        let input = request.into_input().map_err(|e| {
            warn!(
                distance_km = request.distance_km,
                wait_minutes = request.wait_minutes,
                error = %e,
                "Fare request rejected"
            );
            e
        })?;

        Ok(self.quote(input))
    }

    /// Quote straight from the two text fields of the form.
    pub fn quote_text(&self, distance: &str, wait_time: &str) -> DomainResult<FareQuote> {
        self.quote_request(FareRequest::from_text(distance, wait_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn quote_includes_tiers() {
        let service = FareQuoteService::default();
        let quote = service.quote(FareInput::new(d("45"), d("2")).unwrap());
        // 65 + 70 + 160 + 4 * 8.5 = 329
        assert_eq!(quote.fare.distance_charge, d("329"));
        assert_eq!(quote.fare.time_charge, d("6"));
        assert_eq!(quote.fare.total_fare, d("370"));
        assert_eq!(quote.tiers.len(), 4);
    }

    #[test]
    fn quote_text_parses_leniently() {
        let service = FareQuoteService::default();
        let quote = service.quote_text("11 km", "").unwrap();
        assert_eq!(quote.fare.total_fare, d("100"));
        assert!(quote.input.wait_minutes().is_zero());
    }

    #[test]
    fn quote_request_rejects_negative_values() {
        let service = FareQuoteService::default();
        let err = service.quote_text("5", "-3").unwrap_err();
        assert_eq!(err.field(), "wait_minutes");
    }

    #[test]
    fn quote_serializes_flat_fare_fields() {
        let service = FareQuoteService::default();
        let quote = service.quote_text("12", "1").unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["totalFare"], serde_json::json!(110.0));
        assert_eq!(json["tiers"][0]["tier"], serde_json::json!(1));
        assert_eq!(json["tiers"][1]["km"], serde_json::json!(1.0));
        assert!(json.get("input").is_none());
    }

    #[test]
    fn receipts_follow_quote() {
        let service = FareQuoteService::default();
        let quote = service.quote_text("21", "2").unwrap();
        assert_eq!(quote.receipt().lines.len(), 2);
        assert_eq!(quote.detailed_receipt().lines.len(), 4);
        assert_eq!(quote.receipt().total, "176.00 THB");
    }
}
