//! Receipt rendering for a priced trip

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::fare::{format_money, round_money, FareResult, TierCharge, CURRENCY};

/// Symbol used on breakdown rows.
pub const CURRENCY_SYMBOL: &str = "฿";

/// One labelled amount on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub label: String,
    pub amount: String,
}

/// Display form of a [`FareResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareReceipt {
    /// Headline, e.g. `"149.00 THB"`
    pub total: String,
    pub lines: Vec<ReceiptLine>,
}

impl FareReceipt {
    /// Headline total plus the two rows riders see: distance fare (base +
    /// distance charge) and traffic wait.
    pub fn from_result(result: &FareResult, wait_minutes: Decimal) -> Self {
        let lines = vec![
            ReceiptLine {
                label: "Distance fare".to_string(),
                amount: symbol_amount(result.distance_fare()),
            },
            ReceiptLine {
                label: format!("Traffic wait ({} min)", wait_minutes.normalize()),
                amount: symbol_amount(result.time_charge),
            },
        ];

        Self {
            total: result.format_total(),
            lines,
        }
    }

    /// Append per-tier detail rows below the summary.
    ///
    /// Each row is rounded like the fare itself. Only the last consumed tier
    /// can be partial, so the rows add up to the rounded distance charge.
    pub fn with_tiers(mut self, tiers: &[TierCharge]) -> Self {
        for line in tiers {
            self.lines.push(ReceiptLine {
                label: format!(
                    "  Tier {}: {} km x {}",
                    line.tier,
                    line.km.normalize(),
                    format_money(line.rate_per_km)
                ),
                amount: symbol_amount(round_money(line.amount)),
            });
        }
        self
    }
}

fn symbol_amount(amount: Decimal) -> String {
    format!("{} {}", format_money(amount), CURRENCY_SYMBOL)
}

impl fmt::Display for FareReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        let width = self
            .lines
            .iter()
            .map(|l| l.label.chars().count())
            .max()
            .unwrap_or(0);
        for line in &self.lines {
            writeln!(f, "  {:<width$}  {:>12}", line.label, line.amount, width = width)?;
        }
        Ok(())
    }
}

/// Render the rate schedule as a table.
pub fn render_schedule() -> String {
    use crate::domain::fare::{FREE_DISTANCE_KM, RATE_SCHEDULE};

    let mut out = format!(
        "First {} km included in base fare. Rates per chargeable km ({}):\n",
        FREE_DISTANCE_KM, CURRENCY
    );
    let mut lower = Decimal::ZERO;
    for tier in RATE_SCHEDULE.iter() {
        let range = match tier.width_km {
            Some(width) => {
                let upper = lower + width;
                let r = format!("{} - {} km", lower, upper);
                lower = upper;
                r
            }
            None => format!("over {} km", lower),
        };
        out.push_str(&format!(
            "  Tier {}  {:<14} {:>6}\n",
            tier.number,
            range,
            format_money(tier.rate_per_km)
        ));
    }
    out
}
