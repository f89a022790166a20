//! EstimateQuoteHandler - Query handler for the live quote estimate.

use crate::domain::pricing::{PriceBreakdown, PricingTable, QuoteInput};

/// Result of pricing one quote.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateQuoteResult {
    pub breakdown: PriceBreakdown,
    /// Formatted range, e.g. `"$3.4k – $4.6k"`.
    pub display: String,
}

/// Prices the quote form. Pure; called on every form change.
#[derive(Debug, Clone, Default)]
pub struct EstimateQuoteHandler {
    pricing: PricingTable,
}

impl EstimateQuoteHandler {
    pub fn new(pricing: PricingTable) -> Self {
        Self { pricing }
    }

    pub fn handle(&self, input: &QuoteInput) -> EstimateQuoteResult {
        let breakdown = self.pricing.breakdown(input);
        EstimateQuoteResult {
            display: breakdown.range.display(),
            breakdown,
        }
    }
}
