//! Pricing engine: quote input to estimated price range.
//!
//! The formula is linear:
//!
//! ```text
//! with_urgency = base * (1 + urgency * URGENCY_RATE)
//! with_addons  = with_urgency + (ai_integration ? AI_ADDON : 0)
//! low  = round(with_addons * (1 - BUFFER))
//! high = round(with_addons * (1 + BUFFER))
//! ```
//!
//! Rates are held in basis points and every intermediate value is an exact
//! integer (scaled by 10 000), so rounding never depends on float noise and
//! adding the AI add-on always shifts `low` by exactly `round(AI_ADDON * (1 - BUFFER))`.

use serde::{Deserialize, Serialize};

use super::{Platform, Urgency};

/// Fixed-point scale for rates expressed in basis points.
const BPS: u64 = 10_000;

/// Base rate in USD for a mobile app.
pub const MOBILE_BASE_RATE: u64 = 5_000;
/// Base rate in USD for a web app.
pub const WEB_BASE_RATE: u64 = 4_000;
/// Base rate in USD for an AI automation.
pub const AI_BASE_RATE: u64 = 6_000;
/// Multiplier growth per urgency point, in basis points (0.003).
pub const URGENCY_RATE_BPS: u64 = 30;
/// Flat USD add-on for AI integration.
pub const AI_ADDON_FLAT: u64 = 2_000;
/// Half-width of the range around the point estimate, in basis points (0.15).
pub const RANGE_BUFFER_BPS: u64 = 1_500;

/// Everything the pricing engine needs from the quote form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    pub platform: Platform,
    pub urgency: Urgency,
    pub ai_integration: bool,
    #[serde(default)]
    pub project_description: Option<String>,
}

impl Default for QuoteInput {
    fn default() -> Self {
        Self {
            platform: Platform::Web,
            urgency: Urgency::NONE,
            ai_integration: false,
            project_description: None,
        }
    }
}

/// Estimated price range in whole USD. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRange {
    pub low: u64,
    pub high: u64,
}

impl EstimateRange {
    /// Formats as `"$3.4k – $4.6k"`.
    pub fn display(&self) -> String {
        format!("{} – {}", format_price(self.low), format_price(self.high))
    }
}

/// Intermediate values of one estimate, for display and auditing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: u64,
    pub with_urgency: f64,
    pub with_addons: f64,
    pub range: EstimateRange,
}

/// Rate card used by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    pub mobile_base: u64,
    pub web_base: u64,
    pub ai_base: u64,
    pub urgency_rate_bps: u64,
    pub ai_addon: u64,
    pub buffer_bps: u64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            mobile_base: MOBILE_BASE_RATE,
            web_base: WEB_BASE_RATE,
            ai_base: AI_BASE_RATE,
            urgency_rate_bps: URGENCY_RATE_BPS,
            ai_addon: AI_ADDON_FLAT,
            buffer_bps: RANGE_BUFFER_BPS,
        }
    }
}

impl PricingTable {
    pub fn base_rate(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Mobile => self.mobile_base,
            Platform::Web => self.web_base,
            Platform::Ai => self.ai_base,
        }
    }

    /// Computes the estimated range for a quote. Pure and total.
    pub fn estimate(&self, input: &QuoteInput) -> EstimateRange {
        self.breakdown(input).range
    }

    /// Computes the estimate along with its intermediate values.
    pub fn breakdown(&self, input: &QuoteInput) -> PriceBreakdown {
        let base = self.base_rate(input.platform);
        let multiplier = BPS + u64::from(input.urgency.value()) * self.urgency_rate_bps;

        let with_urgency = base * multiplier;
        let addon = if input.ai_integration {
            self.ai_addon * BPS
        } else {
            0
        };
        let with_addons = with_urgency + addon;

        // Buffer is clamped so a misconfigured table cannot invert the range.
        let buffer = self.buffer_bps.min(BPS);
        let low = round_div(with_addons * (BPS - buffer), BPS * BPS);
        let high = round_div(with_addons * (BPS + buffer), BPS * BPS);

        PriceBreakdown {
            base,
            with_urgency: with_urgency as f64 / BPS as f64,
            with_addons: with_addons as f64 / BPS as f64,
            range: EstimateRange { low, high },
        }
    }
}

/// Estimate with the standard rate card.
pub fn estimate(input: &QuoteInput) -> EstimateRange {
    PricingTable::default().estimate(input)
}

/// Integer division rounding halves up, matching `Math.round` for non-negative values.
fn round_div(numerator: u64, denominator: u64) -> u64 {
    (numerator + denominator / 2) / denominator
}

/// Formats a USD amount: thousands as `$4.6k`, smaller amounts as `$950`.
pub fn format_price(amount: u64) -> String {
    if amount >= 1_000 {
        let tenths = round_div(amount, 100);
        format!("${}.{}k", tenths / 10, tenths % 10)
    } else {
        format!("${}", amount)
    }
}
