//! Pricing - the quote calculator's rate card and estimate formula.

mod estimate;
mod platform;
mod urgency;

pub use estimate::{
    estimate, format_price, EstimateRange, PriceBreakdown, PricingTable, QuoteInput,
    AI_ADDON_FLAT, AI_BASE_RATE, MOBILE_BASE_RATE, RANGE_BUFFER_BPS, URGENCY_RATE_BPS,
    WEB_BASE_RATE,
};
pub use platform::Platform;
pub use urgency::Urgency;
