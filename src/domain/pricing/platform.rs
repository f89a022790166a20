//! Platform type offered by the quote calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// What kind of product the client wants built.
///
/// Each platform maps to one base-rate tier in the [`PricingTable`](super::PricingTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Web,
    Ai,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Mobile, Platform::Web, Platform::Ai];

    /// Wire value used in forms and in the stored proposal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Web => "web",
            Platform::Ai => "ai",
        }
    }

    /// Human-readable project type, as shown on proposals and sent to checkout.
    pub fn project_type_label(&self) -> &'static str {
        match self {
            Platform::Mobile => "Mobile App",
            Platform::Web => "Web App",
            Platform::Ai => "AI Automation",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Web
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mobile" => Ok(Platform::Mobile),
            "web" => Ok(Platform::Web),
            "ai" => Ok(Platform::Ai),
            other => Err(ValidationError::invalid_format(
                "platform",
                format!("expected one of mobile, web, ai; got '{}'", other),
            )),
        }
    }
}
