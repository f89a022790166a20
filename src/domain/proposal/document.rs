//! Read model for the proposal page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::pricing::format_price;

use super::PendingProposal;

/// One row of the proposal's line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub item: String,
    pub notes: String,
}

impl LineItem {
    fn new(item: &str, notes: impl Into<String>) -> Self {
        Self {
            item: item.to_string(),
            notes: notes.into(),
        }
    }
}

/// A pending proposal laid out for display. Field values are taken verbatim
/// from the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalDocument {
    pub prepared_on: String,
    pub client_name: String,
    pub client_email: String,
    pub project_type: String,
    pub line_items: Vec<LineItem>,
    pub estimate_low: u64,
    pub estimate_high: u64,
    pub total_display: String,
    pub project_description: Option<String>,
}

impl ProposalDocument {
    pub fn render(proposal: &PendingProposal, prepared_on: NaiveDate) -> Self {
        let mut line_items = vec![
            LineItem::new("Project type", proposal.project_type_label.clone()),
            LineItem::new(
                "Add-ons",
                if proposal.ai_integration {
                    "AI Integration"
                } else {
                    "None"
                },
            ),
        ];
        if proposal.urgency.is_rush() {
            line_items.push(LineItem::new("Urgency", proposal.urgency.to_string()));
        }

        let description = proposal.project_description.trim();

        Self {
            prepared_on: prepared_on.format("%B %-d, %Y").to_string(),
            client_name: proposal.name.clone(),
            client_email: proposal.email.to_string(),
            project_type: proposal.project_type_label.clone(),
            line_items,
            estimate_low: proposal.estimate_low,
            estimate_high: proposal.estimate_high,
            total_display: format!(
                "{} – {}",
                format_price(proposal.estimate_low),
                format_price(proposal.estimate_high)
            ),
            project_description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EmailAddress;
    use crate::domain::pricing::{Platform, Urgency};

    fn proposal(urgency: i64, ai: bool, description: &str) -> PendingProposal {
        PendingProposal {
            name: "Margaret".to_string(),
            email: EmailAddress::parse("email", "margaret@apollo.gov").unwrap(),
            platform: Platform::Mobile,
            urgency: Urgency::try_new(urgency).unwrap(),
            ai_integration: ai,
            project_description: description.to_string(),
            estimate_low: 4250,
            estimate_high: 5750,
            project_type_label: "Mobile App".to_string(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 8).unwrap()
    }

    #[test]
    fn renders_header_and_total() {
        let doc = ProposalDocument::render(&proposal(0, false, ""), date());
        assert_eq!(doc.prepared_on, "October 8, 2026");
        assert_eq!(doc.client_name, "Margaret");
        assert_eq!(doc.total_display, "$4.3k – $5.8k");
    }

    #[test]
    fn omits_urgency_row_without_rush() {
        let doc = ProposalDocument::render(&proposal(0, false, ""), date());
        let items: Vec<&str> = doc.line_items.iter().map(|l| l.item.as_str()).collect();
        assert_eq!(items, vec!["Project type", "Add-ons"]);
        assert_eq!(doc.line_items[1].notes, "None");
    }

    #[test]
    fn includes_urgency_and_ai_rows() {
        let doc = ProposalDocument::render(&proposal(25, true, ""), date());
        assert_eq!(doc.line_items[1].notes, "AI Integration");
        assert_eq!(doc.line_items[2], LineItem::new("Urgency", "25% rush"));
    }

    #[test]
    fn trims_description_and_drops_blank() {
        let doc = ProposalDocument::render(&proposal(0, false, "  Field app  "), date());
        assert_eq!(doc.project_description.as_deref(), Some("Field app"));

        let doc = ProposalDocument::render(&proposal(0, false, "   "), date());
        assert_eq!(doc.project_description, None);
    }
}
