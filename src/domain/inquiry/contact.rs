//! Contact form: a general project inquiry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{EmailAddress, ValidationError};

/// Project categories offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryProjectType {
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "AI Automation")]
    AiAutomation,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    Strategy,
    Other,
}

impl InquiryProjectType {
    pub const ALL: [InquiryProjectType; 6] = [
        InquiryProjectType::WebApplication,
        InquiryProjectType::MobileApp,
        InquiryProjectType::AiAutomation,
        InquiryProjectType::UiUxDesign,
        InquiryProjectType::Strategy,
        InquiryProjectType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InquiryProjectType::WebApplication => "Web Application",
            InquiryProjectType::MobileApp => "Mobile App",
            InquiryProjectType::AiAutomation => "AI Automation",
            InquiryProjectType::UiUxDesign => "UI/UX Design",
            InquiryProjectType::Strategy => "Strategy",
            InquiryProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for InquiryProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InquiryProjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == trimmed)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "projectType",
                    format!("unknown project type '{}'", trimmed),
                )
            })
    }
}

/// Raw contact form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub message: String,
}

/// A validated contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub project_type: InquiryProjectType,
    pub message: String,
}

impl ContactMessage {
    /// Validates every field and reports all failures together.
    pub fn from_form(form: &ContactForm) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = form.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::empty_field("name"));
        }

        let email = EmailAddress::parse("email", &form.email).map_err(|e| errors.push(e));

        let project_type = if form.project_type.trim().is_empty() {
            Ok(InquiryProjectType::Other)
        } else {
            form.project_type.parse::<InquiryProjectType>()
        }
        .map_err(|e| errors.push(e));

        let message = form.message.trim();
        if message.is_empty() {
            errors.push(ValidationError::empty_field("message"));
        }

        match (email, project_type) {
            (Ok(email), Ok(project_type)) if errors.is_empty() => Ok(Self {
                name: name.to_string(),
                email,
                project_type,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: " Hedy ".to_string(),
            email: "hedy@lamarr.io".to_string(),
            project_type: "UI/UX Design".to_string(),
            message: "Redesign our app".to_string(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let msg = ContactMessage::from_form(&form()).unwrap();
        assert_eq!(msg.name, "Hedy");
        assert_eq!(msg.project_type, InquiryProjectType::UiUxDesign);
    }

    #[test]
    fn blank_project_type_defaults_to_other() {
        let mut f = form();
        f.project_type = String::new();
        let msg = ContactMessage::from_form(&f).unwrap();
        assert_eq!(msg.project_type, InquiryProjectType::Other);
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = ContactMessage::from_form(&ContactForm {
            project_type: "Blockchain".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "email", "projectType", "message"]);
    }

    #[test]
    fn project_type_labels_round_trip() {
        for t in InquiryProjectType::ALL {
            assert_eq!(t.label().parse::<InquiryProjectType>().unwrap(), t);
        }
    }
}
