use serde::Serialize;

/// A single label/value row in the system health widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthMetric {
    pub label: String,
    pub value: String,
}

/// System health widget. Values are placeholders until a real project
/// environment is wired up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemHealth {
    pub metrics: Vec<HealthMetric>,
}

impl SystemHealth {
    pub fn placeholder() -> Self {
        let metric = |label: &str, value: &str| HealthMetric {
            label: label.to_string(),
            value: value.to_string(),
        };
        Self {
            metrics: vec![
                metric("Uptime", "99.9%"),
                metric("Database", "Connected"),
                metric("Latest Deploy", "2h ago"),
            ],
        }
    }
}

impl Default for SystemHealth {
    fn default() -> Self {
        Self::placeholder()
    }
}
