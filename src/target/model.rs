// src/target/model.rs
use serde::{Serialize, Deserialize};

/// Placeholder token in a URL template that receives the username
pub const USERNAME_PLACEHOLDER: &str = "{}";

/// How a service signals that an account does not exist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DetectionStrategy {
    /// Any status other than 200 means absence
    StatusCode,
    /// The tag-stripped body contains an error text
    BodyContains,
    /// The final URL after redirects contains an error fragment
    RedirectUrlContains,
    /// Anything else found in a target file. Always classified as found.
    Unrecognized(String),
}

impl DetectionStrategy {
    /// Map the `errorType` value of a target file onto a strategy
    pub fn from_error_type(error_type: Option<&str>) -> Self {
        match error_type {
            Some("status_code") => DetectionStrategy::StatusCode,
            Some("message") => DetectionStrategy::BodyContains,
            Some("response_url") => DetectionStrategy::RedirectUrlContains,
            Some(other) => DetectionStrategy::Unrecognized(other.to_string()),
            None => DetectionStrategy::Unrecognized(String::new()),
        }
    }
}

/// One service to probe. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Target {
    pub name: String,
    pub url_template: String,
    pub detection_strategy: DetectionStrategy,
    pub error_text: Option<String>,
    pub error_url_fragment: Option<String>,
    pub rejects_periods: bool,
}

impl Target {
    /// Create a target with a status-code strategy and no username constraints
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            detection_strategy: DetectionStrategy::StatusCode,
            error_text: None,
            error_url_fragment: None,
            rejects_periods: false,
        }
    }

    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.detection_strategy = DetectionStrategy::BodyContains;
        self.error_text = Some(text.into());
        self
    }

    pub fn with_error_url(mut self, fragment: impl Into<String>) -> Self {
        self.detection_strategy = DetectionStrategy::RedirectUrlContains;
        self.error_url_fragment = Some(fragment.into());
        self
    }

    pub fn with_strategy(mut self, strategy: DetectionStrategy) -> Self {
        self.detection_strategy = strategy;
        self
    }

    pub fn rejecting_periods(mut self) -> Self {
        self.rejects_periods = true;
        self
    }

    /// Substitute the username into the first placeholder only
    pub fn resolve_url(&self, username: &str) -> String {
        self.url_template.replacen(USERNAME_PLACEHOLDER, username, 1)
    }

    /// Whether this target refuses the username before any request is made
    pub fn rejects(&self, username: &str) -> bool {
        self.rejects_periods && username.contains('.')
    }
}

/// A target entry exactly as it appears in the JSON target file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetRecord {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "errorType", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(rename = "errorMsg", default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    #[serde(rename = "errorUrl", default, skip_serializing_if = "Option::is_none")]
    pub error_url: Option<String>,
    #[serde(rename = "noPeriod", default, skip_serializing_if = "Option::is_none")]
    pub no_period: Option<String>,
}

impl TargetRecord {
    /// Convert a file record into a target, keyed by its service name
    pub fn into_target(self, name: String) -> Target {
        Target {
            name,
            url_template: self.url,
            detection_strategy: DetectionStrategy::from_error_type(self.error_type.as_deref()),
            error_text: self.error_msg,
            error_url_fragment: self.error_url,
            // only the literal string "True" switches the restriction on
            rejects_periods: self.no_period.as_deref() == Some("True"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_replaces_first_placeholder_only() {
        let target = Target::new("Twice", "https://example.test/{}/{}");
        assert_eq!(target.resolve_url("alice"), "https://example.test/alice/{}");
    }

    #[test]
    fn test_rejects_only_when_flag_and_period() {
        let strict = Target::new("NoDots", "https://x.test/{}").rejecting_periods();
        let lax = Target::new("Dots", "https://x.test/{}");

        assert!(strict.rejects("a.b"));
        assert!(!strict.rejects("ab"));
        assert!(!lax.rejects("a.b"));
    }

    #[test]
    fn test_record_conversion() {
        let record = TargetRecord {
            url: "https://x.test/{}".to_string(),
            error_type: Some("message".to_string()),
            error_msg: Some("Page not found".to_string()),
            error_url: None,
            no_period: Some("True".to_string()),
        };

        let target = record.into_target("X".to_string());
        assert_eq!(target.name, "X");
        assert_eq!(target.detection_strategy, DetectionStrategy::BodyContains);
        assert_eq!(target.error_text.as_deref(), Some("Page not found"));
        assert!(target.rejects_periods);
    }

    #[test]
    fn test_no_period_requires_literal_true() {
        let record = TargetRecord {
            url: "https://x.test/{}".to_string(),
            no_period: Some("true".to_string()),
            ..Default::default()
        };
        assert!(!record.into_target("X".to_string()).rejects_periods);
    }

    #[test]
    fn test_unknown_error_type_is_unrecognized() {
        assert_eq!(
            DetectionStrategy::from_error_type(Some("json_path")),
            DetectionStrategy::Unrecognized("json_path".to_string())
        );
        assert_eq!(
            DetectionStrategy::from_error_type(None),
            DetectionStrategy::Unrecognized(String::new())
        );
    }
}
