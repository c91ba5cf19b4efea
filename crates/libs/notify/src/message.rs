use serde::{Deserialize, Serialize};

/// A validated contact-form submission, ready for delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: Option<String>,
}

impl ContactMessage {
    /// Copy with surrounding whitespace stripped from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            subject: self
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|subject| !subject.is_empty())
                .map(str::to_string),
        }
    }

    /// The submitted subject, or the fixed per-site default.
    #[must_use]
    pub fn subject_or_default(&self, site_name: &str) -> String {
        self.subject
            .clone()
            .unwrap_or_else(|| format!("New Contact Form Submission from {site_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_strips_whitespace_and_empties_subject() {
        let message = ContactMessage {
            name: "  Ada  ".to_string(),
            email: " ada@example.com ".to_string(),
            message: " hello ".to_string(),
            subject: Some("   ".to_string()),
        };
        let trimmed = message.trimmed();
        assert_eq!(trimmed.name, "Ada");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.message, "hello");
        assert_eq!(trimmed.subject, None);
    }

    #[test]
    fn subject_defaults_per_site() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hello".to_string(),
            subject: None,
        };
        assert_eq!(
            message.subject_or_default("example.com"),
            "New Contact Form Submission from example.com"
        );
    }
}
