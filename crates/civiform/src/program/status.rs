use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text keyed by language tag, e.g. `en-US`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedStrings {
    translations: BTreeMap<String, String>,
}

impl LocalizedStrings {
    pub const DEFAULT_LOCALE: &'static str = "en-US";

    pub fn with_default(text: impl Into<String>) -> Self {
        Self::default().with_translation(Self::DEFAULT_LOCALE, text)
    }

    pub fn with_translation(mut self, locale: &str, text: impl Into<String>) -> Self {
        self.translations.insert(locale.to_string(), text.into());
        self
    }

    /// Translation for `locale`, falling back to the default locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.translations
            .get(locale)
            .or_else(|| self.translations.get(Self::DEFAULT_LOCALE))
            .map(String::as_str)
    }

    pub fn default_text(&self) -> Option<&str> {
        self.get(Self::DEFAULT_LOCALE)
    }

    /// Translations with visible text, in locale order.
    pub fn non_blank(&self) -> impl Iterator<Item = &str> {
        self.translations
            .values()
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}

/// One program-defined review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub status_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_email_body_text: Option<LocalizedStrings>,
}

impl Status {
    pub fn new(status_text: impl Into<String>) -> Self {
        Self {
            status_text: status_text.into(),
            localized_email_body_text: None,
        }
    }

    pub fn with_email(mut self, body: LocalizedStrings) -> Self {
        self.localized_email_body_text = Some(body);
        self
    }

    /// Notification body for `locale`, then the default locale, then any other translation.
    /// Blank translations count as not configured.
    pub fn email_body(&self, locale: &str) -> Option<&str> {
        let body = self.localized_email_body_text.as_ref()?;
        body.get(locale)
            .filter(|text| !text.trim().is_empty())
            .or_else(|| body.non_blank().next())
    }

    pub fn has_email(&self) -> bool {
        self.email_body(LocalizedStrings::DEFAULT_LOCALE).is_some()
    }
}

/// Ordered statuses configured for a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDefinitions {
    statuses: Vec<Status>,
}

impl StatusDefinitions {
    pub fn new(statuses: Vec<Status>) -> Self {
        Self { statuses }
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn find(&self, status_text: &str) -> Option<&Status> {
        self.statuses
            .iter()
            .find(|status| status.status_text == status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_body_falls_back_to_default_locale() {
        let status = Status::new("Approved").with_email(
            LocalizedStrings::with_default("You are approved")
                .with_translation("es-US", "Está aprobado"),
        );
        assert_eq!(status.email_body("es-US"), Some("Está aprobado"));
        assert_eq!(status.email_body("zh-TW"), Some("You are approved"));
        assert!(status.has_email());
    }

    #[test]
    fn blank_email_body_is_not_configured() {
        let status = Status::new("Denied").with_email(LocalizedStrings::with_default("  "));
        assert!(!status.has_email());
        assert!(!Status::new("Waitlisted").has_email());
    }

    #[test]
    fn translation_without_default_still_counts_as_email() {
        let status = Status::new("Waitlisted").with_email(
            LocalizedStrings::default().with_translation("es-US", "Está en lista de espera"),
        );
        assert!(status.has_email());
        assert_eq!(
            status.email_body(LocalizedStrings::DEFAULT_LOCALE),
            Some("Está en lista de espera")
        );
    }

    #[test]
    fn find_matches_exact_text() {
        let definitions =
            StatusDefinitions::new(vec![Status::new("Approved"), Status::new("Denied")]);
        assert!(definitions.find("Denied").is_some());
        assert!(definitions.find("denied").is_none());
    }
}
