//! Localized message lookup keyed by [`MessageKey`].

use std::collections::HashMap;

/// Enumerated message identifiers used by the views in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ButtonCreateAccount,
    ButtonLogin,
    ButtonLoginGuest,
    ContentAdminLoginPrompt,
    ContentLoginDisabledPrompt,
    ContentLoginPrompt,
    ContentLoginPromptAlternative,
    ContentOr,
    DropdownPlaceholder,
    LinkAdminLogin,
    TextTooShort,
    TextTooLong,
    NumberTooSmall,
    NumberTooLarge,
}

impl MessageKey {
    pub const fn key_name(self) -> &'static str {
        match self {
            Self::ButtonCreateAccount => "button.createAccount",
            Self::ButtonLogin => "button.login",
            Self::ButtonLoginGuest => "button.guestLogin",
            Self::ContentAdminLoginPrompt => "content.adminLoginPrompt",
            Self::ContentLoginDisabledPrompt => "content.loginDisabledPrompt",
            Self::ContentLoginPrompt => "content.loginPrompt",
            Self::ContentLoginPromptAlternative => "content.alternativeLoginPrompt",
            Self::ContentOr => "content.or",
            Self::DropdownPlaceholder => "placeholder.noDropdownSelection",
            Self::LinkAdminLogin => "link.adminLogin",
            Self::TextTooShort => "validation.textTooShort",
            Self::TextTooLong => "validation.textTooLong",
            Self::NumberTooSmall => "validation.numberTooSmall",
            Self::NumberTooLarge => "validation.numberTooLarge",
        }
    }

    pub const fn all() -> [Self; 14] {
        [
            Self::ButtonCreateAccount,
            Self::ButtonLogin,
            Self::ButtonLoginGuest,
            Self::ContentAdminLoginPrompt,
            Self::ContentLoginDisabledPrompt,
            Self::ContentLoginPrompt,
            Self::ContentLoginPromptAlternative,
            Self::ContentOr,
            Self::DropdownPlaceholder,
            Self::LinkAdminLogin,
            Self::TextTooShort,
            Self::TextTooLong,
            Self::NumberTooSmall,
            Self::NumberTooLarge,
        ]
    }
}

/// Message lookup injected into views. Implementations must be safe for concurrent reads.
pub trait Messages: Send + Sync {
    /// Resolve `key`, substituting `{0}`, `{1}`, ... with `args`.
    fn at(&self, key: MessageKey, args: &[&str]) -> String;

    fn lang(&self) -> &str;
}

/// In-memory catalog for a single language.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    lang: String,
    entries: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            entries: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.entries.insert(key, template.into());
        self
    }

    pub fn en_us() -> Self {
        Self::new("en-US")
            .with_entry(MessageKey::ButtonCreateAccount, "Create account")
            .with_entry(MessageKey::ButtonLogin, "Log in")
            .with_entry(MessageKey::ButtonLoginGuest, "Continue as guest")
            .with_entry(
                MessageKey::ContentAdminLoginPrompt,
                "Are you a program or CiviForm administrator?",
            )
            .with_entry(
                MessageKey::ContentLoginDisabledPrompt,
                "Applicant login is currently unavailable. You can still apply as a guest.",
            )
            .with_entry(MessageKey::ContentLoginPrompt, "Log in with your {0} account")
            .with_entry(
                MessageKey::ContentLoginPromptAlternative,
                "Don't have an account?",
            )
            .with_entry(MessageKey::ContentOr, "or")
            .with_entry(MessageKey::DropdownPlaceholder, "Choose an option:")
            .with_entry(MessageKey::LinkAdminLogin, "Admin login")
            .with_entry(
                MessageKey::TextTooShort,
                "This answer must be at least {0} characters long.",
            )
            .with_entry(
                MessageKey::TextTooLong,
                "This answer must be at most {0} characters long.",
            )
            .with_entry(MessageKey::NumberTooSmall, "This number must be at least {0}.")
            .with_entry(MessageKey::NumberTooLarge, "This number must be at most {0}.")
    }
}

impl Messages for MessageCatalog {
    fn at(&self, key: MessageKey, args: &[&str]) -> String {
        match self.entries.get(&key) {
            Some(template) => interpolate(template, args),
            // Unknown keys render as the key name, which makes gaps obvious in QA.
            None => key.key_name().to_string(),
        }
    }

    fn lang(&self) -> &str {
        &self.lang
    }
}

/// Substitute `{N}` placeholders in one pass; argument text is never re-scanned.
fn interpolate(template: &str, args: &[&str]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });
        match placeholder {
            Some((arg, close)) => {
                rendered.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
