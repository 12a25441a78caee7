//! UI preference tokens persisted beside the document
//!
//! Each preference lives under its own storage key and is written the moment the user
//! changes it; none of them go through the document or its migrations. Unknown stored
//! tokens fall back to the defaults.

/// Colour scheme of the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn token(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Display language of the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    German,
}

impl Language {
    pub fn token(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "en" => Some(Language::English),
            "de" => Some(Language::German),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Mirror of the platform's notification permission, so the UI can avoid asking again
/// after the user said no
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyPermission {
    /// Never asked, or the user dismissed the prompt
    Default,
    Granted,
    Denied,
}

impl NotifyPermission {
    pub fn token(self) -> &'static str {
        match self {
            NotifyPermission::Default => "default",
            NotifyPermission::Granted => "granted",
            NotifyPermission::Denied => "denied",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "default" => Some(NotifyPermission::Default),
            "granted" => Some(NotifyPermission::Granted),
            "denied" => Some(NotifyPermission::Denied),
            _ => None,
        }
    }
}

impl Default for NotifyPermission {
    fn default() -> Self {
        NotifyPermission::Default
    }
}
