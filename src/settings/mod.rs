//! The persisted settings object.

mod store;

pub use store::{SettingsStore, TomlFileStore};

use serde::{Deserialize, Serialize};

/// Everything the panel persists, one flat field per widget plus the
/// constants. Field set and binding set stay in lockstep: every
/// widget-backed field here has exactly one binding in the options form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Backend endpoint the client talks to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Token sent to the backend as basic auth.
    #[serde(default)]
    pub token: String,

    /// Show full error chains in user-facing reports.
    #[serde(default)]
    pub verbose_errors_on: bool,

    /// Show visit contexts in the popup.
    #[serde(default)]
    pub contexts_popup_on: bool,

    /// Detect URLs while rendering the sidebar.
    #[serde(default)]
    pub detect_sidebar_urls: bool,

    /// Highlight visited links on the page.
    #[serde(default = "default_highlight_on")]
    pub highlight_on: bool,

    /// Show visit markers. Not widget-backed yet; stored as a constant.
    #[serde(default = "default_dots")]
    pub dots: bool,

    /// Hosts excluded from tracking, one per line.
    #[serde(default)]
    pub blacklist: String,

    /// Filter list definitions (json).
    #[serde(default)]
    pub filterlists: String,

    /// Source map overrides (json).
    #[serde(default)]
    pub src_map: String,

    /// Position overrides for injected UI (css).
    #[serde(default)]
    pub position_css: String,

    /// Extra styling applied to injected UI (css).
    #[serde(default)]
    pub extra_css: String,
}

fn default_host() -> String {
    // The backend server listens on 13131 unless configured otherwise.
    "http://localhost:13131".to_string()
}

fn default_highlight_on() -> bool {
    true
}

fn default_dots() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: String::new(),
            verbose_errors_on: false,
            contexts_popup_on: false,
            detect_sidebar_urls: false,
            highlight_on: default_highlight_on(),
            dots: default_dots(),
            blacklist: String::new(),
            filterlists: String::new(),
            src_map: String::new(),
            position_css: String::new(),
            extra_css: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_loads_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.host, "http://localhost:13131");
        assert!(settings.highlight_on);
        assert!(settings.dots);
    }

    #[test]
    fn schema_has_every_field() {
        use std::collections::BTreeSet;

        let value = serde_json::to_value(Settings::default()).unwrap();
        let keys: BTreeSet<_> = value.as_object().unwrap().keys().cloned().collect();
        let expected: BTreeSet<_> = [
            "host",
            "token",
            "verbose_errors_on",
            "contexts_popup_on",
            "detect_sidebar_urls",
            "highlight_on",
            "dots",
            "blacklist",
            "filterlists",
            "src_map",
            "position_css",
            "extra_css",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn toml_round_trips() {
        let mut settings = Settings::default();
        settings.token = "tok".to_string();
        settings.extra_css = ".sidebar { color: red }".to_string();

        let doc = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&doc).unwrap();
        assert_eq!(back, settings);
    }
}
