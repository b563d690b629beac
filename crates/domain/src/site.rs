use crate::{
    display::{Position, Theme},
    shared::entity::ID,
};
use popify_utils::create_random_secret;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const API_KEY_LEN: usize = 30;

/// A `Site` is a website that embeds the widget. Every feed and tracking
/// request is scoped to a `Site` through its public `api_key`.
#[derive(Debug, Clone)]
pub struct Site {
    pub id: ID,
    pub name: String,
    pub domain: String,
    pub api_key: String,
    pub settings: SiteSettings,
}

impl Site {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            domain: domain.into(),
            api_key: Self::generate_api_key(),
            settings: Default::default(),
        }
    }

    pub fn generate_api_key() -> String {
        let rand_secret = create_random_secret(API_KEY_LEN);
        format!("pk_{}", rand_secret)
    }
}

/// Widget settings stored per `Site` and shipped with every feed response
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub position: Position,
    pub theme: Theme,
    pub show_avatar: bool,
    /// Visible duration in millis
    pub duration: u64,
    /// Inter notification delay in millis
    pub delay: u64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            position: Position::BottomLeft,
            theme: Theme::Light,
            show_avatar: true,
            duration: 5000,
            delay: 3000,
        }
    }
}

/// The opaque key a widget embedding is parameterized with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessKey(String);

impl AccessKey {
    /// Returns `None` for absent or blank keys
    pub fn parse(key: Option<&str>) -> Option<Self> {
        match key.map(str::trim) {
            Some(key) if !key.is_empty() => Some(Self(key.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_site() {
        let site = Site::new("Shop", "shop.example.com");
        assert!(site.api_key.starts_with("pk_"));
        assert_eq!(site.api_key.len(), API_KEY_LEN + 3);
        assert_eq!(site.settings, SiteSettings::default());
    }

    #[test]
    fn access_key_rejects_blank_values() {
        assert!(AccessKey::parse(None).is_none());
        assert!(AccessKey::parse(Some("")).is_none());
        assert!(AccessKey::parse(Some("   ")).is_none());
        assert_eq!(AccessKey::parse(Some(" pk_1 ")).unwrap().as_str(), "pk_1");
    }
}
