//! Site configuration bundled with the build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::media::TrackMap;

const BUNDLED_CONFIG: &str = include_str!("../site.json");

pub const DEFAULT_VOLUME: f64 = 0.3;

/// Static settings for the soundtrack and the embedded players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_volume")]
    pub default_volume: f64,
    #[serde(default = "default_audio_element_id")]
    pub audio_element_id: String,
    pub default_track: String,
    /// Track name to asset path.
    pub tracks: BTreeMap<String, String>,
    /// Route path to track name.
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
    #[serde(default = "default_embed_origins")]
    pub embed_origins: Vec<String>,
    #[serde(default = "default_handshake_delay_ms")]
    pub embed_handshake_delay_ms: u32,
    #[serde(default = "default_handshake_attempts")]
    pub embed_handshake_attempts: u32,
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

fn default_audio_element_id() -> String {
    "site-soundtrack".to_string()
}

fn default_embed_origins() -> Vec<String> {
    vec![
        "https://www.youtube.com".to_string(),
        "https://www.youtube-nocookie.com".to_string(),
    ]
}

fn default_handshake_delay_ms() -> u32 {
    400
}

fn default_handshake_attempts() -> u32 {
    6
}

impl Default for SiteConfig {
    fn default() -> Self {
        let tracks = [
            ("home", "/audio/home.mp3"),
            ("about", "/audio/about.mp3"),
            ("projects", "/audio/projects.mp3"),
            ("skills", "/audio/skills.mp3"),
            ("experience", "/audio/experience.mp3"),
            ("contact", "/audio/contact.mp3"),
        ];
        let routes = [
            ("/", "home"),
            ("/about", "about"),
            ("/projects", "projects"),
            ("/skills", "skills"),
            ("/experience", "experience"),
            ("/documentation", "projects"),
            ("/contact", "contact"),
        ];

        Self {
            default_volume: DEFAULT_VOLUME,
            audio_element_id: default_audio_element_id(),
            default_track: "home".to_string(),
            tracks: tracks
                .iter()
                .map(|(name, asset)| (name.to_string(), asset.to_string()))
                .collect(),
            routes: routes
                .iter()
                .map(|(path, name)| (path.to_string(), name.to_string()))
                .collect(),
            embed_origins: default_embed_origins(),
            embed_handshake_delay_ms: default_handshake_delay_ms(),
            embed_handshake_attempts: default_handshake_attempts(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(raw)?;
        config.default_volume = normalize_volume(config.default_volume);
        config.track_map()?;
        Ok(config)
    }

    /// Loads the bundled `site.json`, falling back to built-in defaults.
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default site config: {err}");
                Self::default()
            }
        }
    }

    pub fn track_map(&self) -> Result<TrackMap, ConfigError> {
        TrackMap::build(&self.tracks, &self.routes, &self.default_track)
    }

    pub fn is_embed_origin(&self, origin: &str) -> bool {
        self.embed_origins.iter().any(|allowed| allowed == origin)
    }
}

/// Clamps a volume into `0.0..=1.0`, accepting percentages as well.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::from_json(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.default_track, "home");
        assert_eq!(config.audio_element_id, "site-soundtrack");
        assert_eq!(config.routes.get("/documentation").unwrap(), "projects");
    }

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(SiteConfig::load(), SiteConfig::default());
    }

    #[test]
    fn missing_default_track_is_rejected() {
        let raw = r#"{
            "default_track": "intro",
            "tracks": { "home": "/audio/home.mp3" }
        }"#;
        let err = SiteConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDefaultTrack(name) if name == "intro"));
    }

    #[test]
    fn route_to_unknown_track_is_rejected() {
        let raw = r#"{
            "default_track": "home",
            "tracks": { "home": "/audio/home.mp3" },
            "routes": { "/about": "about" }
        }"#;
        assert!(matches!(
            SiteConfig::from_json(raw),
            Err(ConfigError::UnknownTrack { .. })
        ));
    }

    #[test]
    fn optional_fields_take_defaults() {
        let raw = r#"{
            "default_track": "home",
            "tracks": { "home": "/audio/home.mp3" }
        }"#;
        let config = SiteConfig::from_json(raw).unwrap();
        assert_eq!(config.default_volume, DEFAULT_VOLUME);
        assert_eq!(config.embed_handshake_attempts, 6);
        assert!(config.is_embed_origin("https://www.youtube.com"));
        assert!(!config.is_embed_origin("https://example.com"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn volume_is_normalized() {
        assert_eq!(normalize_volume(0.5), 0.5);
        assert_eq!(normalize_volume(-1.0), 0.0);
        assert_eq!(normalize_volume(80.0), 0.8);
        assert_eq!(normalize_volume(f64::NAN), DEFAULT_VOLUME);
    }
}
