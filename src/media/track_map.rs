//! Route path to soundtrack lookup.

use std::collections::{BTreeMap, HashMap};

use crate::error::ConfigError;

/// One ambient track: a short name plus the asset the audio element loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    pub name: String,
    pub asset: String,
}

/// Immutable mapping from route paths to tracks, with a default entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMap {
    tracks: Vec<Track>,
    routes: HashMap<String, usize>,
    default: usize,
}

impl TrackMap {
    pub fn build(
        tracks: &BTreeMap<String, String>,
        routes: &BTreeMap<String, String>,
        default_track: &str,
    ) -> Result<Self, ConfigError> {
        let tracks: Vec<Track> = tracks
            .iter()
            .map(|(name, asset)| Track {
                name: name.clone(),
                asset: asset.clone(),
            })
            .collect();
        let index_of = |name: &str| tracks.iter().position(|t| t.name == name);

        let default = index_of(default_track)
            .ok_or_else(|| ConfigError::MissingDefaultTrack(default_track.to_string()))?;

        let mut route_index = HashMap::with_capacity(routes.len());
        for (route, track) in routes {
            let idx = index_of(track).ok_or_else(|| ConfigError::UnknownTrack {
                route: route.clone(),
                track: track.clone(),
            })?;
            route_index.insert(normalize_path(route), idx);
        }

        Ok(Self {
            tracks,
            routes: route_index,
            default,
        })
    }

    /// Map where every path resolves to `track`.
    pub fn with_default(track: Track) -> Self {
        Self {
            tracks: vec![track],
            routes: HashMap::new(),
            default: 0,
        }
    }

    /// Resolves the track for `path`. Unmapped paths get the default track.
    pub fn select_track(&self, path: &str) -> &Track {
        let idx = self
            .routes
            .get(normalize_path(path).as_str())
            .copied()
            .unwrap_or(self.default);
        &self.tracks[idx]
    }

    #[cfg(test)]
    pub fn default_track(&self) -> &Track {
        &self.tracks[self.default]
    }

    /// Every distinct asset, for preloading.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|t| t.asset.as_str())
    }
}

/// Strips query and fragment and trims trailing slashes. Empty becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn site_tracks() -> TrackMap {
        SiteConfig::default().track_map().unwrap()
    }

    #[test]
    fn mapped_paths_resolve_to_their_track() {
        let map = site_tracks();
        assert_eq!(map.select_track("/").name, "home");
        assert_eq!(map.select_track("/projects").name, "projects");
        assert_eq!(map.select_track("/contact").asset, "/audio/contact.mp3");
    }

    #[test]
    fn documentation_shares_the_projects_track() {
        let map = site_tracks();
        assert_eq!(map.select_track("/documentation"), map.select_track("/projects"));
    }

    #[test]
    fn unmapped_paths_fall_back_to_default() {
        let map = site_tracks();
        for path in ["/missing", "/projects/extra", "", "nonsense", "/%20"] {
            assert_eq!(map.select_track(path), map.default_track(), "path {path:?}");
        }
    }

    #[test]
    fn paths_are_normalized_before_lookup() {
        let map = site_tracks();
        assert_eq!(map.select_track("/about/").name, "about");
        assert_eq!(map.select_track("/about?ref=nav").name, "about");
        assert_eq!(map.select_track("/skills#top").name, "skills");
        assert_eq!(map.select_track("skills").name, "skills");
    }

    #[test]
    fn normalize_path_edge_cases() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("?x=1"), "/");
        assert_eq!(normalize_path("/a/b/"), "/a/b");
    }

    #[test]
    fn single_track_map_resolves_everything() {
        let track = Track {
            name: "only".into(),
            asset: "/audio/only.mp3".into(),
        };
        let map = TrackMap::with_default(track.clone());
        assert_eq!(map.select_track("/about"), &track);
        assert_eq!(map.select_track("/"), &track);
    }

    #[test]
    fn assets_lists_each_track_once() {
        let map = site_tracks();
        let assets: Vec<&str> = map.assets().collect();
        assert_eq!(assets.len(), 6);
        assert!(assets.contains(&"/audio/projects.mp3"));
    }
}
