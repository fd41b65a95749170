//! Cache naming and the precache asset list.

pub const CACHE_PREFIX: &str = "aqua-sentinel-";
pub const CACHE_VERSION: &str = "v1";

/// `aqua-sentinel-{version}`
pub fn cache_name(version: &str) -> String {
    format!("{}{}", CACHE_PREFIX, version)
}

const SAME_ORIGIN_ASSETS: [&str; 7] = [
    "/",
    "/index.html",
    "/manifest.json",
    "/assets/main.css",
    "/assets/favicon.ico",
    "/wasm/aqua-sentinel.js",
    "/wasm/aqua-sentinel_bg.wasm",
];

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap";

/// Assets pre-populated at install.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Paths relative to the worker's origin.
    pub same_origin: Vec<String>,
    /// Absolute URLs fetched in no-cors mode.
    pub cross_origin: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            same_origin: SAME_ORIGIN_ASSETS.iter().map(|s| s.to_string()).collect(),
            cross_origin: vec![FONT_STYLESHEET.to_string()],
        }
    }
}

impl Manifest {
    /// Every entry, same-origin paths resolved against `origin`.
    pub fn urls(&self, origin: &str) -> Vec<String> {
        let origin = origin.trim_end_matches('/');
        self.same_origin
            .iter()
            .map(|path| format!("{}{}", origin, path))
            .chain(self.cross_origin.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.same_origin.len() + self.cross_origin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn mode_for(&self, url: &str) -> crate::FetchMode {
        if self.cross_origin.iter().any(|u| u == url) {
            crate::FetchMode::NoCors
        } else {
            crate::FetchMode::SameOrigin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchMode;

    #[test]
    fn cache_name_has_prefix_and_version() {
        assert_eq!(cache_name(CACHE_VERSION), "aqua-sentinel-v1");
    }

    #[test]
    fn default_manifest_has_one_cross_origin_stylesheet() {
        let manifest = Manifest::default();
        assert_eq!(manifest.cross_origin.len(), 1);
        assert!(manifest.same_origin.iter().all(|p| p.starts_with('/')));
        assert!(manifest.same_origin.contains(&"/index.html".to_string()));
    }

    #[test]
    fn urls_resolve_against_origin() {
        let manifest = Manifest {
            same_origin: vec!["/".into(), "/a.css".into()],
            cross_origin: vec!["https://cdn.example.com/x.css".into()],
        };
        assert_eq!(
            manifest.urls("http://localhost:8080/"),
            vec![
                "http://localhost:8080/",
                "http://localhost:8080/a.css",
                "https://cdn.example.com/x.css"
            ]
        );
        assert_eq!(manifest.mode_for("https://cdn.example.com/x.css"), FetchMode::NoCors);
        assert_eq!(manifest.mode_for("http://localhost:8080/a.css"), FetchMode::SameOrigin);
    }
}
