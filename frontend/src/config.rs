/// Build-time settings for the site, resolved once in `main` and handed to the
/// component tree through a `ContextProvider`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the collection API. Empty means same origin.
    pub backend_url: String,
    /// Scene file the 3D hero viewer renders.
    pub scene_url: String,
    /// Module script that defines the `<spline-viewer>` element.
    pub viewer_script_url: String,
}

const DEFAULT_SCENE_URL: &str = "/assets/hero/scene.splinecode";
const DEFAULT_VIEWER_SCRIPT_URL: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.28/build/spline-viewer.js";

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL").unwrap_or("").to_string(),
            scene_url: option_env!("HERO_SCENE_URL")
                .unwrap_or(DEFAULT_SCENE_URL)
                .to_string(),
            viewer_script_url: option_env!("HERO_VIEWER_URL")
                .unwrap_or(DEFAULT_VIEWER_SCRIPT_URL)
                .to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::from_build_env()
        }
    }

    pub fn collection_endpoint(&self) -> String {
        format!("{}/api/collection", self.backend_url.trim_end_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
