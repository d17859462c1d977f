/// Default daisyUI build used by rendered pages
pub const DEFAULT_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/daisyui@4.12.10/dist/full.min.css";

/// Default Font Awesome build used for card icons
pub const DEFAULT_ICONS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

pub const DEFAULT_PAGE_TITLE: &str = "Donation Analytics";

/// Settings for the HTML page wrapped around the rendered panel
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Document title
    pub title: String,
    /// CSS framework stylesheet
    pub stylesheet_url: String,
    /// Icon font stylesheet
    pub icons_url: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            stylesheet_url: DEFAULT_STYLESHEET_URL.to_string(),
            icons_url: DEFAULT_ICONS_URL.to_string(),
        }
    }
}

/// Load a `.env` file into the process environment, if one exists.
///
/// Must run before the CLI is parsed so `env` fallbacks see the values.
pub fn load_env() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::trace!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }
}
