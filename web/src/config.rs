//! Build-time settings for the client.

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the ShopSafe backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `API_URL` as it was set when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Link shown on the feedback page, if one was configured at build time.
pub fn feedback_form_url() -> Option<&'static str> {
    option_env!("FEEDBACK_FORM_URL").filter(|url| !url.trim().is_empty())
}

/// Fixed geometry of an overlay dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogConfig {
    pub id: &'static str,
    pub height: &'static str,
    pub width: &'static str,
}

impl DialogConfig {
    pub fn style(&self) -> String {
        format!("height: {}; width: {};", self.height, self.width)
    }
}

pub const CHECK_IN_DIALOG: DialogConfig = DialogConfig {
    id: "check-in-modal",
    height: "510px",
    width: "460px",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.endpoint("/checkin"), "https://api.example.com/checkin");
    }

    #[test]
    fn check_in_dialog_style_uses_fixed_pixels() {
        assert_eq!(CHECK_IN_DIALOG.style(), "height: 510px; width: 460px;");
        assert_eq!(CHECK_IN_DIALOG.id, "check-in-modal");
    }
}
