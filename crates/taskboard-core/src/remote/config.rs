//! API client configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Which path shape the backend uses for deleting a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectDeleteRoute {
    /// `/projects/delete/{id}`
    #[default]
    Prefixed,
    /// `/projects/{id}`
    Bare,
}

/// Where the API lives and how some of its routes are shaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Page of the external login flow
    pub login_path: String,
    pub project_delete_route: ProjectDeleteRoute,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            project_delete_route: ProjectDeleteRoute::default(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"project_delete_route":"bare"}"#).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.project_delete_route, ProjectDeleteRoute::Bare);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig::default().with_base_url("https://api.example.com/");
        assert_eq!(config.url("/projects"), "https://api.example.com/projects");
    }
}
