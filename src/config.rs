//! Build-time API configuration
//!
//! `TASKBOARD_API_URL`, `TASKBOARD_LOGIN_PATH` and `TASKBOARD_DELETE_ROUTE`
//! are read when the WASM bundle is compiled; unset values keep the defaults.

use taskboard_core::remote::{ApiConfig, ProjectDeleteRoute};

pub fn api_config() -> ApiConfig {
    let mut config = ApiConfig::default();
    if let Some(url) = option_env!("TASKBOARD_API_URL") {
        config.base_url = url.to_string();
    }
    if let Some(path) = option_env!("TASKBOARD_LOGIN_PATH") {
        config.login_path = path.to_string();
    }
    match option_env!("TASKBOARD_DELETE_ROUTE") {
        Some("bare") => config.project_delete_route = ProjectDeleteRoute::Bare,
        Some("prefixed") | None => {}
        Some(other) => log::warn!("unknown TASKBOARD_DELETE_ROUTE {other:?}, using default"),
    }
    config
}
