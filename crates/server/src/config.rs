use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

const SETTINGS_FILE: &str = "meetups.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// JSON fixture to serve instead of the built-in catalog.
    pub catalog_path: Option<String>,
    /// How long a page request waits for its view to settle before
    /// rendering the loading state.
    pub render_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4200".into(),
            catalog_path: None,
            render_timeout_ms: 2000,
        }
    }
}

impl Settings {
    pub fn render_timeout(&self) -> Duration {
        Duration::from_millis(self.render_timeout_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    catalog_path: Option<String>,
    render_timeout_ms: Option<u64>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file if present, then environment.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw, path);
    }
    apply_env(&mut settings, env);

    settings
}

fn apply_file(settings: &mut Settings, raw: &str, path: &Path) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(path = %path.display(), %error, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.bind_addr {
        settings.bind_addr = v;
    }
    if let Some(v) = file_cfg.catalog_path {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file_cfg.render_timeout_ms {
        settings.render_timeout_ms = v;
    }
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("SERVER_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("APP__CATALOG_PATH") {
        settings.catalog_path = Some(v).filter(|path| !path.trim().is_empty());
    }

    if let Some(v) = env("APP__RENDER_TIMEOUT_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.render_timeout_ms = parsed,
            Err(_) => warn!(value = %v, "ignoring invalid APP__RENDER_TIMEOUT_MS"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
