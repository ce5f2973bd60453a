use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use board_core::DEFAULT_COMMENTS_URL;
use serde::Deserialize;
use shared::domain::Route;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_CONFIG_FILE: &str = "board.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub comments_url: String,
    pub log_filter: String,
    pub signed_in: bool,
    pub initial_comments: Vec<String>,
    pub start_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            comments_url: DEFAULT_COMMENTS_URL.into(),
            log_filter: "info".into(),
            signed_in: false,
            initial_comments: Vec::new(),
            start_path: Route::Home.path().into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    comments_url: Option<String>,
    log_filter: Option<String>,
    signed_in: Option<bool>,
    initial_comments: Option<Vec<String>>,
    start_path: Option<String>,
}

impl Settings {
    pub fn start_route(&self) -> anyhow::Result<Route> {
        Route::from_path(&self.start_path)
            .ok_or_else(|| anyhow!("unknown start path '{}'", self.start_path))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        Url::parse(&self.comments_url)
            .with_context(|| format!("invalid comments url '{}'", self.comments_url))?;
        self.start_route()?;
        self.env_filter()?;
        Ok(())
    }

    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter '{}'", self.log_filter))
    }

    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.comments_url {
            self.comments_url = v;
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file_cfg.signed_in {
            self.signed_in = v;
        }
        if let Some(v) = file_cfg.initial_comments {
            self.initial_comments = v;
        }
        if let Some(v) = file_cfg.start_path {
            self.start_path = v;
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("COMMENTS_URL") {
            self.comments_url = v;
        }
        if let Some(v) = var("APP__COMMENTS_URL") {
            self.comments_url = v;
        }
        if let Some(v) = var("RUST_LOG") {
            self.log_filter = v;
        }
        if let Some(v) = var("APP__LOG_FILTER") {
            self.log_filter = v;
        }
        if let Some(v) = var("APP__SIGNED_IN") {
            if let Some(parsed) = parse_flag(&v) {
                self.signed_in = parsed;
            }
        }
        if let Some(v) = var("APP__START_PATH") {
            self.start_path = v;
        }
    }
}

/// Defaults, then the TOML file, then environment overrides. An explicit
/// `config_path` must exist; the default `board.toml` is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if let Some(file_cfg) = read_file_settings(&path, required)? {
        settings.apply_file(file_cfg);
    }

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

fn read_file_settings(path: &Path, required: bool) -> anyhow::Result<Option<FileSettings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };
    let file_cfg = toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(Some(file_cfg))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
