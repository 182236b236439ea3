use std::{collections::HashMap, fs, io, path::Path};

use admin_core::DEFAULT_MEMBERS_URL;
use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "admin.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub members_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            members_url: DEFAULT_MEMBERS_URL.into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn with_overrides(
        mut self,
        members_url: Option<String>,
        log_filter: Option<String>,
    ) -> Self {
        if let Some(v) = members_url {
            self.members_url = v;
        }
        if let Some(v) = log_filter {
            self.log_filter = v;
        }
        self
    }
}

/// Defaults, then the config file if present, then the environment.
pub fn load_settings(config_path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(config_path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse config '{}'", config_path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config '{}'", config_path.display()))
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("members_url") {
        settings.members_url = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ADMIN_MEMBERS_URL") {
        settings.members_url = v;
    }
    if let Some(v) = lookup("APP__MEMBERS_URL") {
        settings.members_url = v;
    }

    if let Some(v) = lookup("ADMIN_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

pub fn validate_members_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid members url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("members url '{raw}' must use http or https");
    }
    Ok(url)
}

pub fn build_log_filter(raw: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(raw.trim()).with_context(|| format!("invalid log filter '{raw}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
