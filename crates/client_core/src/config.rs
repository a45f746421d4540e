use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "movie_browser.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub api_key: String,
    pub language: String,
    pub list_path: String,
    pub image_base_url: String,
    pub poster_size: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".into(),
            api_key: String::new(),
            language: "en-US".into(),
            list_path: "movie/popular".into(),
            image_base_url: "https://image.tmdb.org/t/p".into(),
            poster_size: "w500".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid list endpoint '{url}': {source}")]
    InvalidEndpoint { url: String, source: url::ParseError },
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    api_key: Option<String>,
    language: Option<String>,
    list_path: Option<String>,
    image_base_url: Option<String>,
    poster_size: Option<String>,
}

/// Defaults, then the config file, then the environment.
///
/// An explicit `path` must exist; the default `movie_browser.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> Result<ClientSettings, SettingsError> {
    let mut settings = ClientSettings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    match fs::read_to_string(&path) {
        Ok(raw) => settings
            .apply_toml(&raw)
            .map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?,
        Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }
        Err(source) => return Err(SettingsError::Read { path, source }),
    }

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

impl ClientSettings {
    pub fn apply_toml(&mut self, raw: &str) -> Result<(), toml::de::Error> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = file_cfg.api_key {
            self.api_key = v;
        }
        if let Some(v) = file_cfg.language {
            self.language = v;
        }
        if let Some(v) = file_cfg.list_path {
            self.list_path = v;
        }
        if let Some(v) = file_cfg.image_base_url {
            self.image_base_url = v;
        }
        if let Some(v) = file_cfg.poster_size {
            self.poster_size = v;
        }
        Ok(())
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TMDB_API_KEY") {
            self.api_key = v;
        }
        if let Some(v) = lookup("APP__API_KEY") {
            self.api_key = v;
        }
        if let Some(v) = lookup("APP__API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("APP__LANGUAGE") {
            self.language = v;
        }
        if let Some(v) = lookup("APP__LIST_PATH") {
            self.list_path = v;
        }
        if let Some(v) = lookup("APP__IMAGE_BASE_URL") {
            self.image_base_url = v;
        }
        if let Some(v) = lookup("APP__POSTER_SIZE") {
            self.poster_size = v;
        }
    }

    /// Request URL for the configured list; carries the API key as a query parameter.
    pub fn list_endpoint(&self) -> Result<Url, SettingsError> {
        let raw = format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.list_path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|source| SettingsError::InvalidEndpoint {
            url: raw.clone(),
            source,
        })?;

        {
            let mut query = url.query_pairs_mut();
            if !self.api_key.is_empty() {
                query.append_pair("api_key", &self.api_key);
            }
            query.append_pair("language", &self.language);
            query.append_pair("page", "1");
        }

        Ok(url)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
