//! Mounts a directory of static assets under a URL prefix on an axum
//! router.
//!
//! ```no_run
//! use css_assets::{AssetConfig, RunMode};
//!
//! let app = AssetConfig::new(RunMode::Development).into_router().unwrap();
//! # let _ = app;
//! ```

use axum::Router;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tower_http::services::ServeDir;

pub const DEFAULT_ASSET_URL: &str = "/assets/";
pub const DEFAULT_ASSET_PATH: &str = "./assets";

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Unknown run mode '{0}' (expected production or development)")]
    InvalidRunMode(String),

    #[error("Invalid asset URL '{url}': {reason}")]
    InvalidAssetUrl { url: String, reason: &'static str },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// How the asset pipeline is being run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Production,
    Development,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Production => "production",
            RunMode::Development => "development",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(RunMode::Production),
            "development" | "dev" => Ok(RunMode::Development),
            _ => Err(AssetError::InvalidRunMode(s.to_string())),
        }
    }
}

/// Where assets live on disk and where they appear in the URL space.
/// Empty fields fall back to [`DEFAULT_ASSET_URL`] and [`DEFAULT_ASSET_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub run_mode: RunMode,
    pub asset_url: String,
    pub asset_path: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new(RunMode::default())
    }
}

impl AssetConfig {
    pub fn new(run_mode: RunMode) -> Self {
        Self {
            run_mode,
            asset_url: DEFAULT_ASSET_URL.to_string(),
            asset_path: PathBuf::from(DEFAULT_ASSET_PATH),
        }
    }

    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = url.into();
        self
    }

    pub fn with_asset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.asset_path = path.into();
        self
    }

    pub fn resolved_url(&self) -> &str {
        if self.asset_url.is_empty() {
            DEFAULT_ASSET_URL
        } else {
            &self.asset_url
        }
    }

    pub fn resolved_path(&self) -> PathBuf {
        if self.asset_path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_ASSET_PATH)
        } else {
            self.asset_path.clone()
        }
    }

    /// Route path the file service is nested at; `None` for the root
    fn mount_point(&self) -> Result<Option<String>, AssetError> {
        let url = self.resolved_url();

        if !url.starts_with('/') {
            return Err(AssetError::InvalidAssetUrl {
                url: url.to_string(),
                reason: "must start with '/'",
            });
        }
        if url.contains(|c| matches!(c, '{' | '}' | '*' | '?' | '#')) {
            return Err(AssetError::InvalidAssetUrl {
                url: url.to_string(),
                reason: "must be a literal path",
            });
        }

        let trimmed = url.trim_end_matches('/');
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    /// Register the file service on `router`, the caller's multiplexer
    pub fn register<S>(&self, router: Router<S>) -> Result<Router<S>, AssetError>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mount = self.mount_point()?;
        let path = self.resolved_path();

        if !path.is_dir() {
            warn!("Asset directory {} does not exist yet", path.display());
        }
        info!(
            "Serving {} under {} ({} mode)",
            path.display(),
            self.resolved_url(),
            self.run_mode
        );

        let files = ServeDir::new(path);
        Ok(match mount {
            Some(mount) => router.nest_service(&mount, files),
            None => router.fallback_service(files),
        })
    }

    /// Register on a fresh router
    pub fn into_router(self) -> Result<Router, AssetError> {
        self.register(Router::new())
    }
}
