//! Configuration types for Code2Diagram analysis.
//!
//! This module provides configuration structures that tune the advice
//! thresholds and the repository fetcher. All types implement
//! [`serde::Deserialize`] and every field has a default, so a partial TOML
//! document is always valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining advice and GitHub settings.
//! - [`AdviceConfig`] - Thresholds gating the canned issues and recommendations.
//! - [`GithubConfig`] - Endpoint, identity and fan-out limits for repository fetches.
//!
//! # Example
//!
//! ```
//! # use code2diagram::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.advice().max_dependencies(), 10);
//! assert_eq!(config.github().api_base(), "https://api.github.com");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Advice thresholds section.
    #[serde(default)]
    advice: AdviceConfig,

    /// Repository fetcher section.
    #[serde(default)]
    github: GithubConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(advice: AdviceConfig, github: GithubConfig) -> Self {
        Self { advice, github }
    }

    /// Returns the advice configuration.
    pub fn advice(&self) -> &AdviceConfig {
        &self.advice
    }

    /// Returns the GitHub configuration.
    pub fn github(&self) -> &GithubConfig {
        &self.github
    }
}

/// Thresholds for the canned issues and recommendations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    /// More unique dependencies than this raises an issue.
    max_dependencies: usize,

    /// More classes than this adds a modularization recommendation.
    max_classes: usize,

    /// With no classes, more functions than this flags procedural code.
    procedural_function_threshold: usize,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            max_dependencies: 10,
            max_classes: 5,
            procedural_function_threshold: 5,
        }
    }
}

impl AdviceConfig {
    /// Creates a new [`AdviceConfig`].
    pub fn new(
        max_dependencies: usize,
        max_classes: usize,
        procedural_function_threshold: usize,
    ) -> Self {
        Self {
            max_dependencies,
            max_classes,
            procedural_function_threshold,
        }
    }

    pub fn max_dependencies(&self) -> usize {
        self.max_dependencies
    }

    pub fn max_classes(&self) -> usize {
        self.max_classes
    }

    pub fn procedural_function_threshold(&self) -> usize {
        self.procedural_function_threshold
    }
}

/// Settings for fetching repository contents from the GitHub REST API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the API, without a trailing slash.
    api_base: String,

    /// `User-Agent` header sent with every request.
    user_agent: String,

    /// Maximum number of script files downloaded per repository.
    max_files: usize,

    /// Maximum number of downloads in flight.
    concurrency: usize,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            user_agent: "Code2Diagram-App".to_string(),
            max_files: 10_000,
            concurrency: 8,
        }
    }
}

impl GithubConfig {
    /// Returns the API base URL with any trailing slash removed.
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// Returns the download concurrency, never less than one.
    pub fn concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}
