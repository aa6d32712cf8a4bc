//! Layered TOML configuration for `ag`.
//!
//! Lookup order: `--config <path>`, then `./adjgraph.toml`, then
//! `<config_dir>/adjgraph/config.toml`, then built-in defaults. Only the
//! first file found is read; files are not merged.

use std::path::{Path, PathBuf};

use adjgraph_core::{MergeStrategy, Orientation, Weighting};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "adjgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for how graphs are imported and analysed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Import links symmetrically and analyse in undirected mode.
    #[serde(default)]
    pub undirected: bool,
    /// Sum weights instead of counting edges in degree queries.
    #[serde(default)]
    pub weighted: bool,
    /// Merge rule used by `ag symmetrize`.
    #[serde(default)]
    pub merge: MergeStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// `pretty`, `text` or `json`.
    #[serde(default)]
    pub format: Option<String>,
}

impl AnalysisConfig {
    pub const fn orientation(&self) -> Orientation {
        Orientation::from_undirected(self.undirected)
    }

    pub const fn weighting(&self) -> Weighting {
        Weighting::from_weighted(self.weighted)
    }
}

/// Pick the config file to read, if any.
///
/// An explicit path is returned as-is so a missing file is reported rather
/// than silently ignored.
pub fn config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("adjgraph").join("config.toml"))
        .filter(|path| path.is_file())
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve and load the effective configuration.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match config_path(explicit, cwd) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config_file(&path)
        }
        None => {
            debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "c.toml", "");
        let config = load_config_file(&path).expect("parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.analysis.orientation(), Orientation::Directed);
        assert_eq!(config.analysis.weighting(), Weighting::Count);
        assert_eq!(config.analysis.merge, MergeStrategy::Max);
    }

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            dir.path(),
            "c.toml",
            "[analysis]\nundirected = true\nweighted = true\nmerge = \"sum\"\n\n[output]\nformat = \"json\"\n",
        );
        let config = load_config_file(&path).expect("parse");
        assert_eq!(config.analysis.orientation(), Orientation::Undirected);
        assert_eq!(config.analysis.weighting(), Weighting::Weighted);
        assert_eq!(config.analysis.merge, MergeStrategy::Sum);
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "c.toml", "[analysis]\ndirected = true\n");
        let err = load_config_file(&path).expect_err("unknown key");
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn unknown_merge_strategy_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "c.toml", "[analysis]\nmerge = \"mean\"\n");
        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), PROJECT_CONFIG_FILE, "[analysis]\nweighted = true\n");
        let explicit = write(dir.path(), "other.toml", "[analysis]\nundirected = true\n");

        let config = load_config(Some(&explicit), dir.path()).expect("load");
        assert!(config.analysis.undirected);
        assert!(!config.analysis.weighted);
    }

    #[test]
    fn project_file_found_in_cwd() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), PROJECT_CONFIG_FILE, "[analysis]\nweighted = true\n");
        assert_eq!(config_path(None, dir.path()), Some(path));
        assert!(load_config(None, dir.path()).expect("load").analysis.weighted);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing), dir.path()).expect_err("missing");
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}
