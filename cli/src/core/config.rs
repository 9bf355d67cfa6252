//! # devstack Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module resolves everything the dispatcher needs to know about the stack
//! before any command runs: where the project root is, which orchestration binary
//! to call, and where the compose definition, environment file and environment
//! template live. The result is a single `StackConfig` built once at startup and
//! handed to every command handler.
//!
//! ## Architecture
//!
//! Resolution happens in three steps:
//! 1. Determine the project root: an explicit `--project-dir` wins; otherwise the
//!    nearest ancestor of the current directory holding `.devstack.toml` or
//!    `docker-compose.yml` (the search stops at a `.git` directory); otherwise the
//!    current directory itself.
//! 2. Read the optional `.devstack.toml` from that root. Missing sections fall back
//!    to the defaults below.
//! 3. Expand `~` in configured paths, join them onto the project root and validate.
//!
//! Defaults match the stack layout the tool was written for:
//!
//! ```toml
//! [compose]
//! program = "docker"
//! file = "docker-compose.yml"
//! env_file = ".env"
//! env_template = ".env.example"
//!
//! [services]
//! studio = "studio"
//!
//! [studio]
//! url = "http://localhost:${STUDIO_PORT}"
//!
//! [[endpoints]]
//! label = "API health"
//! url = "http://localhost:${APP_PORT}/health"
//! ```
//!
//! The dispatcher never reads the environment file itself, so the `${...}`
//! placeholders in endpoint URLs are printed as written.
//!
use crate::core::error::{Result, StackError};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILENAME: &str = ".devstack.toml";

/// Contents of `.devstack.toml`, as written by the operator.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default)]
    pub compose: ComposeSection,
    #[serde(default)]
    pub services: ServicesSection,
    #[serde(default)]
    pub studio: StudioSection,
    /// Endpoint URLs printed after `up`. Replaces the default list when present.
    pub endpoints: Option<Vec<Endpoint>>,
}

/// How to reach `docker compose` and which files to pass it.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ComposeSection {
    #[serde(default = "default_program")]
    pub program: String,
    /// Compose definition, relative to the project root (can use ~).
    #[serde(default = "default_compose_file")]
    pub file: String,
    /// Environment file passed with `--env-file` (can use ~).
    #[serde(default = "default_env_file")]
    pub env_file: String,
    /// Template copied to `env_file` when the latter does not exist (can use ~).
    #[serde(default = "default_env_template")]
    pub env_template: String,
}

impl Default for ComposeSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            file: default_compose_file(),
            env_file: default_env_file(),
            env_template: default_env_template(),
        }
    }
}

/// Compose service names the dispatcher refers to directly.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServicesSection {
    #[serde(default = "default_studio_service")]
    pub studio: String,
}

impl Default for ServicesSection {
    fn default() -> Self {
        Self {
            studio: default_studio_service(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StudioSection {
    #[serde(default = "default_studio_url")]
    pub url: String,
}

impl Default for StudioSection {
    fn default() -> Self {
        Self {
            url: default_studio_url(),
        }
    }
}

/// A labelled URL shown to the operator after the stack comes up.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    pub label: String,
    pub url: String,
}

impl Endpoint {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

fn default_program() -> String {
    "docker".to_string()
}
fn default_compose_file() -> String {
    "docker-compose.yml".to_string()
}
fn default_env_file() -> String {
    ".env".to_string()
}
fn default_env_template() -> String {
    ".env.example".to_string()
}
fn default_studio_service() -> String {
    "studio".to_string()
}
fn default_studio_url() -> String {
    "http://localhost:${STUDIO_PORT}".to_string()
}
fn default_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("API health", "http://localhost:${APP_PORT}/health"),
        Endpoint::new("Users", "http://localhost:${APP_PORT}/users"),
        Endpoint::new("Studio (once started)", "http://localhost:${STUDIO_PORT}"),
    ]
}

/// Fully resolved settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackConfig {
    /// Working directory for every child process.
    pub project_dir: PathBuf,
    /// Orchestration executable (`docker`).
    pub program: String,
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
    pub env_template: PathBuf,
    pub studio_service: String,
    pub studio_url: String,
    pub endpoints: Vec<Endpoint>,
}

impl StackConfig {
    /// Builds the default layout rooted at `project_dir`.
    pub fn for_project(project_dir: &Path) -> Self {
        resolve(project_dir, ProjectFile::default())
    }
}

/// Loads the stack configuration.
///
/// `project_dir` is the explicit `--project-dir` override, if any.
pub fn load_config(project_dir: Option<&Path>) -> Result<StackConfig> {
    let root = match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            find_project_root(&current_dir).unwrap_or(current_dir)
        }
    };
    if !root.is_dir() {
        return Err(anyhow!(StackError::Config(format!(
            "Project directory '{}' does not exist or is not a directory.",
            root.display()
        ))));
    }
    info!("Using project directory: {}", root.display());

    let config = match load_project_file(&root)? {
        Some(file) => resolve(&root, file),
        None => StackConfig::for_project(&root),
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Walks up from `start` looking for a directory that holds the project config
/// or the default compose file. Stops at the first `.git` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        if path.join(PROJECT_CONFIG_FILENAME).is_file()
            || path.join(default_compose_file()).is_file()
        {
            return Some(path.to_path_buf());
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project root search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_project_file(root: &Path) -> Result<Option<ProjectFile>> {
    let path = root.join(PROJECT_CONFIG_FILENAME);
    if !path.exists() {
        debug!("No {} in {}", PROJECT_CONFIG_FILENAME, root.display());
        return Ok(None);
    }
    info!("Loading project configuration from: {}", path.display());
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .map(Some)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn resolve(root: &Path, file: ProjectFile) -> StackConfig {
    StackConfig {
        project_dir: root.to_path_buf(),
        program: file.compose.program,
        compose_file: expand_path(root, &file.compose.file),
        env_file: expand_path(root, &file.compose.env_file),
        env_template: expand_path(root, &file.compose.env_template),
        studio_service: file.services.studio,
        studio_url: file.studio.url,
        endpoints: file.endpoints.unwrap_or_else(default_endpoints),
    }
}

/// Expands `~` and anchors relative paths at the project root.
fn expand_path(root: &Path, raw: &str) -> PathBuf {
    let expanded = shellexpand::tilde(raw).into_owned();
    root.join(expanded)
}

fn validate_config(config: &StackConfig) -> Result<()> {
    if config.program.trim().is_empty() {
        return Err(anyhow!(StackError::Config(
            "compose.program cannot be empty.".to_string()
        )));
    }
    if config.studio_service.trim().is_empty() {
        return Err(anyhow!(StackError::Config(
            "services.studio cannot be empty.".to_string()
        )));
    }
    for (name, path) in [
        ("compose.file", &config.compose_file),
        ("compose.env_file", &config.env_file),
        ("compose.env_template", &config.env_template),
    ] {
        if path == &config.project_dir {
            return Err(anyhow!(StackError::Config(format!(
                "{} cannot be empty.",
                name
            ))));
        }
    }
    if config.env_file == config.env_template {
        return Err(anyhow!(StackError::Config(format!(
            "compose.env_file and compose.env_template both point at '{}'.",
            config.env_file.display()
        ))));
    }
    for endpoint in &config.endpoints {
        if endpoint.label.is_empty() || endpoint.url.is_empty() {
            return Err(anyhow!(StackError::Config(format!(
                "Endpoint entries need both a label and a url (label: '{}', url: '{}').",
                endpoint.label, endpoint.url
            ))));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_endpoint_urls_are_bare_urls() {
        let endpoints = default_endpoints();
        let studio = endpoints
            .iter()
            .find(|e| e.label.starts_with("Studio"))
            .unwrap();
        assert_eq!(studio.url, "http://localhost:${STUDIO_PORT}");
        for endpoint in &endpoints {
            assert!(
                !endpoint.url.contains(' '),
                "'{}' url should not contain prose: {}",
                endpoint.label,
                endpoint.url
            );
        }
    }

    #[test]
    fn test_defaults_are_rooted_at_project_dir() {
        let root = Path::new("/srv/app");
        let cfg = StackConfig::for_project(root);
        assert_eq!(cfg.program, "docker");
        assert_eq!(cfg.compose_file, root.join("docker-compose.yml"));
        assert_eq!(cfg.env_file, root.join(".env"));
        assert_eq!(cfg.env_template, root.join(".env.example"));
        assert_eq!(cfg.studio_service, "studio");
        assert_eq!(cfg.endpoints.len(), 3);
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [compose]
            env_file = "env/.active.env"

            [[endpoints]]
            label = "Admin"
            url = "http://localhost:8081"
        "#;

        let file: ProjectFile = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(file.compose.env_file, "env/.active.env");
        assert_eq!(file.compose.file, "docker-compose.yml"); // Default
        assert_eq!(file.services.studio, "studio"); // Default

        let cfg = resolve(Path::new("/p"), file);
        assert_eq!(cfg.env_file, PathBuf::from("/p/env/.active.env"));
        assert_eq!(cfg.endpoints, vec![Endpoint::new("Admin", "http://localhost:8081")]);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<ProjectFile, _> =
            toml::from_str("[compose]\nprogramm = \"podman\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let cfg = resolve(
            Path::new("/p"),
            ProjectFile {
                compose: ComposeSection {
                    file: "/etc/stack/compose.yml".into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert_eq!(cfg.compose_file, PathBuf::from("/etc/stack/compose.yml"));
    }

    #[test]
    fn test_validate_rejects_empty_program() {
        let mut cfg = StackConfig::for_project(Path::new("/p"));
        cfg.program = " ".into();
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("compose.program"));
    }

    #[test]
    fn test_validate_rejects_env_file_equal_to_template() {
        let mut cfg = StackConfig::for_project(Path::new("/p"));
        cfg.env_template = cfg.env_file.clone();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_find_project_root_walks_up() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("docker-compose.yml"), "services: {}\n").unwrap();
        let nested = temp.path().join("api").join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn test_find_project_root_stops_at_git() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = temp.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("pkg");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), None);
    }

    #[test]
    fn test_load_config_reads_project_file() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(PROJECT_CONFIG_FILENAME),
            "[compose]\nprogram = \"podman\"\n\n[services]\nstudio = \"adminer\"\n",
        )
        .unwrap();

        let cfg = load_config(Some(temp.path())).unwrap();
        assert_eq!(cfg.program, "podman");
        assert_eq!(cfg.studio_service, "adminer");
        assert_eq!(cfg.project_dir, temp.path());
    }

    #[test]
    fn test_load_config_missing_dir() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
