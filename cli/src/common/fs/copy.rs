//! # devstack Environment File Bootstrap
//!
//! File: cli/src/common/fs/copy.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module creates the stack's environment file from its template the first
//! time devstack runs in a project. The copy is byte-for-byte and happens only
//! when the target is absent: an existing environment file is never touched, so
//! running any command twice leaves it exactly as the operator left it.
//!
//! ## Architecture
//!
//! `copy_if_absent` uses `fs_extra::file::copy` with `skip_exist` set, which
//! leaves an existing target alone. Parent directories of the target are created
//! first so nested layouts like `env/.active.env` work. Copy failures are
//! returned as `StackError::Bootstrap`; whether that ends the run is the
//! caller's decision.
//!
//! ```rust
//! match copy::copy_if_absent(&cfg.env_template, &cfg.env_file)? {
//!     Bootstrap::Copied => println!("created .env"),
//!     Bootstrap::AlreadyPresent | Bootstrap::TemplateMissing => {}
//! }
//! ```
//!
use crate::core::error::{Result, StackError};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What `copy_if_absent` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The target existed already and was left untouched.
    AlreadyPresent,
    /// The template was copied to the target.
    Copied,
    /// Neither the target nor the template exists.
    TemplateMissing,
}

/// Copies `template` to `target` unless `target` already exists.
///
/// # Errors
///
/// Returns `StackError::Bootstrap` if the target's parent directory cannot be
/// created or the copy itself fails (unreadable template, unwritable target).
pub fn copy_if_absent(template: &Path, target: &Path) -> Result<Bootstrap> {
    if target.exists() {
        debug!("{} already exists, not bootstrapping.", target.display());
        return Ok(Bootstrap::AlreadyPresent);
    }
    if !template.exists() {
        debug!("Template {} does not exist.", template.display());
        return Ok(Bootstrap::TemplateMissing);
    }

    let failed = |reason: String| StackError::Bootstrap {
        template: template.to_path_buf(),
        target: target.to_path_buf(),
        reason,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
    }

    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = false;
    options.skip_exist = true;
    let bytes =
        fs_extra::file::copy(template, target, &options).map_err(|e| failed(e.to_string()))?;

    info!(
        "Copied {} to {} ({} bytes)",
        template.display(),
        target.display(),
        bytes
    );
    Ok(Bootstrap::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copies_template_byte_for_byte() {
        let temp = tempdir().unwrap();
        let template = temp.path().join(".env.example");
        let target = temp.path().join(".env");
        let content = b"APP_PORT=3000\nDATABASE_URL=postgresql://app:app@db:5432/app\n\xff\x00tail";
        fs::write(&template, content).unwrap();

        assert_eq!(copy_if_absent(&template, &target).unwrap(), Bootstrap::Copied);
        assert_eq!(fs::read(&target).unwrap(), content.to_vec());
        // The template is left as it was.
        assert_eq!(fs::read(&template).unwrap(), content.to_vec());
    }

    #[test]
    fn test_existing_target_is_not_overwritten() {
        let temp = tempdir().unwrap();
        let template = temp.path().join(".env.example");
        let target = temp.path().join(".env");
        fs::write(&template, "APP_PORT=3000\n").unwrap();
        fs::write(&target, "APP_PORT=8080\n").unwrap();

        for _ in 0..2 {
            assert_eq!(
                copy_if_absent(&template, &target).unwrap(),
                Bootstrap::AlreadyPresent
            );
        }
        assert_eq!(fs::read_to_string(&target).unwrap(), "APP_PORT=8080\n");
    }

    #[test]
    fn test_missing_template_creates_nothing() {
        let temp = tempdir().unwrap();
        let target = temp.path().join(".env");

        assert_eq!(
            copy_if_absent(&temp.path().join(".env.example"), &target).unwrap(),
            Bootstrap::TemplateMissing
        );
        assert!(!target.exists());
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp = tempdir().unwrap();
        let template = temp.path().join(".env.example");
        let target = temp.path().join("env").join(".active.env");
        fs::write(&template, "A=1\n").unwrap();

        assert_eq!(copy_if_absent(&template, &target).unwrap(), Bootstrap::Copied);
        assert_eq!(fs::read_to_string(&target).unwrap(), "A=1\n");
    }

    #[test]
    fn test_template_directory_is_a_bootstrap_error() {
        let temp = tempdir().unwrap();
        let template = temp.path().join("template_dir");
        fs::create_dir(&template).unwrap();
        let target = temp.path().join(".env");

        let err = copy_if_absent(&template, &target).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StackError>(),
            Some(StackError::Bootstrap { .. })
        ));
        assert!(!target.exists());
    }
}
