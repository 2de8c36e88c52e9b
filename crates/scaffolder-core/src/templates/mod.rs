//! Template location and project materialization
//!
//! This module provides:
//! - Filesystem helpers (emptiness check, clear, recursive copy)
//! - Package manifest rewriting
//! - `.env` substitutions
//! - `materialize`, which turns a template and a set of answers into a project

pub mod copier;
pub mod env;
pub mod manifest;

use crate::error::{Result, ScaffoldError};
use crate::flow::{Answers, OverwriteDecision};
use crate::product::ProductConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub use copier::{clear_directory, copy_entry, path_is_empty, remove_path};
pub use env::{patch_env, patch_env_file, EnvPatchReport, EnvSubstitution};
pub use manifest::{package_name, PackageManifest};

/// Environment keys patched in the generated project
pub const ENV_PATH_MODE: &str = "VITE_PATH_MODE";
pub const ENV_PROJECT_NAME: &str = "VITE_PROJECT_NAME";
pub const ENV_APP_ID: &str = "VITE_APPID";

/// What `materialize` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Files copied verbatim from the template
    pub files_copied: usize,
    /// Name written into the package manifest
    pub package_name: String,
    /// Optional files deleted from the project, relative to its root
    pub pruned: Vec<String>,
    pub env: EnvPatchReport,
}

/// Find the template root
///
/// An explicit directory wins; otherwise look next to the executable and then
/// fall back to the template bundled with the source tree. A candidate only
/// counts if it holds the package manifest.
pub fn locate_template_dir<C: ProductConfig>(
    config: &C,
    explicit: Option<&Path>,
) -> Result<PathBuf> {
    let candidates = match explicit {
        Some(dir) => vec![dir.to_path_buf()],
        None => {
            let mut dirs = Vec::new();
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
            {
                dirs.push(exe_dir.join("..").join("template"));
                dirs.push(exe_dir.join("template"));
            }
            dirs.push(config.bundled_template_dir().to_path_buf());
            dirs
        }
    };

    let missing = candidates
        .last()
        .cloned()
        .unwrap_or_else(|| config.bundled_template_dir().to_path_buf());

    candidates
        .into_iter()
        .find(|dir| dir.join(config.manifest_file()).is_file())
        .ok_or(ScaffoldError::TemplateNotFound(missing))
}

/// Materialize `template_root` into `target_root` according to `answers`
///
/// Steps run in order and the first failure aborts the rest. Files already
/// written stay on disk.
pub fn materialize<C: ProductConfig>(
    config: &C,
    answers: &Answers,
    template_root: &Path,
    target_root: &Path,
) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();

    prepare_target(target_root, answers.overwrite)?;

    report.files_copied = copy_template(config, template_root, target_root)?;

    // Manifest
    let mut manifest = PackageManifest::load(&template_root.join(config.manifest_file()))?;
    report.package_name = package_name(answers.project_name.as_deref(), target_root);
    manifest.set_name(&report.package_name);
    if !answers.need_editor {
        manifest.remove_dependency(config.editor_dependency());
        if prune(target_root, config.editor_file())? {
            report.pruned.push(config.editor_file().to_string());
        }
    }
    manifest.write_to(&target_root.join(config.manifest_file()))?;

    // Optional files
    if !answers.need_upload && prune(target_root, config.upload_file())? {
        report.pruned.push(config.upload_file().to_string());
    }

    // Environment
    let substitutions = [
        EnvSubstitution::any_value(ENV_PATH_MODE, answers.path_mode.as_str()),
        EnvSubstitution::empty(ENV_PROJECT_NAME, answers.project_title.as_str()),
        EnvSubstitution::empty(ENV_APP_ID, answers.app_id.as_str()),
    ];
    report.env = patch_env_file(&target_root.join(config.env_file()), &substitutions)?;

    Ok(report)
}

/// Clear or create the target directory
fn prepare_target(target_root: &Path, overwrite: Option<OverwriteDecision>) -> Result<()> {
    let to_error = |source| ScaffoldError::Prepare {
        path: target_root.to_path_buf(),
        source,
    };

    if overwrite == Some(OverwriteDecision::Remove) {
        clear_directory(target_root).map_err(to_error)?;
    }
    // No-op for an existing directory, so "ignore" keeps what is there
    fs::create_dir_all(target_root).map_err(to_error)
}

/// Copy every top-level template entry except the manifest
fn copy_template<C: ProductConfig>(
    config: &C,
    template_root: &Path,
    target_root: &Path,
) -> Result<usize> {
    let read_error = |source| ScaffoldError::Copy {
        src: template_root.to_path_buf(),
        dest: target_root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(template_root).map_err(read_error)? {
        let name = entry.map_err(read_error)?.file_name();
        if name != config.manifest_file() {
            names.push(name);
        }
    }
    names.sort();

    let mut copied = 0;
    for name in names {
        copied += copy_entry(&template_root.join(&name), &target_root.join(&name))?;
    }
    Ok(copied)
}

/// Delete an optional file from the project; returns whether it existed
fn prune(target_root: &Path, rel: &str) -> Result<bool> {
    let path = target_root.join(rel);
    remove_path(&path).map_err(|source| ScaffoldError::Prune { path, source })
}
