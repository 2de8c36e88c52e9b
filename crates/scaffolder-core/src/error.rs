//! Error types for template materialization

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a template into a project directory.
///
/// Every variant names the path that failed so the top-level report can point
/// the user at it. None of these are retried.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to prepare target directory {}: {source}", path.display())]
    Prepare {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} -> {}: {source}", src.display(), dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read package manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Package manifest {} is not valid JSON: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Package manifest {} must be a JSON object", .0.display())]
    ManifestShape(PathBuf),

    #[error("Failed to write package manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove {}: {source}", path.display())]
    Prune {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to update environment file {}: {source}", path.display())]
    EnvPatch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Short name of the materialization step that failed
    pub fn step(&self) -> &'static str {
        match self {
            ScaffoldError::TemplateNotFound(_) => "locate template",
            ScaffoldError::Prepare { .. } => "prepare directory",
            ScaffoldError::Copy { .. } => "copy template",
            ScaffoldError::ManifestRead { .. }
            | ScaffoldError::ManifestParse { .. }
            | ScaffoldError::ManifestShape(_)
            | ScaffoldError::ManifestWrite { .. } => "rewrite package manifest",
            ScaffoldError::Prune { .. } => "prune optional files",
            ScaffoldError::EnvPatch { .. } => "patch environment file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
