//! Package manifest (package.json) loading and rewriting

use crate::error::{Result, ScaffoldError};
use crate::flow::format_target_dir;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A parsed package manifest
///
/// Key order is preserved so the rewritten file diffs cleanly against the
/// template.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Read and parse a manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScaffoldError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest text; `path` is only used for error reporting
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(fields) => Ok(Self {
                path: path.to_path_buf(),
                fields,
            }),
            _ => Err(ScaffoldError::ManifestShape(path.to_path_buf())),
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.fields
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    /// Drop `key` from `dependencies`
    ///
    /// A missing `dependencies` table or a missing key is fine. Returns
    /// whether an entry was removed.
    pub fn remove_dependency(&mut self, key: &str) -> bool {
        self.fields
            .get_mut("dependencies")
            .and_then(Value::as_object_mut)
            .and_then(|deps| deps.shift_remove(key))
            .is_some()
    }

    /// Serialize with 2-space indentation and a trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(&self.fields).map_err(|e| ScaffoldError::ManifestWrite {
                path: self.path.clone(),
                source: io::Error::from(e),
            })?;
        out.push('\n');
        Ok(out)
    }

    /// Write the manifest to `dest`
    pub fn write_to(&self, dest: &Path) -> Result<()> {
        let content = self.to_pretty_string()?;
        fs::write(dest, content).map_err(|source| ScaffoldError::ManifestWrite {
            path: dest.to_path_buf(),
            source,
        })
    }
}

/// Pick the package name: the chosen project name, else the target's last path segment
///
/// The project name is normalized the same way as the target directory.
pub fn package_name(project_name: Option<&str>, target_root: &Path) -> String {
    match project_name.map(format_target_dir).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => target_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}
