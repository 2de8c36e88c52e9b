//! Literal substitutions in the generated project's `.env` file

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Which existing assignment line a substitution targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    /// `KEY=` followed by anything
    AnyValue,
    /// Exactly `KEY=` with nothing after it
    Empty,
}

/// Replace one `KEY=...` line with `KEY=value`
#[derive(Debug, Clone)]
pub struct EnvSubstitution {
    pub key: String,
    pub value: String,
    pub line_match: LineMatch,
}

impl EnvSubstitution {
    pub fn any_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line_match: LineMatch::AnyValue,
        }
    }

    pub fn empty(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line_match: LineMatch::Empty,
        }
    }

    fn matches(&self, line: &str) -> bool {
        let Some(rest) = line
            .strip_prefix(self.key.as_str())
            .and_then(|r| r.strip_prefix('='))
        else {
            return false;
        };
        match self.line_match {
            LineMatch::AnyValue => true,
            LineMatch::Empty => rest.is_empty(),
        }
    }
}

/// Outcome of patching an env file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvPatchReport {
    /// Keys whose line was rewritten
    pub applied: Vec<String>,
    /// Keys with no matching line; the file is left as is for those
    pub missing: Vec<String>,
}

/// Apply substitutions to env file text
///
/// Each substitution rewrites only the first line it matches. Line endings
/// and every other line are kept byte for byte.
pub fn patch_env(content: &str, substitutions: &[EnvSubstitution]) -> (String, EnvPatchReport) {
    let mut done = vec![false; substitutions.len()];
    let mut out = String::with_capacity(content.len() + 64);

    for line in content.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        let ending = &line[body.len()..];

        let hit = substitutions
            .iter()
            .enumerate()
            .find(|(idx, sub)| !done[*idx] && sub.matches(body));

        match hit {
            Some((idx, sub)) => {
                done[idx] = true;
                out.push_str(&sub.key);
                out.push('=');
                out.push_str(&sub.value);
                out.push_str(ending);
            }
            None => out.push_str(line),
        }
    }

    let mut report = EnvPatchReport::default();
    for (sub, applied) in substitutions.iter().zip(done) {
        if applied {
            report.applied.push(sub.key.clone());
        } else {
            report.missing.push(sub.key.clone());
        }
    }

    (out, report)
}

/// Patch an env file in place
pub fn patch_env_file(path: &Path, substitutions: &[EnvSubstitution]) -> Result<EnvPatchReport> {
    let content = fs::read_to_string(path).map_err(|source| ScaffoldError::EnvPatch {
        path: path.to_path_buf(),
        source,
    })?;

    let (patched, report) = patch_env(&content, substitutions);

    fs::write(path, patched).map_err(|source| ScaffoldError::EnvPatch {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<EnvSubstitution> {
        vec![
            EnvSubstitution::any_value("VITE_PATH_MODE", "history"),
            EnvSubstitution::empty("VITE_PROJECT_NAME", "MyApp"),
            EnvSubstitution::empty("VITE_APPID", "ABC123"),
        ]
    }

    #[test]
    fn test_patches_three_assignments() {
        let input = "# app\nVITE_PATH_MODE=hash\nVITE_PROJECT_NAME=\nVITE_APPID=\nVITE_BASE_URL=/api\n";
        let (out, report) = patch_env(input, &rules());

        assert_eq!(
            out,
            "# app\nVITE_PATH_MODE=history\nVITE_PROJECT_NAME=MyApp\nVITE_APPID=ABC123\nVITE_BASE_URL=/api\n"
        );
        assert_eq!(report.applied.len(), 3);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_only_first_matching_line_changes() {
        let input = "VITE_APPID=\nVITE_APPID=\n";
        let (out, _) = patch_env(input, &[EnvSubstitution::empty("VITE_APPID", "X")]);
        assert_eq!(out, "VITE_APPID=X\nVITE_APPID=\n");
    }

    #[test]
    fn test_filled_values_and_prefixed_keys_untouched() {
        let input = "VITE_APPID=EXISTING\nMY_VITE_APPID=\nVITE_APPID_EXTRA=\n";
        let (out, report) = patch_env(input, &[EnvSubstitution::empty("VITE_APPID", "X")]);
        assert_eq!(out, input);
        assert_eq!(report.missing, vec!["VITE_APPID".to_string()]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline_preserved() {
        let input = "VITE_PATH_MODE=hash\r\nVITE_PROJECT_NAME=";
        let (out, _) = patch_env(input, &rules());
        assert_eq!(out, "VITE_PATH_MODE=history\r\nVITE_PROJECT_NAME=MyApp");
    }

    #[test]
    fn test_missing_env_file_is_env_patch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = patch_env_file(&dir.path().join(".env"), &rules()).unwrap_err();
        assert!(matches!(err, ScaffoldError::EnvPatch { .. }));
    }

    #[test]
    fn test_patch_env_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "VITE_PATH_MODE=hash\nVITE_PROJECT_NAME=\nVITE_APPID=\n").unwrap();

        patch_env_file(&path, &rules()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "VITE_PATH_MODE=history\nVITE_PROJECT_NAME=MyApp\nVITE_APPID=ABC123\n"
        );
    }
}
