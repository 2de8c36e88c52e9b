//! Target directory derivation

use std::cell::RefCell;
use std::path::{is_separator, Path, PathBuf};
use std::rc::Rc;

/// Trim whitespace and trailing path separators from raw user input
pub fn format_target_dir(raw: &str) -> &str {
    raw.trim().trim_end_matches(is_separator)
}

/// Normalize `raw`, falling back to `default` when nothing is left
pub fn resolve_target_dir(raw: Option<&str>, default: &str) -> String {
    match raw.map(format_target_dir) {
        Some(dir) if !dir.is_empty() => dir.to_string(),
        _ => default.to_string(),
    }
}

/// Make the target absolute against `base`
pub fn target_root(base: &Path, target_dir: &str) -> PathBuf {
    if target_dir == "." {
        base.to_path_buf()
    } else {
        base.join(target_dir)
    }
}

/// Live binding to the Target Directory Path
///
/// The name prompt's on-change hook writes through a clone of this binding on
/// every keystroke; the overwrite gate reads it afterwards.
#[derive(Debug, Clone)]
pub struct TargetBinding {
    current: Rc<RefCell<String>>,
    default: Rc<str>,
}

impl TargetBinding {
    pub fn new(initial: Option<&str>, default: &str) -> Self {
        Self {
            current: Rc::new(RefCell::new(resolve_target_dir(initial, default))),
            default: Rc::from(default),
        }
    }

    /// Recompute the target from a live input value
    pub fn update(&self, raw: &str) {
        *self.current.borrow_mut() = resolve_target_dir(Some(raw), &self.default);
    }

    pub fn get(&self) -> String {
        self.current.borrow().clone()
    }
}
