//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each scaffolding product must implement:
//! prompt defaults, the layout of its template, and the guidance printed once
//! the project exists.

use std::path::Path;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (display name, help description)
/// - Defaults offered by the question flow
/// - Template layout (manifest, env file, optional feature files)
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Project name used when neither the CLI nor the user supplies one
    fn default_project_name(&self) -> &'static str;

    /// Default browser-tab title of the generated app
    fn default_project_title(&self) -> &'static str;

    /// Default application identifier
    fn default_app_id(&self) -> &'static str;

    /// Dependency manifest at the template root, rewritten instead of copied
    fn manifest_file(&self) -> &'static str {
        "package.json"
    }

    /// Environment file patched after copying, relative to the project root
    fn env_file(&self) -> &'static str {
        ".env"
    }

    /// Manifest dependency backing the rich-text editor
    fn editor_dependency(&self) -> &'static str;

    /// How the editor feature is named in the question flow
    fn editor_label(&self) -> &'static str {
        "rich-text editor"
    }

    /// Editor component removed when the editor is not wanted
    fn editor_file(&self) -> &'static str;

    /// Upload utility removed when uploads are not wanted
    fn upload_file(&self) -> &'static str;

    /// How the upload feature is named in the question flow
    fn upload_label(&self) -> &'static str {
        "file upload utility"
    }

    /// Environment variable carrying the package manager's user agent
    fn user_agent_env(&self) -> &'static str {
        "npm_config_user_agent"
    }

    /// Package manager assumed when the user agent is missing or malformed
    fn default_package_manager(&self) -> &'static str {
        "pnpm"
    }

    /// Template directory bundled with the source tree, used as last resort
    fn bundled_template_dir(&self) -> &'static Path;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, target_dir: &str, package_manager: &str) -> Vec<String>;

    /// Closing remarks printed below the next steps
    fn tips(&self) -> Vec<String> {
        Vec::new()
    }
}
