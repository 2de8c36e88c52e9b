//! Scaffolder Core - Shared library for `create-*` project scaffolding CLIs
//!
//! This library asks a short, fixed series of questions and turns a local
//! template directory into a ready-to-install web project. Binaries supply a
//! `ProductConfig` describing their defaults and template layout.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Filesystem helpers, manifest rewriting, `.env` patching
//! - **Layer 2: Workflow Orchestration** - The question flow (`flow`) driven through a
//!   `Prompter`, and `templates::materialize`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::flow::{collect_answers, CancelToken, FlowDefaults, FlowOutcome, FlowState};
//! use scaffolder_core::templates;
//!
//! let state = FlowState::new(FlowDefaults::from_config(&config), Some("my-app"), cwd.clone());
//! if let FlowOutcome::Completed(result) = collect_answers(&mut my_prompter, state, &CancelToken::new())? {
//!     let target = scaffolder_core::flow::target_root(&cwd, &result.target_dir);
//!     templates::materialize(&config, &result.answers, &template_dir, &target)?;
//! }
//! ```

pub mod error;
pub mod flow;
pub mod product;
pub mod report;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use flow::{collect_answers, Answers, CancelToken, FlowOutcome, Prompter};
pub use product::ProductConfig;
pub use templates::{locate_template_dir, materialize, MaterializeReport};

#[cfg(feature = "tui")]
pub use tui::run;
