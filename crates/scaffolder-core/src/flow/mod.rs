//! Interactive question flow
//!
//! This module provides:
//! - The answer set and its typed choices
//! - The ordered question nodes with their gates
//! - The live target-directory binding fed by the name prompt
//! - `collect_answers`, which walks the nodes against a `Prompter`
//!
//! Nothing here writes to the filesystem, so a cancelled flow leaves the
//! target untouched.

pub mod answers;
pub mod nodes;
pub mod prompt;
pub mod target;

use crate::product::ProductConfig;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use answers::{AnswerKey, AnswerValue, Answers, OverwriteDecision, PartialAnswers, PathMode};
pub use nodes::{Gate, Prompt, QuestionNode, QUESTIONS};
pub use prompt::{Choice, LiveHook, PromptError, Prompter, SelectPrompt, TextPrompt};
pub use target::{format_target_dir, resolve_target_dir, target_root, TargetBinding};

/// Message shown when the user backs out
pub const CANCELLED_MESSAGE: &str = "Operation cancelled";

/// Failures of the flow itself; user cancellation is not one of them
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Failed to inspect target directory {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Unexpected answer {value} for {key}")]
    UnexpectedAnswer { key: AnswerKey, value: String },

    #[error("No answer recorded for {0}")]
    MissingAnswer(AnswerKey),
}

/// Cooperative cancellation flag shared with the interrupt handler
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Defaults and labels offered by the questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDefaults {
    pub project_name: String,
    pub project_title: String,
    pub app_id: String,
    pub editor_label: String,
    pub upload_label: String,
}

impl FlowDefaults {
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        Self {
            project_name: config.default_project_name().to_string(),
            project_title: config.default_project_title().to_string(),
            app_id: config.default_app_id().to_string(),
            editor_label: config.editor_label().to_string(),
            upload_label: config.upload_label().to_string(),
        }
    }
}

/// Everything the gates can look at
#[derive(Debug)]
pub struct FlowState {
    /// Positional target from the command line, if any
    pub cli_target: Option<String>,
    /// Directory relative targets are resolved against
    pub base_dir: PathBuf,
    pub target: TargetBinding,
    pub answers: PartialAnswers,
    pub defaults: FlowDefaults,
}

impl FlowState {
    pub fn new(defaults: FlowDefaults, cli_target: Option<&str>, base_dir: PathBuf) -> Self {
        Self {
            cli_target: cli_target.map(str::to_string),
            base_dir,
            target: TargetBinding::new(cli_target, &defaults.project_name),
            answers: PartialAnswers::default(),
            defaults,
        }
    }

    /// Current target made absolute against the base directory
    pub fn target_path(&self) -> PathBuf {
        target_root(&self.base_dir, &self.target.get())
    }
}

/// Answers plus the target they were given for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResult {
    pub answers: Answers,
    /// Normalized target directory as typed or passed on the command line
    pub target_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed(FlowResult),
    Cancelled,
}

/// Walk the question nodes in order
///
/// Cancellation (the overwrite checkpoint, a prompt aborted by the user, or
/// the token tripped by an interrupt) yields `FlowOutcome::Cancelled`. Any
/// other failure, including one raised while evaluating a gate, is an error.
pub fn collect_answers<P: Prompter>(
    prompter: &mut P,
    mut state: FlowState,
    cancel: &CancelToken,
) -> Result<FlowOutcome, FlowError> {
    for node in QUESTIONS.iter() {
        if cancel.is_cancelled() {
            return Ok(FlowOutcome::Cancelled);
        }

        match (node.gate)(&state)? {
            Gate::Ask => {}
            Gate::Skip => continue,
            Gate::Cancel => return Ok(FlowOutcome::Cancelled),
        }

        let reply = match (node.prompt)(&state) {
            Prompt::Text { prompt, live } => {
                let hook = live.then(|| live_hook(&state.target));
                prompter.text(&prompt, hook).map(|value| {
                    if live {
                        state.target.update(&value);
                    }
                    AnswerValue::Text(value)
                })
            }
            Prompt::Select(prompt) => prompter.select(&prompt).map(AnswerValue::Choice),
            Prompt::Silent => continue,
        };

        let value = match reply {
            Ok(value) => value,
            Err(PromptError::Cancelled) => return Ok(FlowOutcome::Cancelled),
            Err(PromptError::Io(e)) => return Err(FlowError::Prompt(e)),
        };

        state.answers.record(node.key, value)?;
    }

    if cancel.is_cancelled() {
        return Ok(FlowOutcome::Cancelled);
    }

    let target_dir = state.target.get();
    Ok(FlowOutcome::Completed(FlowResult {
        answers: state.answers.finish()?,
        target_dir,
    }))
}

fn live_hook(binding: &TargetBinding) -> LiveHook {
    let binding = binding.clone();
    Rc::new(move |value: &str| binding.update(value))
}
