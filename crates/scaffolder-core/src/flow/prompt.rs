//! Prompt descriptions and the `Prompter` seam between the flow and a terminal

use std::io;
use std::rc::Rc;
use thiserror::Error;

/// Hook fired with the live input value on every keystroke
pub type LiveHook = Rc<dyn Fn(&str)>;

/// Free-text question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    /// Answer key this prompt fills
    pub name: &'static str,
    pub message: String,
    pub default: String,
}

/// One option of a select question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(value: &'static str, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            hint: String::new(),
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Single-select question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPrompt {
    /// Answer key this prompt fills
    pub name: &'static str,
    pub message: String,
    pub choices: Vec<Choice>,
    /// Index of the preselected choice
    pub initial: usize,
}

impl SelectPrompt {
    pub fn initial_value(&self) -> Option<&'static str> {
        self.choices.get(self.initial).map(|c| c.value)
    }
}

#[derive(Error, Debug)]
pub enum PromptError {
    /// The user aborted the prompt (Esc / Ctrl-C)
    #[error("prompt cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            PromptError::Cancelled
        } else {
            PromptError::Io(err)
        }
    }
}

/// Something that can ask the user questions
///
/// The interactive implementation lives in the `tui` module; tests drive the
/// flow with a scripted one.
pub trait Prompter {
    /// Ask a free-text question; `on_change` (if any) sees every intermediate value
    fn text(&mut self, prompt: &TextPrompt, on_change: Option<LiveHook>)
        -> Result<String, PromptError>;

    /// Ask a single-select question and return the chosen value
    fn select(&mut self, prompt: &SelectPrompt) -> Result<&'static str, PromptError>;
}
