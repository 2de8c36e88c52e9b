//! Answer set produced by the question flow

use super::FlowError;
use std::fmt;

/// Identifies a question node and the answer it records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    ProjectName,
    Overwrite,
    OverwriteChecker,
    ProjectTitle,
    AppId,
    PathMode,
    NeedEditor,
    NeedUpload,
}

impl AnswerKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::ProjectName => "projectName",
            AnswerKey::Overwrite => "overwrite",
            AnswerKey::OverwriteChecker => "overwriteChecker",
            AnswerKey::ProjectTitle => "projectTitle",
            AnswerKey::AppId => "appId",
            AnswerKey::PathMode => "pathMode",
            AnswerKey::NeedEditor => "needEditor",
            AnswerKey::NeedUpload => "needUpload",
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a target directory that already has files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Remove existing files (keeping `.git`) and continue
    Remove,
    /// Abort the whole run
    Cancel,
    /// Keep existing files; template files overwrite same-named ones
    Ignore,
}

impl OverwriteDecision {
    pub fn from_choice(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(OverwriteDecision::Remove),
            "no" => Some(OverwriteDecision::Cancel),
            "ignore" => Some(OverwriteDecision::Ignore),
            _ => None,
        }
    }
}

/// Router history mode of the generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    #[default]
    Hash,
    History,
}

impl PathMode {
    pub fn from_choice(value: &str) -> Option<Self> {
        match value {
            "hash" => Some(PathMode::Hash),
            "history" => Some(PathMode::History),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathMode::Hash => "hash",
            PathMode::History => "history",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn yes_no(value: &str) -> Option<bool> {
    match value {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// A raw answer as returned by a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Choice(&'static str),
}

impl AnswerValue {
    fn into_text(self) -> String {
        match self {
            AnswerValue::Text(text) => text,
            AnswerValue::Choice(choice) => choice.to_string(),
        }
    }
}

/// Finalized answers for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Absent when the target came from the command line
    pub project_name: Option<String>,
    /// Absent when the target directory was empty or missing
    pub overwrite: Option<OverwriteDecision>,
    pub project_title: String,
    pub app_id: String,
    pub path_mode: PathMode,
    pub need_editor: bool,
    pub need_upload: bool,
}

/// Answers accumulated while the flow runs
#[derive(Debug, Clone, Default)]
pub struct PartialAnswers {
    pub project_name: Option<String>,
    pub overwrite: Option<OverwriteDecision>,
    pub project_title: Option<String>,
    pub app_id: Option<String>,
    pub path_mode: Option<PathMode>,
    pub need_editor: Option<bool>,
    pub need_upload: Option<bool>,
}

impl PartialAnswers {
    /// Store the answer to `key`, converting choice values to typed answers
    pub fn record(&mut self, key: AnswerKey, value: AnswerValue) -> Result<(), FlowError> {
        let unexpected = |value: &AnswerValue| FlowError::UnexpectedAnswer {
            key,
            value: format!("{value:?}"),
        };

        match key {
            AnswerKey::ProjectName => self.project_name = Some(value.into_text()),
            AnswerKey::ProjectTitle => self.project_title = Some(value.into_text()),
            AnswerKey::AppId => self.app_id = Some(value.into_text()),
            AnswerKey::Overwrite => {
                let decision = choice(&value)
                    .and_then(OverwriteDecision::from_choice)
                    .ok_or_else(|| unexpected(&value))?;
                self.overwrite = Some(decision);
            }
            AnswerKey::PathMode => {
                let mode = choice(&value)
                    .and_then(PathMode::from_choice)
                    .ok_or_else(|| unexpected(&value))?;
                self.path_mode = Some(mode);
            }
            AnswerKey::NeedEditor => {
                let wanted = choice(&value)
                    .and_then(yes_no)
                    .ok_or_else(|| unexpected(&value))?;
                self.need_editor = Some(wanted);
            }
            AnswerKey::NeedUpload => {
                let wanted = choice(&value)
                    .and_then(yes_no)
                    .ok_or_else(|| unexpected(&value))?;
                self.need_upload = Some(wanted);
            }
            AnswerKey::OverwriteChecker => return Err(unexpected(&value)),
        }

        Ok(())
    }

    /// Turn the accumulated answers into a complete set
    pub fn finish(self) -> Result<Answers, FlowError> {
        Ok(Answers {
            project_name: self.project_name,
            overwrite: self.overwrite,
            project_title: self
                .project_title
                .ok_or(FlowError::MissingAnswer(AnswerKey::ProjectTitle))?,
            app_id: self.app_id.ok_or(FlowError::MissingAnswer(AnswerKey::AppId))?,
            path_mode: self
                .path_mode
                .ok_or(FlowError::MissingAnswer(AnswerKey::PathMode))?,
            need_editor: self
                .need_editor
                .ok_or(FlowError::MissingAnswer(AnswerKey::NeedEditor))?,
            need_upload: self
                .need_upload
                .ok_or(FlowError::MissingAnswer(AnswerKey::NeedUpload))?,
        })
    }
}

fn choice(value: &AnswerValue) -> Option<&'static str> {
    match value {
        AnswerValue::Choice(choice) => Some(*choice),
        AnswerValue::Text(_) => None,
    }
}
