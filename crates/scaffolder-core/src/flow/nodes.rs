//! The ordered question nodes and their gates

use super::answers::{AnswerKey, OverwriteDecision};
use super::prompt::{Choice, SelectPrompt, TextPrompt};
use super::{FlowError, FlowState};
use crate::templates::copier;

/// Decision of a node's gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Ask,
    Skip,
    /// Abort the whole flow
    Cancel,
}

/// What a node shows once its gate says `Ask`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Free text; `live` wires the prompt's on-change hook to the target binding
    Text { prompt: TextPrompt, live: bool },
    Select(SelectPrompt),
    /// Checkpoint nodes never show anything
    Silent,
}

/// One question of the flow
///
/// Gates and prompt builders are plain functions of the accumulated state, so
/// the order in [`QUESTIONS`] is the whole control flow.
#[derive(Clone, Copy)]
pub struct QuestionNode {
    pub key: AnswerKey,
    pub gate: fn(&FlowState) -> Result<Gate, FlowError>,
    pub prompt: fn(&FlowState) -> Prompt,
}

pub const QUESTIONS: [QuestionNode; 8] = [
    QuestionNode {
        key: AnswerKey::ProjectName,
        gate: project_name_gate,
        prompt: project_name_prompt,
    },
    QuestionNode {
        key: AnswerKey::Overwrite,
        gate: overwrite_gate,
        prompt: overwrite_prompt,
    },
    QuestionNode {
        key: AnswerKey::OverwriteChecker,
        gate: overwrite_checker_gate,
        prompt: silent,
    },
    QuestionNode {
        key: AnswerKey::ProjectTitle,
        gate: always,
        prompt: project_title_prompt,
    },
    QuestionNode {
        key: AnswerKey::AppId,
        gate: always,
        prompt: app_id_prompt,
    },
    QuestionNode {
        key: AnswerKey::PathMode,
        gate: always,
        prompt: path_mode_prompt,
    },
    QuestionNode {
        key: AnswerKey::NeedEditor,
        gate: always,
        prompt: need_editor_prompt,
    },
    QuestionNode {
        key: AnswerKey::NeedUpload,
        gate: always,
        prompt: need_upload_prompt,
    },
];

fn always(_: &FlowState) -> Result<Gate, FlowError> {
    Ok(Gate::Ask)
}

fn silent(_: &FlowState) -> Prompt {
    Prompt::Silent
}

fn project_name_gate(state: &FlowState) -> Result<Gate, FlowError> {
    Ok(if state.cli_target.is_some() {
        Gate::Skip
    } else {
        Gate::Ask
    })
}

fn project_name_prompt(state: &FlowState) -> Prompt {
    Prompt::Text {
        prompt: TextPrompt {
            name: AnswerKey::ProjectName.as_str(),
            message: "Project name".to_string(),
            default: state.defaults.project_name.clone(),
        },
        live: true,
    }
}

fn overwrite_gate(state: &FlowState) -> Result<Gate, FlowError> {
    let path = state.target_path();
    let empty = copier::path_is_empty(&path).map_err(|source| FlowError::Inspect {
        path: path.clone(),
        source,
    })?;
    Ok(if empty { Gate::Skip } else { Gate::Ask })
}

fn overwrite_prompt(state: &FlowState) -> Prompt {
    let target = state.target.get();
    let location = if target == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{}\"", target)
    };

    Prompt::Select(SelectPrompt {
        name: AnswerKey::Overwrite.as_str(),
        message: format!("{} is not empty. How would you like to proceed?", location),
        choices: vec![
            Choice::new("yes", "Remove existing files and continue"),
            Choice::new("no", "Cancel operation"),
            Choice::new("ignore", "Ignore existing files and continue"),
        ],
        initial: 0,
    })
}

fn overwrite_checker_gate(state: &FlowState) -> Result<Gate, FlowError> {
    Ok(match state.answers.overwrite {
        Some(OverwriteDecision::Cancel) => Gate::Cancel,
        _ => Gate::Skip,
    })
}

fn project_title_prompt(state: &FlowState) -> Prompt {
    Prompt::Text {
        prompt: TextPrompt {
            name: AnswerKey::ProjectTitle.as_str(),
            message: "Project title (shown in the browser tab)".to_string(),
            default: state.defaults.project_title.clone(),
        },
        live: false,
    }
}

fn app_id_prompt(state: &FlowState) -> Prompt {
    Prompt::Text {
        prompt: TextPrompt {
            name: AnswerKey::AppId.as_str(),
            message: "Application ID".to_string(),
            default: state.defaults.app_id.clone(),
        },
        live: false,
    }
}

fn path_mode_prompt(_: &FlowState) -> Prompt {
    Prompt::Select(SelectPrompt {
        name: AnswerKey::PathMode.as_str(),
        message: "Router mode".to_string(),
        choices: vec![
            Choice::new("hash", "Hash mode (recommended)").hint("no server configuration needed"),
            Choice::new("history", "History mode").hint("requires server fallback routing"),
        ],
        initial: 0,
    })
}

fn yes_no_prompt(name: &'static str, message: String) -> Prompt {
    Prompt::Select(SelectPrompt {
        name,
        message,
        choices: vec![Choice::new("yes", "Yes"), Choice::new("no", "No")],
        initial: 1,
    })
}

fn need_editor_prompt(state: &FlowState) -> Prompt {
    yes_no_prompt(
        AnswerKey::NeedEditor.as_str(),
        format!("Do you need the {}?", state.defaults.editor_label),
    )
}

fn need_upload_prompt(state: &FlowState) -> Prompt {
    yes_no_prompt(
        AnswerKey::NeedUpload.as_str(),
        format!("Do you need the {}?", state.defaults.upload_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowDefaults;
    use std::fs;
    use tempfile::tempdir;

    fn defaults() -> FlowDefaults {
        FlowDefaults {
            project_name: "demo-project".to_string(),
            project_title: "Demo".to_string(),
            app_id: "DEMO".to_string(),
            editor_label: "rich-text editor".to_string(),
            upload_label: "upload utility".to_string(),
        }
    }

    #[test]
    fn test_node_order() {
        let keys: Vec<_> = QUESTIONS.iter().map(|n| n.key).collect();
        assert_eq!(
            keys,
            vec![
                AnswerKey::ProjectName,
                AnswerKey::Overwrite,
                AnswerKey::OverwriteChecker,
                AnswerKey::ProjectTitle,
                AnswerKey::AppId,
                AnswerKey::PathMode,
                AnswerKey::NeedEditor,
                AnswerKey::NeedUpload,
            ]
        );
    }

    #[test]
    fn test_name_gate_skips_with_cli_target() {
        let base = tempdir().unwrap();
        let with_arg = FlowState::new(defaults(), Some("my-app"), base.path().to_path_buf());
        let without = FlowState::new(defaults(), None, base.path().to_path_buf());

        assert_eq!(project_name_gate(&with_arg).unwrap(), Gate::Skip);
        assert_eq!(project_name_gate(&without).unwrap(), Gate::Ask);
    }

    #[test]
    fn test_overwrite_gate_follows_directory_contents() {
        let base = tempdir().unwrap();
        let state = FlowState::new(defaults(), Some("my-app"), base.path().to_path_buf());
        assert_eq!(overwrite_gate(&state).unwrap(), Gate::Skip);

        fs::create_dir_all(base.path().join("my-app/.git")).unwrap();
        assert_eq!(overwrite_gate(&state).unwrap(), Gate::Skip);

        fs::write(base.path().join("my-app/index.html"), "").unwrap();
        assert_eq!(overwrite_gate(&state).unwrap(), Gate::Ask);
    }

    #[test]
    fn test_overwrite_gate_error_is_not_cancellation() {
        let base = tempdir().unwrap();
        fs::write(base.path().join("file"), "not a directory").unwrap();
        let state = FlowState::new(defaults(), Some("file"), base.path().to_path_buf());

        let err = overwrite_gate(&state).unwrap_err();
        assert!(matches!(err, FlowError::Inspect { .. }));
    }

    #[test]
    fn test_checker_cancels_only_on_cancel_choice() {
        let base = tempdir().unwrap();
        let mut state = FlowState::new(defaults(), None, base.path().to_path_buf());
        assert_eq!(overwrite_checker_gate(&state).unwrap(), Gate::Skip);

        state.answers.overwrite = Some(OverwriteDecision::Ignore);
        assert_eq!(overwrite_checker_gate(&state).unwrap(), Gate::Skip);

        state.answers.overwrite = Some(OverwriteDecision::Cancel);
        assert_eq!(overwrite_checker_gate(&state).unwrap(), Gate::Cancel);
    }

    #[test]
    fn test_overwrite_message_for_current_directory() {
        let base = tempdir().unwrap();
        let state = FlowState::new(defaults(), Some("."), base.path().to_path_buf());
        match overwrite_prompt(&state) {
            Prompt::Select(select) => {
                assert!(select.message.starts_with("Current directory"));
                assert_eq!(select.initial_value(), Some("yes"));
            }
            other => panic!("unexpected prompt: {other:?}"),
        }
    }

    #[test]
    fn test_feature_questions_default_to_no() {
        let base = tempdir().unwrap();
        let state = FlowState::new(defaults(), None, base.path().to_path_buf());
        for build in [need_editor_prompt, need_upload_prompt] {
            match build(&state) {
                Prompt::Select(select) => assert_eq!(select.initial_value(), Some("no")),
                other => panic!("unexpected prompt: {other:?}"),
            }
        }
    }
}
