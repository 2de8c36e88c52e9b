//! Shared fixtures for unit tests

use crate::flow::{LiveHook, PromptError, Prompter, SelectPrompt, TextPrompt};
use crate::product::ProductConfig;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

/// Scripted answer for one prompt
#[derive(Debug, Clone)]
pub enum Reply {
    /// Successive live values of a text prompt; the last one is submitted
    Type(Vec<&'static str>),
    Choose(&'static str),
    /// User pressed Esc / Ctrl-C
    Abort,
    /// Terminal failure
    Fail,
}

impl Reply {
    pub fn text(value: &'static str) -> Self {
        Reply::Type(vec![value])
    }
}

/// Prompter that replays a fixed script and records which prompts were shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            asked: Vec::new(),
        }
    }

    /// Names of the prompts shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, name: &str) -> Reply {
        self.asked.push(name.to_string());
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for {name}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(
        &mut self,
        prompt: &TextPrompt,
        on_change: Option<LiveHook>,
    ) -> Result<String, PromptError> {
        match self.next(prompt.name) {
            Reply::Type(values) => {
                if let Some(hook) = on_change {
                    for value in &values {
                        hook(value);
                    }
                }
                Ok(values.last().copied().unwrap_or_default().to_string())
            }
            Reply::Abort => Err(PromptError::Cancelled),
            Reply::Fail => Err(PromptError::Io(io::Error::other("terminal closed"))),
            Reply::Choose(value) => panic!("text prompt {} got choice {value}", prompt.name),
        }
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<&'static str, PromptError> {
        match self.next(prompt.name) {
            Reply::Choose(value) => {
                assert!(
                    prompt.choices.iter().any(|c| c.value == value),
                    "{value} is not a choice of {}",
                    prompt.name
                );
                Ok(value)
            }
            Reply::Abort => Err(PromptError::Cancelled),
            Reply::Fail => Err(PromptError::Io(io::Error::other("terminal closed"))),
            Reply::Type(values) => panic!("select prompt {} got text {values:?}", prompt.name),
        }
    }
}

/// Product configuration mirroring the Vue scaffold layout
#[derive(Debug, Clone)]
pub struct TestConfig;

impl ProductConfig for TestConfig {
    fn display_name(&self) -> &'static str {
        "create-test"
    }

    fn cli_description(&self) -> &'static str {
        "test scaffolder"
    }

    fn default_project_name(&self) -> &'static str {
        "test-project"
    }

    fn default_project_title(&self) -> &'static str {
        "Test App"
    }

    fn default_app_id(&self) -> &'static str {
        "TEST_APP"
    }

    fn editor_dependency(&self) -> &'static str {
        "aieditor"
    }

    fn editor_file(&self) -> &'static str {
        "src/components/BaseEditor.vue"
    }

    fn upload_file(&self) -> &'static str {
        "src/utils/upload.ts"
    }

    fn bundled_template_dir(&self) -> &'static Path {
        Path::new("template")
    }

    fn next_steps(&self, target_dir: &str, package_manager: &str) -> Vec<String> {
        vec![
            format!("cd {}", target_dir),
            format!("{} install", package_manager),
        ]
    }
}

pub const TEMPLATE_MANIFEST: &str = r#"{
  "name": "template-placeholder",
  "private": true,
  "scripts": {
    "dev:master": "vite --mode master"
  },
  "dependencies": {
    "aieditor": "1.0.0",
    "vue": "^3.5.0"
  }
}
"#;

pub const TEMPLATE_ENV: &str = "# app settings\nVITE_PATH_MODE=hash\nVITE_PROJECT_NAME=\nVITE_APPID=\nVITE_BASE_URL=/api\n";

/// Write a small template tree shaped like the bundled one
pub fn write_template(root: &Path) {
    let files: [(&str, &[u8]); 8] = [
        ("package.json", TEMPLATE_MANIFEST.as_bytes()),
        (".env", TEMPLATE_ENV.as_bytes()),
        (".gitignore", b"node_modules\ndist\n"),
        ("index.html", b"<div id=\"app\"></div>\n"),
        ("src/main.ts", b"import { createApp } from 'vue'\n"),
        ("src/components/BaseEditor.vue", b"<template><div /></template>\n"),
        ("src/utils/upload.ts", b"export const uploadFile = () => {}\n"),
        ("public/favicon.ico", &[0, 0, 1, 0, 255, 254]),
    ];

    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
