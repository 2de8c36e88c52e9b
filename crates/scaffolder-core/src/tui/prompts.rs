//! Charm-style CLI prompts using cliclack

use crate::flow::{
    collect_answers, target_root, CancelToken, FlowDefaults, FlowOutcome, FlowState, LiveHook,
    PromptError, Prompter, SelectPrompt, TextPrompt, CANCELLED_MESSAGE,
};
use crate::product::ProductConfig;
use crate::report;
use crate::templates::{self, MaterializeReport};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Target directory given on the command line; skips the name question
    pub directory: Option<String>,

    /// Local directory to use for the template instead of the bundled one
    pub template_dir: Option<PathBuf>,
}

/// `Prompter` backed by cliclack's inline prompts
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn text(
        &mut self,
        prompt: &TextPrompt,
        on_change: Option<LiveHook>,
    ) -> Result<String, PromptError> {
        let mut input = cliclack::input(&prompt.message)
            .placeholder(&prompt.default)
            .default_input(&prompt.default);

        if let Some(hook) = on_change {
            input = input.validate_interactively(move |value: &String| -> Result<(), String> {
                hook(value);
                Ok(())
            });
        }

        let value: String = input.interact()?;
        Ok(value)
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<&'static str, PromptError> {
        let mut select = cliclack::select(&prompt.message);
        for choice in &prompt.choices {
            select = select.item(choice.value, &choice.label, &choice.hint);
        }
        if let Some(initial) = prompt.initial_value() {
            select = select.initial_value(initial);
        }

        Ok(select.interact()?)
    }
}

/// Run the CLI with interactive prompts
///
/// `user_agent` is the raw package-manager user agent the binary read from
/// its environment; it only affects the printed next steps.
pub fn run<C: ProductConfig>(
    config: &C,
    args: CreateArgs,
    cancel: &CancelToken,
    user_agent: Option<&str>,
) -> Result<()> {
    // Fail before asking anything if there is nothing to copy
    let template_dir = templates::locate_template_dir(config, args.template_dir.as_deref())?;

    cliclack::intro(config.display_name())?;
    if args.template_dir.is_some() {
        cliclack::log::info(format!(
            "Using local template from {}",
            template_dir.display()
        ))?;
    }

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let state = FlowState::new(
        FlowDefaults::from_config(config),
        args.directory.as_deref(),
        cwd.clone(),
    );

    let result = match collect_answers(&mut CliclackPrompter, state, cancel)? {
        FlowOutcome::Completed(result) => result,
        FlowOutcome::Cancelled => {
            cliclack::outro_cancel(CANCELLED_MESSAGE)?;
            return Ok(());
        }
    };

    let target = target_root(&cwd, &result.target_dir);

    let spinner = cliclack::spinner();
    spinner.start(format!("Creating project in {}...", target.display()));

    let summary = match templates::materialize(config, &result.answers, &template_dir, &target) {
        Ok(summary) => summary,
        Err(e) => {
            let step = format!("Failed to {}", e.step());
            spinner.error(&step);
            return Err(anyhow::Error::new(e).context(step));
        }
    };

    spinner.stop(describe(&summary, &target.display().to_string()));

    if !summary.env.missing.is_empty() {
        cliclack::log::warning(format!(
            "{} has no line for {}; set it by hand",
            config.env_file(),
            summary.env.missing.join(", ")
        ))?;
    }

    let package_manager =
        report::package_manager_label(user_agent, config.default_package_manager());
    print_next_steps(config, &result.target_dir, package_manager)?;

    Ok(())
}

fn describe(summary: &MaterializeReport, target: &str) -> String {
    // The manifest is written rather than copied; pruned files were copied first
    let created = (summary.files_copied + 1).saturating_sub(summary.pruned.len());
    let mut message = format!(
        "Created {} ({} files) in {}",
        summary.package_name, created, target
    );
    if !summary.pruned.is_empty() {
        message.push_str(&format!(" (skipped {})", summary.pruned.join(", ")));
    }
    message
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    target_dir: &str,
    package_manager: &str,
) -> Result<()> {
    let steps = config.next_steps(target_dir, package_manager);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}  {}", format!("{}.", i + 1).dimmed(), step.as_str().cyan());
    }

    let tips = config.tips();
    if !tips.is_empty() {
        println!();
        println!("  {}", "Tips".bold());
        println!();
        for tip in &tips {
            println!("  {} {}", "•".yellow(), tip);
        }
    }

    println!();
    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::EnvPatchReport;

    #[test]
    fn test_describe_counts_manifest_and_pruned_files() {
        let summary = MaterializeReport {
            files_copied: 7,
            package_name: "my-app".to_string(),
            pruned: vec!["src/utils/upload.ts".to_string()],
            env: EnvPatchReport::default(),
        };

        assert_eq!(
            describe(&summary, "/work/my-app"),
            "Created my-app (7 files) in /work/my-app (skipped src/utils/upload.ts)"
        );
    }
}
