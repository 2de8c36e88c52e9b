//! create-yxuer-vue - Project scaffolding for Vue3 + TypeScript + Vite + Ant Design Vue apps

use anyhow::Error;
use clap::Parser;
use colored::Colorize;
use scaffolder_core::flow::{format_target_dir, CancelToken};
use scaffolder_core::report;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::ProductConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Flags the parser understands; anything else starting with `-` is dropped
const KNOWN_FLAGS: [&str; 5] = ["-h", "--help", "-V", "--version", "--template-dir"];

/// create-yxuer-vue product configuration
#[derive(Clone)]
pub struct YxuerVueConfig;

impl ProductConfig for YxuerVueConfig {
    fn display_name(&self) -> &'static str {
        "create-yxuer-vue"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a Vue3 + TypeScript + Vite + Ant Design Vue project"
    }

    fn default_project_name(&self) -> &'static str {
        "yxuer-vue-project"
    }

    fn default_project_title(&self) -> &'static str {
        "深瞳子应用"
    }

    fn default_app_id(&self) -> &'static str {
        "YXUER_DEMO"
    }

    fn editor_dependency(&self) -> &'static str {
        "aieditor"
    }

    fn editor_label(&self) -> &'static str {
        "rich-text editor (AIEditor)"
    }

    fn editor_file(&self) -> &'static str {
        "src/components/BaseEditor.vue"
    }

    fn upload_file(&self) -> &'static str {
        "src/utils/upload.ts"
    }

    fn upload_label(&self) -> &'static str {
        "file upload utility (Qiniu)"
    }

    fn bundled_template_dir(&self) -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../template"))
    }

    fn next_steps(&self, target_dir: &str, package_manager: &str) -> Vec<String> {
        let mut steps = Vec::new();

        if target_dir != "." {
            steps.push(format!("cd {}", shell_quote(target_dir)));
        }
        steps.push(report::install_command(package_manager));
        steps.push(report::run_script_command(package_manager, "dev:master"));

        steps
    }

    fn tips(&self) -> Vec<String> {
        vec![
            "Adjust the variables in the .env.* files for your environments".to_string(),
            "Routes are loaded from the permission API; configure permissions on the backend"
                .to_string(),
            "Accept VSCode's prompt to install the recommended extensions".to_string(),
            "See README.md for more details".to_string(),
        ]
    }
}

fn shell_quote(dir: &str) -> String {
    if dir.contains(' ') {
        format!("\"{}\"", dir)
    } else {
        dir.to_string()
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-yxuer-vue")]
#[command(about = "Scaffold a Vue3 + TypeScript + Vite + Ant Design Vue project")]
#[command(version)]
#[command(after_help = "Examples:\n  npm create yxuer-vue@latest my-app\n  pnpm create yxuer-vue my-app\n  create-yxuer-vue .")]
pub struct Args {
    /// Project directory to create (asked interactively when omitted)
    #[arg(value_name = "TARGET_DIRECTORY")]
    pub directory: Option<String>,

    /// Extra positionals are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Local directory to use as the template instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            // An empty target counts as no target, so the name question is asked
            directory: args
                .directory
                .filter(|dir| !format_target_dir(dir).is_empty()),
            template_dir: args.template_dir,
        }
    }
}

/// Drop unrecognized flags so they are ignored rather than rejected
///
/// An unknown flag without `=` swallows the next token as its value unless
/// that token is itself a flag. Everything after `--` is kept as is.
fn ignore_unknown_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().peekable();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let flag = match arg.to_str() {
            Some("--") => {
                kept.push(arg);
                kept.extend(args.by_ref());
                break;
            }
            Some(flag) if is_flag(flag) => flag,
            _ => {
                kept.push(arg);
                continue;
            }
        };

        if is_known_flag(flag) {
            kept.push(arg);
            continue;
        }

        let takes_value = !flag.contains('=');
        if takes_value && args.peek().is_some_and(|next| !next.to_str().is_some_and(is_flag)) {
            args.next();
        }
    }

    kept
}

fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1
}

fn is_known_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    KNOWN_FLAGS.contains(&name)
}

/// Exit status for a failed parse: 0 for help and version output, 1 for usage errors
fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn report_error(err: &Error) {
    eprintln!();
    eprintln!("{} {}", "✖".red(), "Failed to create project".red().bold());
    eprintln!("  {:#}", err);
}

fn main() -> ExitCode {
    let args = match Args::try_parse_from(ignore_unknown_flags(std::env::args_os())) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_status(&err));
        }
    };

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt trips the cancel token; the flow stops at the next question
    let cancel = CancelToken::new();
    let interrupt = cancel.clone();
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        interrupt.cancel();
    })
    .ok();

    let config = YxuerVueConfig;
    let user_agent = std::env::var(config.user_agent_env()).ok();

    let result = scaffolder_core::run(&config, args.into(), &cancel, user_agent.as_deref());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
