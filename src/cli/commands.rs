//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::options::ArgMap;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, RenderStyle, Settings};
use crate::domain::Mode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

const KNOWN_OPTIONS: [&str; 2] = ["mode", "style"];

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { args }) => cmd_tree(cli, args),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Ok(()),
    }
}

/// Settings from config files and env, with `--data-dir` on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let cwd = current_dir()?;
    let mut settings = Settings::load(Some(cwd.as_path())).map_err(InfraError::from)?;
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = dir.clone();
    }
    Ok(settings)
}

fn current_dir() -> CliResult<std::path::PathBuf> {
    Ok(std::env::current_dir().map_err(|e| InfraError::io("resolve current directory", e))?)
}

/// What `tree` should render, resolved from its arguments and the settings.
#[derive(Debug, PartialEq, Eq)]
struct TreeRequest<'a> {
    mode: Mode,
    style: RenderStyle,
    pivot_id: &'a str,
    warnings: Vec<String>,
}

/// `--mode` wins over the configured mode; without either there is nothing to render.
/// Only the first company id is used.
fn resolve_tree_request<'a>(parsed: &'a ArgMap, settings: &Settings) -> CliResult<TreeRequest<'a>> {
    let mut warnings: Vec<String> = parsed
        .options
        .keys()
        .filter(|key| !KNOWN_OPTIONS.contains(&key.as_str()))
        .map(|key| format!("ignoring unknown option --{}", key))
        .collect();

    let style = match parsed.option("style") {
        Some(style) => RenderStyle::parse(style).map_err(|e| match e {
            ApplicationError::Config { message } => CliError::InvalidArgs(message),
            other => CliError::from(InfraError::from(other)),
        })?,
        None => settings.style,
    };

    let mode_name = parsed
        .option("mode")
        .or(settings.mode.as_deref())
        .ok_or_else(|| {
            CliError::Usage("no mode given, use --mode=expanded or --mode=from_root".into())
        })?;
    let mode = Mode::from_name(mode_name).unwrap_or_else(|| {
        warnings.push(format!("unknown mode '{}', showing the company alone", mode_name));
        Mode::Single
    });

    let (pivot_id, extra_ids) = parsed
        .values
        .split_first()
        .ok_or_else(|| CliError::Usage("missing company id".into()))?;
    if !extra_ids.is_empty() {
        warnings.push(format!(
            "only one company per invocation, ignoring: {}",
            extra_ids.join(" ")
        ));
    }

    Ok(TreeRequest {
        mode,
        style,
        pivot_id: pivot_id.as_str(),
        warnings,
    })
}

#[instrument(skip(cli))]
fn cmd_tree(cli: &Cli, args: &[String]) -> CliResult<()> {
    let parsed = ArgMap::from_args(args);
    debug!("parsed arguments: {:?}", parsed);

    let mut settings = load_settings(cli)?;
    let request = resolve_tree_request(&parsed, &settings)?;
    for warning in &request.warnings {
        output::warning(warning);
    }
    settings.style = request.style;

    let container = ServiceContainer::new(settings);
    let service = container.ownership_service();
    let dataset = service
        .load(&container.companies_path(), &container.lands_path())
        .map_err(InfraError::from)?;
    let rendered = service
        .render(&dataset, request.pivot_id, request.mode, container.settings.style)
        .map_err(InfraError::from)?;

    output::info(&rendered);
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml().map_err(InfraError::from)?);
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".into());
            output::action("global", &global);
            let cwd = current_dir()?;
            output::action("local", &local_config_path(&cwd).display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
