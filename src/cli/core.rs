//! Shell construction, dispatch, and error reporting.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::{
    chart::{ChartSink, TextChart},
    config::{Config, ConfigError, ConfigManager},
    core::ExpenseStore,
    errors::ExpenseError,
    utils,
};

use super::commands;
use super::io as cli_io;
use super::output;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single shell command. The shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Amount should be a number, got `{0}`.")]
    InvalidAmount(String),
    #[error(transparent)]
    Core(ExpenseError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ExpenseError> for CommandError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::InvalidAmount(raw) => CommandError::InvalidAmount(raw),
            other => CommandError::Core(other),
        }
    }
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Prompt(err.to_string())
    }
}

/// Failure that prevents the shell from starting or continuing.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ShellContext {
    /// Builds a shell from the on-disk configuration and opens its expense file.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(&utils::app_data_dir());
        let config = config_manager.load()?;
        let data_file = config.resolve_data_file(utils::data_file_override());
        let store = ExpenseStore::open(data_file)?;
        tracing::info!(
            path = %store.path().display(),
            records = store.len(),
            "expense shell ready"
        );
        let chart = Box::new(TextChart::stdout(config.currency_symbol.clone()));
        let mut context = Self::with_parts(mode, config, store, chart);
        context.config_path = Some(config_manager.config_path().to_path_buf());
        Ok(context)
    }

    /// Assembles a shell from already-built parts.
    pub fn with_parts(
        mode: CliMode,
        config: Config,
        store: ExpenseStore,
        chart: Box<dyn ChartSink>,
    ) -> Self {
        output::set_color_enabled(config.ui_color_enabled && mode == CliMode::Interactive);
        Self {
            mode,
            registry: commands::registry(),
            store,
            config,
            config_path: None,
            chart,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.find(command).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.closest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(false);
        }
        cli_io::confirm_action(prompt)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::InvalidAmount(raw) => {
                tracing::debug!(%raw, "rejected amount");
                cli_io::print_warning("Amount should be a number.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }
}
