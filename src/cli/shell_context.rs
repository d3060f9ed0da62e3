use std::path::PathBuf;

use crate::{chart::ChartSink, config::Config, core::ExpenseStore};

use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every command handler for the lifetime of the shell.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: ExpenseStore,
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub chart: Box<dyn ChartSink>,
}

impl ShellContext {
    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.find(name)
    }

    pub fn prompt(&self) -> String {
        format!("expenses ({})> ", self.store.len())
    }
}
