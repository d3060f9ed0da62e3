use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    history::DefaultHistory,
    Context as ReadlineContext, Editor, Helper, Highlighter, Hinter, Validator,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output::info as output_info;

const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => {
            let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
            editor.set_helper(Some(CommandHelper::new(context.registry.names())));
            output_info("Type `help` to see available commands.");
            run(&mut context, &mut Terminal { editor })
        }
        CliMode::Script => run(&mut context, &mut ScriptLines::new(io::stdin().lock())),
    }
}

/// Supplies command lines to the shell loop.
trait LineSource {
    /// The next line to run, or `None` once input ends or the user leaves.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

struct Terminal {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl LineSource for Terminal {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        self.editor.add_history_entry(trimmed).ok();
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    if cli_io::confirm_action("Exit shell?").unwrap_or(true) {
                        return Ok(None);
                    }
                }
                Err(ReadlineError::Eof) => {
                    output_info("Exiting shell.");
                    return Ok(None);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Non-interactive input, one command per line.
struct ScriptLines<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> ScriptLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineSource for ScriptLines<R> {
    fn next_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        Ok(self.lines.next().transpose()?)
    }
}

fn run(context: &mut ShellContext, source: &mut impl LineSource) -> Result<(), CliError> {
    while let Some(line) = source.next_line(&context.prompt())? {
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&format!("Could not read that line: {err}."));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.dispatch(&raw.to_lowercase(), raw, &args)
}

/// Tab-completes the command word. Arguments are free text.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(names: impl Iterator<Item = &'static str>) -> Self {
        let mut commands: Vec<_> = names.collect();
        commands.sort_unstable();
        Self { commands }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let prefix = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(|name| name.starts_with(&prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let word = head.trim_start();
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((head.len() - word.len(), self.candidates(word)))
    }
}
