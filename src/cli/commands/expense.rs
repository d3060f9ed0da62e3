use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::parse_amount;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense",
            "add <category> <amount> [description] [YYYY-MM-DD]",
            cmd_add,
        ),
        CommandEntry::new(
            "list",
            "List expenses by category",
            "list",
            cmd_list,
        ),
        CommandEntry::new("total", "Show total spending", "total", cmd_total),
        CommandEntry::new(
            "delete",
            "Delete an expense by category and index",
            "delete <category> <index>",
            cmd_delete,
        ),
        CommandEntry::new(
            "reset",
            "Remove every recorded expense",
            "reset [--yes]",
            cmd_reset,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, amount, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <category> <amount> [description] [YYYY-MM-DD]".into(),
        ));
    };
    if rest.len() > 2 {
        return Err(CommandError::InvalidArguments(
            "too many arguments; quote descriptions that contain spaces".into(),
        ));
    }
    let amount = parse_amount(amount)?;
    let description = rest.first().copied().unwrap_or("");
    let date = rest.get(1).copied();
    context.store.add(*category, amount, description, date)?;
    io::print_success("Expense added successfully.");
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let book = context.store.all();
    if book.is_empty() {
        io::print_info("No expenses recorded.");
        return Ok(());
    }
    output::section("All expenses");
    for (category, records) in book.iter() {
        io::print_info(format!("Category: {category}"));
        for (index, record) in records.iter().enumerate() {
            io::print_info(format!(
                "  [{index}] Amount: {} - Date: {} - Description: {}",
                context.config.format_amount(record.amount),
                record.date,
                record.description
            ));
        }
    }
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let total = context.store.total();
    io::print_info(format!("Total: {}", context.config.format_amount(total)));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, index] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: delete <category> <index>".into(),
        ));
    };
    let Some(records) = context.store.all().get(category) else {
        io::print_warning(format!("Category `{category}` not found."));
        return Ok(());
    };
    let last = records.len().saturating_sub(1);
    let index: usize = index.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "index must be a whole number between 0 and {last}"
        ))
    })?;
    if context.store.delete(category, index)? {
        io::print_success("Expense deleted successfully.");
    } else {
        io::print_warning(format!(
            "Failed to delete the expense. Check the index (0 to {last})."
        ));
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let forced = args.iter().any(|arg| matches!(*arg, "--yes" | "-y"));
    if !forced && !context.confirm("Are you sure you want to reset all expenses?")? {
        if context.mode == CliMode::Script {
            io::print_warning("Reset requires `--yes` in script mode.");
        } else {
            io::print_info("Reset cancelled.");
        }
        return Ok(());
    }
    context.store.reset()?;
    io::print_success("All expenses have been reset.");
    Ok(())
}
