use crate::cli::core::CommandResult;
use crate::cli::core::ShellContext;
use crate::cli::registry::CommandEntry;

const CATEGORY_TITLE: &str = "Expenses by Category";
const SERIES_TITLE: &str = "Expenses Over Time";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "by-category",
            "Chart total spending per category",
            "by-category",
            cmd_by_category,
        ),
        CommandEntry::new(
            "over-time",
            "Chart expenses in date order",
            "over-time",
            cmd_over_time,
        ),
    ]
}

fn cmd_by_category(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.store.by_category();
    context.chart.plot_categories(CATEGORY_TITLE, &totals)?;
    Ok(())
}

fn cmd_over_time(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let series = context.store.chronological_series()?;
    context.chart.plot_series(SERIES_TITLE, &series)?;
    Ok(())
}
