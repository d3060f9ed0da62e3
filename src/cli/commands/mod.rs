mod expense;
mod report;
mod system;

use crate::cli::registry::CommandRegistry;

/// Every shell command, in the order `help` lists them.
pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::from_entries(
        expense::definitions()
            .into_iter()
            .chain(report::definitions())
            .chain(system::definitions()),
    )
}
