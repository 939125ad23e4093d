//! Static command catalog returned by `help`.

use crate::model::datetime::DATE_INPUT_HINT;
use serde::Serialize;

/// One catalog entry: usage line plus a one-line summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandHelp {
    pub usage: String,
    pub summary: &'static str,
}

fn entry(usage: impl Into<String>, summary: &'static str) -> CommandHelp {
    CommandHelp {
        usage: usage.into(),
        summary,
    }
}

/// Returns the catalog in display order.
pub fn help_catalog() -> Vec<CommandHelp> {
    vec![
        entry("list", "Shows all the tasks in the list"),
        entry("find [keyword]", "Shows tasks whose name contains the keyword"),
        entry("todo [name]", "Adds a todo task to the list"),
        entry(
            format!("deadline [name] /by [{DATE_INPUT_HINT}]"),
            "Adds a deadline task to the list",
        ),
        entry(
            format!("event [name] /from [{DATE_INPUT_HINT}] /to [{DATE_INPUT_HINT}]"),
            "Adds an event task to the list",
        ),
        entry("mark [task number]", "Marks the task as completed"),
        entry("unmark [task number]", "Marks the task as not completed"),
        entry("delete [task number]", "Removes the task from the list"),
        entry(
            format!("upcoming /on [{DATE_INPUT_HINT}]"),
            "Shows tasks ending at the given date and time",
        ),
        entry(
            format!("upcomingOn [{DATE_INPUT_HINT}]"),
            "Same as upcoming /on",
        ),
        entry("help", "Shows this catalog"),
        entry("bye | exit", "Leaves. Only if you really want to."),
    ]
}
