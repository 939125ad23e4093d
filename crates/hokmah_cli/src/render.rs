//! Outcome rendering for the console.
//!
//! # Responsibility
//! - Turn structured outcomes into display lines or JSON objects.
//! - Keep all user-facing phrasing out of the core crate.

use hokmah_core::{format_display, ErrorBody, IndexedTask, Outcome, Reply, TrackerError};
use serde_json::{json, Value};

const SEPARATOR_PAIRS: usize = 40;

/// Rule printed above and below every console block.
pub fn separator() -> String {
    format!("{}+", "+-".repeat(SEPARATOR_PAIRS))
}

pub fn welcome_lines() -> Vec<String> {
    lines(&["I'm Hokmah.", "What do you want?"])
}

/// Display lines for one outcome, including any save failure notice.
pub fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    let mut rendered = match &outcome.result {
        Ok(reply) => reply_lines(reply),
        Err(err) => vec![err.to_string()],
    };
    if let Some(err) = &outcome.save_error {
        rendered.push(format!("(Heads up: I couldn't save your tasks. {err})"));
    }
    rendered
}

/// JSON object for one outcome, in the core crate's wire shape.
pub fn outcome_json(outcome: &Outcome) -> serde_json::Result<Value> {
    serde_json::to_value(outcome)
}

/// JSON object for an error raised outside command processing.
pub fn error_json(err: TrackerError) -> serde_json::Result<Value> {
    Ok(json!({ "error": serde_json::to_value(ErrorBody::from(err))? }))
}

fn reply_lines(reply: &Reply) -> Vec<String> {
    match reply {
        Reply::Listed { tasks } if tasks.is_empty() => lines(&["Your list is empty. Must be nice."]),
        Reply::Listed { tasks } => with_entries("Here are the tasks in your list:", tasks),
        Reply::Found { keyword, tasks } if tasks.is_empty() => {
            vec![format!("No tasks found containing: {keyword}")]
        }
        Reply::Found { tasks, .. } => {
            with_entries("Here are the matching tasks in your list:", tasks)
        }
        Reply::Marked { task } => vec![
            "Bleh! I've marked this task as done!".to_string(),
            task.describe(),
            "Are you happy?".to_string(),
        ],
        Reply::Unmarked { task } => vec![
            "So you have not done this task yet?".to_string(),
            task.describe(),
            "That's sad. I've marked it as such.".to_string(),
        ],
        Reply::Deleted { task, remaining } => vec![
            "Ok sure, I've removed this task:".to_string(),
            task.describe(),
            format!("Now you have {remaining} tasks in the list. What else do you want?"),
        ],
        Reply::Added { task, total } => vec![
            "Ok sure, I've added this task:".to_string(),
            task.describe(),
            format!("Now you have {total} tasks in the list. What else do you want?"),
        ],
        Reply::Upcoming { on, tasks } if tasks.is_empty() => {
            vec![format!("You have no upcoming tasks on {}.", format_display(on))]
        }
        Reply::Upcoming { on, tasks } => {
            let mut rendered = vec![format!("Your upcoming tasks on {}:", format_display(on))];
            rendered.extend(tasks.iter().map(|entry| entry.task.describe()));
            rendered.push(format!("You have {} upcoming task(s).", tasks.len()));
            rendered
        }
        Reply::Help { commands } => {
            let mut rendered = lines(&["You seriously need help? Fine.", "Here is what I can do:"]);
            for entry in commands {
                rendered.push(entry.usage.clone());
                rendered.push(format!("\t{}", entry.summary));
            }
            rendered
        }
        Reply::Farewell => lines(&["Goodbye!", "I hope you don't come back soon!"]),
        Reply::Unsupported { .. } => lines(&[
            "Ooookay? Just what are you trying to do?",
            "If you don't know what to ask you can use the 'help' command.",
        ]),
    }
}

fn with_entries(heading: &str, tasks: &[IndexedTask]) -> Vec<String> {
    let mut rendered = vec![heading.to_string()];
    rendered.extend(
        tasks
            .iter()
            .map(|entry| format!("{}.{}", entry.index, entry.task.describe())),
    );
    rendered
}

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
