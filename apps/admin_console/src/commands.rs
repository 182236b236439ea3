//! Line-oriented user intents and their dispatch into the table controller.

use admin_core::MemberTableController;
use shared::{
    domain::{EditableField, MemberId},
    error::ParseFieldError,
};
use thiserror::Error;

pub const USAGE: &str = "\
commands:
  search [term]                 filter by name/email/role or exact id; blank restores all
  page <n> | first | prev | next | last
  select <id> | unselect <id>   toggle a row on the current page
  select-all | unselect-all     toggle every row on the current page
  edit <id>                     start editing a row
  set <id> <name|email|role> <value>
  save <id>                     leave edit mode
  delete <id> | delete-selected
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Search(String),
    Page(usize),
    First,
    Previous,
    Next,
    Last,
    Select(MemberId),
    Unselect(MemberId),
    SelectAll,
    UnselectAll,
    Edit(MemberId),
    Set {
        id: MemberId,
        field: EditableField,
        value: String,
    },
    Save(MemberId),
    Delete(MemberId),
    DeleteSelected,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' is not a page number")]
    InvalidPage(String),
    #[error(transparent)]
    InvalidField(#[from] ParseFieldError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Notice(String),
    Help,
    Quit,
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim_start()),
        None => (input, ""),
    }
}

fn required_id(rest: &str, command: &'static str) -> Result<MemberId, CommandError> {
    let (id, _) = split_word(rest);
    if id.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a row id",
        });
    }
    Ok(MemberId::from(id))
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, CommandError> {
    let (name, rest) = split_word(line.trim());
    let command = match name.to_ascii_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "search" | "s" => ConsoleCommand::Search(rest.trim().to_string()),
        "page" => {
            let (raw, _) = split_word(rest);
            if raw.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "page",
                    argument: "a page number",
                });
            }
            let page = raw
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidPage(raw.to_string()))?;
            ConsoleCommand::Page(page)
        }
        "first" => ConsoleCommand::First,
        "prev" | "previous" => ConsoleCommand::Previous,
        "next" => ConsoleCommand::Next,
        "last" => ConsoleCommand::Last,
        "select" => ConsoleCommand::Select(required_id(rest, "select")?),
        "unselect" => ConsoleCommand::Unselect(required_id(rest, "unselect")?),
        "select-all" => ConsoleCommand::SelectAll,
        "unselect-all" => ConsoleCommand::UnselectAll,
        "edit" => ConsoleCommand::Edit(required_id(rest, "edit")?),
        "set" => {
            let id = required_id(rest, "set")?;
            let (_, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    argument: "a field (name, email or role)",
                });
            }
            ConsoleCommand::Set {
                id,
                field: field.parse()?,
                value: value.trim_end().to_string(),
            }
        }
        "save" => ConsoleCommand::Save(required_id(rest, "save")?),
        "delete" => ConsoleCommand::Delete(required_id(rest, "delete")?),
        "delete-selected" => ConsoleCommand::DeleteSelected,
        "show" | "ls" => ConsoleCommand::Show,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

pub fn dispatch(controller: &mut MemberTableController, cmd: ConsoleCommand) -> Outcome {
    let cmd_name = match &cmd {
        ConsoleCommand::Search(_) => "search",
        ConsoleCommand::Page(_) => "page",
        ConsoleCommand::First => "first",
        ConsoleCommand::Previous => "previous",
        ConsoleCommand::Next => "next",
        ConsoleCommand::Last => "last",
        ConsoleCommand::Select(_) => "select",
        ConsoleCommand::Unselect(_) => "unselect",
        ConsoleCommand::SelectAll => "select_all",
        ConsoleCommand::UnselectAll => "unselect_all",
        ConsoleCommand::Edit(_) => "edit",
        ConsoleCommand::Set { .. } => "set",
        ConsoleCommand::Save(_) => "save",
        ConsoleCommand::Delete(_) => "delete",
        ConsoleCommand::DeleteSelected => "delete_selected",
        ConsoleCommand::Show => "show",
        ConsoleCommand::Help => "help",
        ConsoleCommand::Quit => "quit",
    };
    tracing::debug!(command = cmd_name, "dispatching console command");

    match cmd {
        ConsoleCommand::Search(term) => {
            controller.search(&term);
            Outcome::Render
        }
        ConsoleCommand::Page(page) => page_outcome(controller, page, |c| c.change_page(page)),
        ConsoleCommand::First => page_outcome(controller, 1, MemberTableController::first_page),
        ConsoleCommand::Previous => {
            if controller.previous_page() {
                Outcome::Render
            } else {
                Outcome::Notice("already on the first page".to_string())
            }
        }
        ConsoleCommand::Next => {
            let target = controller.current_page() + 1;
            page_outcome(controller, target, MemberTableController::next_page)
        }
        ConsoleCommand::Last => {
            let target = controller.total_pages();
            page_outcome(controller, target, MemberTableController::last_page)
        }
        ConsoleCommand::Select(id) => {
            controller.toggle_row_select(&id, true);
            Outcome::Render
        }
        ConsoleCommand::Unselect(id) => {
            controller.toggle_row_select(&id, false);
            Outcome::Render
        }
        ConsoleCommand::SelectAll => {
            controller.toggle_select_all_on_page(true);
            Outcome::Render
        }
        ConsoleCommand::UnselectAll => {
            controller.toggle_select_all_on_page(false);
            Outcome::Render
        }
        ConsoleCommand::Edit(id) => {
            controller.begin_edit(&id);
            Outcome::Render
        }
        ConsoleCommand::Set { id, field, value } => {
            if controller.apply_edit_field(&id, field, &value) {
                Outcome::Render
            } else {
                Outcome::Notice(format!("no row with id '{id}'"))
            }
        }
        ConsoleCommand::Save(id) => {
            controller.commit_edit(&id);
            Outcome::Render
        }
        ConsoleCommand::Delete(id) => {
            if controller.delete_row(&id) {
                Outcome::Render
            } else {
                Outcome::Notice(format!("no row with id '{id}'"))
            }
        }
        ConsoleCommand::DeleteSelected => match controller.delete_selected() {
            0 => Outcome::Notice("nothing selected".to_string()),
            1 => Outcome::Notice("deleted 1 row".to_string()),
            n => Outcome::Notice(format!("deleted {n} rows")),
        },
        ConsoleCommand::Show => Outcome::Render,
        ConsoleCommand::Help => Outcome::Help,
        ConsoleCommand::Quit => Outcome::Quit,
    }
}

fn page_outcome(
    controller: &mut MemberTableController,
    target: usize,
    change: impl FnOnce(&mut MemberTableController) -> bool,
) -> Outcome {
    if change(controller) {
        Outcome::Render
    } else {
        Outcome::Notice(format!(
            "page {target} is out of range (1-{})",
            controller.total_pages()
        ))
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
