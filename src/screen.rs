// Terminal presentation layer for the task store
//
// The screen renders snapshots and turns user input into store intents. It
// owns no task data of its own beyond the pending edit/remove interaction.

use crate::ids::IdGenerator;
use crate::messages::Messages;
use crate::models::{EditTask, Task};
use crate::store::TaskStore;
use colored::Colorize;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const HELP: &str = "\
Commands:
  add <title>     add a task
  toggle <n>      mark task n done / not done
  edit <n>        rename task n (next line is the new title, empty line cancels)
  remove <n>      remove task n (asks for confirmation)
  list            show the list
  help            show this help
  quit            leave";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Edit(usize),
    Remove(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),
    #[error("Usage: add <title>")]
    MissingTitle,
    #[error("Expected a task number, got `{0}`")]
    BadPosition(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "add" | "a" => {
                if rest.is_empty() {
                    Err(CommandError::MissingTitle)
                } else {
                    Ok(Command::Add(rest.to_string()))
                }
            }
            "toggle" | "t" => parse_position(rest).map(Command::Toggle),
            "edit" | "e" => parse_position(rest).map(Command::Edit),
            "remove" | "rm" => parse_position(rest).map(Command::Remove),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_position(s: &str) -> Result<usize, CommandError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadPosition(s.to_string())),
    }
}

/// Outcome of the remove confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirm,
    Cancel,
}

impl Confirmation {
    /// Anything other than an explicit yes cancels
    pub fn from_answer(answer: &str, messages: &Messages) -> Self {
        let answer = answer.trim().to_lowercase();
        if answer == "y" || answer == "yes" || answer == messages.confirm.to_lowercase() {
            Confirmation::Confirm
        } else {
            Confirmation::Cancel
        }
    }
}

/// Whether the input loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Idle,
    Editing { id: i64 },
    ConfirmRemove { id: i64 },
}

pub struct Screen<W, G> {
    store: TaskStore<G>,
    messages: Messages,
    out: W,
    pending: Pending,
}

impl<W: Write, G: IdGenerator> Screen<W, G> {
    pub fn new(store: TaskStore<G>, messages: Messages, out: W) -> Self {
        Self {
            store,
            messages,
            out,
            pending: Pending::Idle,
        }
    }

    pub fn store(&self) -> &TaskStore<G> {
        &self.store
    }

    pub fn into_parts(self) -> (TaskStore<G>, W) {
        (self.store, self.out)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.pending, Pending::Editing { .. })
    }

    /// Print the input prompt
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Handle one line of user input
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match std::mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Editing { id } => {
                self.finish_edit(id, line)?;
                return Ok(Flow::Continue);
            }
            Pending::ConfirmRemove { id } => {
                let decision = Confirmation::from_answer(line, &self.messages);
                self.resolve_remove(id, decision)?;
                return Ok(Flow::Continue);
            }
            Pending::Idle => {}
        }

        match line.parse::<Command>() {
            Ok(command) => self.run(command),
            Err(CommandError::Empty) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "{}", e.to_string().yellow())?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command
    pub fn run(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "screen: running command");

        match command {
            Command::Add(title) => self.on_add(&title)?,
            Command::Toggle(pos) => {
                if let Some(id) = self.id_at(pos)? {
                    self.store.toggle_task_done(id);
                    self.render()?;
                }
            }
            Command::Edit(pos) => {
                if let Some(id) = self.id_at(pos)? {
                    self.start_edit(id)?;
                }
            }
            Command::Remove(pos) => {
                if let Some(id) = self.id_at(pos)? {
                    self.ask_remove(id)?;
                }
            }
            Command::List => self.render()?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn on_add(&mut self, title: &str) -> io::Result<()> {
        match self.store.add_task(title) {
            Ok(_) => self.render(),
            Err(e) if e.is_duplicate_title() => self.duplicate_alert(),
            Err(e) => writeln!(self.out, "{}", e.to_string().red()),
        }
    }

    fn duplicate_alert(&mut self) -> io::Result<()> {
        let Messages {
            duplicate_title,
            duplicate_body,
            ..
        } = &self.messages;
        writeln!(self.out, "{} {}", "!".red().bold(), duplicate_title.red().bold())?;
        writeln!(self.out, "  {}", duplicate_body)
    }

    fn start_edit(&mut self, id: i64) -> io::Result<()> {
        let Some(task) = self.store.find(id) else {
            return Ok(());
        };
        writeln!(self.out, "Editing \"{}\" (empty line cancels):", task.title)?;
        self.pending = Pending::Editing { id };
        Ok(())
    }

    fn finish_edit(&mut self, id: i64, line: &str) -> io::Result<()> {
        let new_task_title = line.trim();
        if new_task_title.is_empty() {
            debug!(id, "screen: edit cancelled");
            writeln!(self.out, "{}", self.messages.cancel.dimmed())?;
            return Ok(());
        }

        self.store.edit_task(EditTask {
            id,
            new_task_title: new_task_title.to_string(),
        });
        self.render()
    }

    fn ask_remove(&mut self, id: i64) -> io::Result<()> {
        writeln!(
            self.out,
            "{}: {} [{}/{}]",
            self.messages.remove_title.bold(),
            self.messages.remove_body,
            self.messages.confirm,
            self.messages.cancel
        )?;
        self.pending = Pending::ConfirmRemove { id };
        Ok(())
    }

    /// Apply the user's answer to a pending removal
    pub fn resolve_remove(&mut self, id: i64, decision: Confirmation) -> io::Result<()> {
        match decision {
            Confirmation::Confirm => {
                self.store.remove_task(id);
                self.render()
            }
            Confirmation::Cancel => {
                debug!(id, "screen: remove cancelled");
                writeln!(self.out, "{}", self.messages.cancel.dimmed())
            }
        }
    }

    /// Map a 1-based list position to a task id
    fn id_at(&mut self, pos: usize) -> io::Result<Option<i64>> {
        match pos.checked_sub(1).and_then(|i| self.store.tasks().get(i)) {
            Some(task) => Ok(Some(task.id)),
            None => {
                writeln!(self.out, "{}", format!("No task at position {}", pos).yellow())?;
                Ok(None)
            }
        }
    }

    /// Draw the header and the current list
    pub fn render(&mut self) -> io::Result<()> {
        let snapshot = self.store.snapshot();

        writeln!(self.out, "{}", self.messages.counter(snapshot.len()).bold())?;
        if snapshot.is_empty() {
            writeln!(self.out, "  {}", self.messages.empty_list.dimmed())?;
        }
        for (i, task) in snapshot.iter().enumerate() {
            writeln!(self.out, "{}", render_task(i + 1, task))?;
        }
        Ok(())
    }
}

fn render_task(pos: usize, task: &Task) -> String {
    if task.done {
        format!("{:>3}. [{}] {}", pos, "✓".green(), task.title.green().strikethrough())
    } else {
        format!("{:>3}. [ ] {}", pos, task.title)
    }
}
