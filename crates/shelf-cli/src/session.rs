//! Line-oriented shelf session
//!
//! Each input line is one command. Commands become [`ShelfEvent`]s sent to
//! the event loop; items are addressed by their 1-based position in the
//! latest `list` output.

use std::io::Write;
use std::ops::ControlFlow;
use std::path::PathBuf;

use colored::Colorize;
use shelf_core::{DropPayload, EventSender, ShelfEvent, ShelfItem};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use uuid::Uuid;

use crate::error::{CliError, Result};

/// Items shown by a plain `list`, like the status menu.
const RECENT_ITEMS: usize = 5;

const HELP: &str = "\
Commands:
  text <text>            put text on the shelf
  drop <path>            drop a file or folder (moved into storage)
  add <path>             reference a file where it is
  paste                  add from the clipboard
  copy <n>               copy item n to the clipboard
  delete <n>             delete item n, restoring its file
  remove <n>             forget item n (it was dragged out)
  move-out <n> <dir>     move item n's file into dir
  clear                  restore all files and empty the shelf
  note [text]            set the notepad (empty clears it)
  list                   show the newest items
  list all               show every item and the notepad
  toggle                 show or hide the panel
  help                   show this help
  quit                   end the session";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Text(String),
    Drop(PathBuf),
    Add(PathBuf),
    Paste,
    Copy(usize),
    Delete(usize),
    Remove(usize),
    MoveOut { index: usize, destination: PathBuf },
    Clear,
    Note(String),
    List { all: bool },
    Toggle,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "text" => Self::Text(required(word, rest, "<text>")?.to_string()),
            "drop" => Self::Drop(PathBuf::from(required(word, rest, "<path>")?)),
            "add" => Self::Add(PathBuf::from(required(word, rest, "<path>")?)),
            "paste" => Self::Paste,
            "copy" => Self::Copy(parse_index(word, rest)?),
            "delete" => Self::Delete(parse_index(word, rest)?),
            "remove" => Self::Remove(parse_index(word, rest)?),
            "move-out" => {
                let (index, destination) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| usage(word, "<n> <dir>"))?;
                Self::MoveOut {
                    index: parse_index(word, index)?,
                    destination: PathBuf::from(destination.trim()),
                }
            }
            "clear" => Self::Clear,
            "note" => Self::Note(rest.to_string()),
            "list" | "ls" => match rest {
                "" => Self::List { all: false },
                "all" => Self::List { all: true },
                _ => return Err(usage(word, "[all]")),
            },
            "toggle" => Self::Toggle,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CliError::user(format!(
                    "Unknown command '{other}'. Type 'help' for commands."
                )));
            }
        };
        Ok(Some(command))
    }
}

fn required<'a>(word: &str, rest: &'a str, args: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(usage(word, args))
    } else {
        Ok(rest)
    }
}

fn parse_index(word: &str, rest: &str) -> Result<usize> {
    match rest.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(usage(word, "<n>")),
    }
}

fn usage(word: &str, args: &str) -> CliError {
    CliError::user(format!("usage: {word} {args}"))
}

/// Read commands from `input` until `quit` or end of input.
///
/// Malformed lines are reported on `out` and skipped. The loop is told to
/// shut down when the session ends.
pub async fn drive<R, W>(input: R, out: &mut W, sender: EventSender) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}: {}", "error".red().bold(), e)?;
                continue;
            }
        };
        if execute(command, out, &sender).await?.is_break() {
            break;
        }
    }
    sender.send(ShelfEvent::Shutdown)?;
    Ok(())
}

async fn execute<W: Write>(
    command: SessionCommand,
    out: &mut W,
    sender: &EventSender,
) -> Result<ControlFlow<()>> {
    match command {
        SessionCommand::Text(text) => sender.send(ShelfEvent::AddText(text))?,
        SessionCommand::Drop(path) => {
            let path = std::path::absolute(&path)?;
            sender.send(ShelfEvent::Drop(vec![DropPayload::File(path)]))?;
        }
        SessionCommand::Add(path) => {
            let path = std::path::absolute(&path)?;
            sender.send(ShelfEvent::AddFile {
                path,
                move_to_shelf: false,
            })?;
        }
        SessionCommand::Paste => sender.send(ShelfEvent::Paste)?,
        SessionCommand::Copy(index) => {
            if let Some(id) = resolve(index, out, sender).await? {
                sender.send(ShelfEvent::Copy(id))?;
            }
        }
        SessionCommand::Delete(index) => {
            if let Some(id) = resolve(index, out, sender).await? {
                sender.send(ShelfEvent::Delete(id))?;
            }
        }
        SessionCommand::Remove(index) => {
            if let Some(id) = resolve(index, out, sender).await? {
                sender.send(ShelfEvent::DraggedOut(id))?;
            }
        }
        SessionCommand::MoveOut { index, destination } => {
            if let Some(id) = resolve(index, out, sender).await? {
                let destination = std::path::absolute(&destination)?;
                if sender.move_out(id, &destination).await? {
                    writeln!(out, "{} Moved to {}", "OK".green().bold(), destination.display())?;
                } else {
                    writeln!(out, "{} Item {} was not moved", "warning:".yellow().bold(), index)?;
                }
            }
        }
        SessionCommand::Clear => sender.send(ShelfEvent::Clear)?,
        SessionCommand::Note(text) => sender.send(ShelfEvent::SetNotepad(text))?,
        SessionCommand::List { all: true } => {
            let snapshot = sender.snapshot().await?;
            print_items(out, &snapshot.items)?;
            if !snapshot.notepad.is_empty() {
                writeln!(out, "{} {}", "Notepad:".bold(), snapshot.notepad)?;
            }
        }
        SessionCommand::List { all: false } => {
            let (items, more) = sender.recent(RECENT_ITEMS).await?;
            print_items(out, &items)?;
            if more > 0 {
                writeln!(out, "{}", format!("+ {more} more (list all)").dimmed())?;
            }
        }
        SessionCommand::Toggle => {
            sender.send(ShelfEvent::TogglePanel)?;
            let snapshot = sender.snapshot().await?;
            let state = if snapshot.panel_visible { "shown" } else { "hidden" };
            writeln!(out, "Panel {state}")?;
        }
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Quit => return Ok(ControlFlow::Break(())),
    }
    Ok(ControlFlow::Continue(()))
}

/// Look up the id of the item at 1-based `index`.
async fn resolve<W: Write>(index: usize, out: &mut W, sender: &EventSender) -> Result<Option<Uuid>> {
    let snapshot = sender.snapshot().await?;
    match snapshot.items.get(index - 1) {
        Some(item) => Ok(Some(item.id())),
        None => {
            writeln!(
                out,
                "{}: no item {} (the shelf holds {})",
                "error".red().bold(),
                index,
                snapshot.items.len()
            )?;
            Ok(None)
        }
    }
}

fn print_items<W: Write>(out: &mut W, items: &[ShelfItem]) -> std::io::Result<()> {
    if items.is_empty() {
        writeln!(out, "Shelf is empty")?;
    }
    for (n, item) in items.iter().enumerate() {
        let label = format!("[{}]", item.kind().label());
        write!(out, "{:>3}. {:<9} {}", n + 1, label.cyan(), item.display_name())?;
        if let Some(source) = item.source_path() {
            write!(out, " {}", format!("<- {}", source.display()).dimmed())?;
        }
        writeln!(out)?;
    }
    Ok(())
}
