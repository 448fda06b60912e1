//! Command execution

use serde::{Deserialize, Serialize};

use fakeos_vfs::FileStore;

use crate::clock::format_date;
use crate::parse::parse_line;
use crate::transcript::Transcript;

/// The `help` command's usage line.
pub const HELP_LINE: &str =
    "Commands: help, ls, open <name>, rm <name>, restore <name>, emptybin, clear, echo <text>, date";

/// The state triple the interpreter operates on.
///
/// Callers own this and thread it through [`execute`]; the interpreter
/// itself is stateless.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShellState {
    /// Terminal output history
    pub transcript: Transcript,
    /// Active files and recycle bin
    pub store: FileStore,
}

impl ShellState {
    /// Empty shell state
    pub fn new() -> Self {
        Self::default()
    }

    /// Shell state with the default session contents and greeting
    pub fn with_seed(greeting: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::with_greeting(greeting),
            store: FileStore::with_seed(),
        }
    }
}

/// Execute one command line against the session state.
///
/// Pure: `(line, state, now) -> state'`. Blank lines are a no-op. Unknown
/// commands and bad arguments append an error line and leave the file
/// collections untouched.
pub fn execute(raw_line: &str, mut state: ShellState, now_ms: i64) -> ShellState {
    let Some(parsed) = parse_line(raw_line) else {
        return state;
    };

    match parsed.command.as_str() {
        "help" => state.transcript.push(HELP_LINE),
        "ls" => cmd_ls(&mut state),
        "open" => cmd_open(&mut state, &parsed.argument),
        "rm" => cmd_rm(&mut state, &parsed.argument, now_ms),
        "restore" => cmd_restore(&mut state, &parsed.argument),
        "emptybin" => {
            state.store.empty_recycle();
            state.transcript.push("Recycle bin emptied");
        }
        "clear" => state.transcript.clear(),
        "echo" => state.transcript.push(parsed.argument),
        "date" => state.transcript.push(format_date(now_ms)),
        unknown => state.transcript.push(format!("Unknown command: {unknown}")),
    }

    state
}

fn cmd_ls(state: &mut ShellState) {
    if state.store.is_empty() {
        state.transcript.push("(no files)");
        return;
    }
    let ShellState { transcript, store } = state;
    for file in store.files() {
        transcript.push(format!("- {}", file.name));
    }
}

fn cmd_open(state: &mut ShellState, arg: &str) {
    if arg.is_empty() {
        state.transcript.push("open: missing target");
    } else if state.store.contains(arg) {
        state.transcript.push(format!("Opening {arg} (simulated)"));
    } else {
        state.transcript.push(format!("open: {arg}: no such file"));
    }
}

fn cmd_rm(state: &mut ShellState, arg: &str, now_ms: i64) {
    if arg.is_empty() {
        state.transcript.push("rm: missing file");
        return;
    }
    match state.store.remove(arg, now_ms) {
        Ok(_) => state.transcript.push(format!("{arg} moved to recycle")),
        Err(_) => state.transcript.push(format!("rm: {arg}: no such file")),
    }
}

fn cmd_restore(state: &mut ShellState, arg: &str) {
    if arg.is_empty() {
        state.transcript.push("restore: missing file");
        return;
    }
    match state.store.restore(arg) {
        Ok(_) => state.transcript.push(format!("Restored {arg}")),
        Err(_) => state.transcript.push(format!("restore: {arg}: not in recycle")),
    }
}
