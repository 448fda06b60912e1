//! Command line parsing

/// A parsed command line: the command name plus one argument string.
///
/// There is no quoting syntax; everything after the command name is a
/// single argument with interior whitespace runs collapsed to one space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// Command name, lower-cased for dispatch
    pub command: String,
    /// Remaining tokens rejoined with single spaces (may be empty)
    pub argument: String,
}

/// Split a raw input line into command and argument.
///
/// Returns `None` for blank lines. The command token is lower-cased so
/// `LS` and `ls` dispatch identically; arguments keep their case because
/// file names are case-sensitive.
pub fn parse_line(raw: &str) -> Option<ParsedLine> {
    let mut tokens = raw.trim().split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let argument = tokens.collect::<Vec<_>>().join(" ");

    Some(ParsedLine { command, argument })
}
