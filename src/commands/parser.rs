//! Tokenizing of raw input lines.

/// An input line split into its keyword and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// First token, lowercased.
    pub keyword: String,
    pub args: Vec<&'a str>,
}

/// Split `line` on whitespace.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedCommand<'_>> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some(ParsedCommand {
        keyword,
        args: tokens.collect(),
    })
}
