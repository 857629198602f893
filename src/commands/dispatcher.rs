//! Keyword → handler dispatch table.

use super::handlers;
use super::parser::parse_input;
use super::translate::translate;
use super::CommandContext;
use crate::error::CommandResult;
use std::collections::HashMap;
use tracing::debug;

/// A command that runs against the address book.
pub type Handler = fn(&[&str], &mut CommandContext<'_>) -> CommandResult<String>;

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the message and read the next line.
    Reply(String),

    /// Show the message, persist the book, and stop.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(message) | Outcome::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

#[derive(Clone, Copy)]
enum Action {
    Greet,
    Exit,
    Run(Handler),
}

/// Maps case-insensitive keywords to actions.
///
/// Built once per session. Handlers registered here always run through
/// [`translate`], so dispatching never fails.
#[derive(Clone)]
pub struct Dispatcher {
    table: HashMap<String, Action>,
}

impl Dispatcher {
    /// The standard command set.
    pub fn new() -> Self {
        let mut dispatcher = Self {
            table: HashMap::new(),
        };

        dispatcher.table.insert("hello".to_string(), Action::Greet);
        dispatcher.table.insert("close".to_string(), Action::Exit);
        dispatcher.table.insert("exit".to_string(), Action::Exit);

        dispatcher
            .register("add", handlers::add_contact)
            .register("change", handlers::change_contact)
            .register("phone", handlers::show_phone)
            .register("all", handlers::show_all)
            .register("add-birthday", handlers::add_birthday)
            .register("show-birthday", handlers::show_birthday)
            .register("birthdays", handlers::upcoming_birthdays);

        dispatcher
    }

    /// Add or replace the handler for `keyword`.
    pub fn register(&mut self, keyword: &str, handler: Handler) -> &mut Self {
        self.table.insert(keyword.to_lowercase(), Action::Run(handler));
        self
    }

    /// Handle one raw input line.
    pub fn dispatch(&self, line: &str, ctx: &mut CommandContext<'_>) -> Outcome {
        let Some(parsed) = parse_input(line) else {
            return Outcome::Reply("Invalid command.".to_string());
        };

        debug!("Dispatching '{}' with {} args", parsed.keyword, parsed.args.len());

        match self.table.get(&parsed.keyword) {
            Some(Action::Greet) => Outcome::Reply("How can I help you?".to_string()),
            Some(Action::Exit) => Outcome::Exit("Good bye!".to_string()),
            Some(Action::Run(handler)) => {
                Outcome::Reply(translate(handler(parsed.args.as_slice(), ctx)))
            }
            None => Outcome::Reply("Invalid command.".to_string()),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
