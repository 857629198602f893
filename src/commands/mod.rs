//! Command layer between raw input lines and the address book.
//!
//! A line is split into a keyword and positional arguments, the keyword is
//! looked up in a [`Dispatcher`] table, and the matching handler runs against
//! a [`CommandContext`]. Handler failures never escape this layer: they are
//! turned into user-facing text by [`translate`].

pub mod dispatcher;
pub mod handlers;
pub mod parser;
pub mod translate;

pub use dispatcher::{Dispatcher, Handler, Outcome};
pub use parser::{parse_input, ParsedCommand};
pub use translate::translate;

use crate::clock::Clock;
use crate::models::AddressBook;

/// Everything a handler may read or change while it runs.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub clock: &'a dyn Clock,

    /// Window used by `birthdays` when no argument is given.
    pub default_window_days: u32,
}
