//! One interactive session of the assistant.
//!
//! A session loads the book from its repository, feeds each input line to
//! the dispatcher, and writes the book back when it ends.

use crate::clock::{Clock, SystemClock};
use crate::commands::{CommandContext, Dispatcher, Outcome};
use crate::config::Config;
use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use std::sync::Arc;
use tracing::info;

pub struct Session {
    repository: Arc<dyn BookRepository>,
    book: AddressBook,
    dispatcher: Dispatcher,
    clock: Box<dyn Clock>,
    default_window_days: u32,
}

impl Session {
    /// Load the book from `repository` and start a session on the system clock.
    pub async fn start(
        repository: Arc<dyn BookRepository>,
        config: &Config,
    ) -> StorageResult<Self> {
        Self::start_with_clock(repository, config, Box::new(SystemClock)).await
    }

    pub async fn start_with_clock(
        repository: Arc<dyn BookRepository>,
        config: &Config,
        clock: Box<dyn Clock>,
    ) -> StorageResult<Self> {
        let book = repository.load().await?;
        info!("Session started with {} contacts", book.len());

        Ok(Self {
            repository,
            book,
            dispatcher: Dispatcher::new(),
            clock,
            default_window_days: config.birthday_window_days,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one input line against the book.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let mut ctx = CommandContext {
            book: &mut self.book,
            clock: self.clock.as_ref(),
            default_window_days: self.default_window_days,
        };
        self.dispatcher.dispatch(line, &mut ctx)
    }

    /// Persist the book without ending the session.
    pub async fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book).await
    }

    /// Persist the book and end the session.
    pub async fn finish(self) -> StorageResult<AddressBook> {
        self.save().await?;
        info!("Session finished");
        Ok(self.book)
    }
}
