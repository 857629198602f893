//! Handlers for the commands that read or change the address book.
//!
//! Every handler takes the positional arguments after the keyword. Extra
//! trailing arguments are ignored; missing ones fail with
//! [`CommandError::MalformedArguments`].

use super::CommandContext;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

fn arg<'a>(args: &[&'a str], index: usize) -> CommandResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(CommandError::MalformedArguments)
}

fn not_found(name: &str) -> CommandError {
    CommandError::ContactNotFound(name.to_string())
}

/// `add <name> <phone>`
///
/// Appends the phone to an existing contact, or creates the contact. An
/// invalid phone leaves the book untouched either way.
pub fn add_contact(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    if let Some(record) = ctx.book.find_mut(name) {
        record.add_phone(phone)?;
        debug!("Added phone to existing contact {}", name);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    ctx.book.add_record(record);
    debug!("Created contact {}", name);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    let record = ctx.book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let record = ctx.book.find(name).ok_or_else(|| not_found(name))?;

    if record.phones().is_empty() {
        return Ok(format!("No phone numbers saved for {}.", name));
    }
    Ok(record.phones_display())
}

/// `all`
pub fn show_all(_args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    if ctx.book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }
    Ok(ctx.book.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    let record = ctx.book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let record = ctx.book.find(name).ok_or_else(|| not_found(name))?;

    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => format!("No birthday set for {}.", name),
    })
}

/// `birthdays [days]`
///
/// `days` must be a non-negative integer; without it the configured default
/// window is used.
pub fn upcoming_birthdays(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let window_days = match args.first() {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| CommandError::MalformedArguments)?,
        None => ctx.default_window_days,
    };

    let today = ctx.clock.today();
    let upcoming = ctx.book.get_upcoming_birthdays(today, window_days);
    debug!(
        "{} upcoming birthdays within {} days of {}",
        upcoming.len(),
        window_days,
        today
    );

    if upcoming.is_empty() {
        return Ok("There are no upcoming birthdays.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
