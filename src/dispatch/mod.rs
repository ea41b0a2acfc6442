//! Command Dispatcher
//!
//! Resolves a command name plus arguments into a call on the store.
//!
//! # Commands
//! - `GET key`
//! - `SET key value [ttl_ms | EX seconds | PX milliseconds]`
//! - `DEL key`
//! - `LPUSH key value` / `RPUSH key value`
//! - `LPOP key` / `RPOP key`
//! - `LLEN key`

mod command;
mod reply;

pub use command::Command;
pub use reply::Reply;

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::store::Db;

// == Dispatcher ==
/// Routes commands to a `Db`.
///
/// Holds no state of its own besides the handle, so clones are cheap and
/// may be handed to each connection.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    db: Db,
}

impl Dispatcher {
    /// Creates a dispatcher over the given store.
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// The underlying store handle.
    pub fn db(&self) -> &Db {
        &self.db
    }

    // == Execute ==
    /// Runs one command.
    ///
    /// `args` are the positional arguments after the key.
    ///
    /// # Errors
    /// - `UnknownCommand` if `name` is not a supported command
    /// - `ArityError` if the argument count or an argument's type is wrong
    /// - `TypeMismatch` if the key holds the other kind of value
    pub async fn execute(&self, name: &str, key: &str, args: &[String]) -> Result<Reply> {
        let command: Command = name.parse()?;
        command.check_arity(args.len())?;

        debug!(command = command.name(), key, "Dispatching command");

        let reply = match command {
            Command::Get => Reply::from(self.db.get(key).await?),
            Command::Set => {
                let ttl = parse_ttl(command, &args[1..])?;
                self.db.set(key.to_string(), args[0].clone(), ttl).await?;
                Reply::Bool(true)
            }
            Command::Del => Reply::Bool(self.db.delete(key).await?),
            Command::LPush => {
                Reply::from(self.db.push_left(key.to_string(), args[0].clone()).await?)
            }
            Command::RPush => {
                Reply::from(self.db.push_right(key.to_string(), args[0].clone()).await?)
            }
            Command::LPop => Reply::from(self.db.pop_left(key).await?),
            Command::RPop => Reply::from(self.db.pop_right(key).await?),
            Command::LLen => Reply::from(self.db.length(key).await?),
        };

        Ok(reply)
    }
}

// == Argument Parsing ==
/// Parses the optional expiry arguments that follow a `SET` value.
///
/// Accepts nothing, a bare millisecond count, or `EX seconds` / `PX millis`.
/// Counts at or below zero give an already-expired entry.
fn parse_ttl(command: Command, options: &[String]) -> Result<Option<Duration>> {
    let arity_error = || StoreError::ArityError(command.name().to_string());
    let count = |raw: &str| raw.trim().parse::<i64>().map_err(|_| arity_error());

    let millis = match options {
        [] => return Ok(None),
        [millis] => count(millis.as_str())?,
        [unit, amount] if unit.eq_ignore_ascii_case("EX") => {
            count(amount.as_str())?.saturating_mul(1000)
        }
        [unit, amount] if unit.eq_ignore_ascii_case("PX") => count(amount.as_str())?,
        _ => return Err(arity_error()),
    };

    Ok(Some(Duration::from_millis(u64::try_from(millis).unwrap_or(0))))
}
