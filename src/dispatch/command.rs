//! Supported command names and their arity rules.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StoreError};

/// One of the fixed set of supported commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Get,
    Set,
    Del,
    LPush,
    RPush,
    LPop,
    RPop,
    LLen,
}

impl Command {
    /// Every supported command.
    pub const ALL: [Command; 8] = [
        Command::Get,
        Command::Set,
        Command::Del,
        Command::LPush,
        Command::RPush,
        Command::LPop,
        Command::RPop,
        Command::LLen,
    ];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Get => "GET",
            Command::Set => "SET",
            Command::Del => "DEL",
            Command::LPush => "LPUSH",
            Command::RPush => "RPUSH",
            Command::LPop => "LPOP",
            Command::RPop => "RPOP",
            Command::LLen => "LLEN",
        }
    }

    /// Inclusive bounds on the number of arguments after the key.
    pub fn arity(&self) -> (usize, usize) {
        match self {
            Command::Get | Command::Del | Command::LPop | Command::RPop | Command::LLen => (0, 0),
            Command::LPush | Command::RPush => (1, 1),
            // value, then nothing / a bare ttl / an EX|PX pair
            Command::Set => (1, 3),
        }
    }

    /// Fails with `ArityError` if `count` is outside the command's bounds.
    pub fn check_arity(&self, count: usize) -> Result<()> {
        let (min, max) = self.arity();
        if (min..=max).contains(&count) {
            Ok(())
        } else {
            Err(StoreError::ArityError(self.name().to_string()))
        }
    }
}

impl FromStr for Command {
    type Err = StoreError;

    /// Case-insensitive lookup.
    fn from_str(name: &str) -> Result<Self> {
        Command::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| StoreError::UnknownCommand(name.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
            assert_eq!(command.name().to_lowercase().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "EXPIRE".parse::<Command>(),
            Err(StoreError::UnknownCommand("EXPIRE".to_string()))
        );
        assert!("".parse::<Command>().is_err());
        assert!(" GET".parse::<Command>().is_err());
    }

    #[test]
    fn test_check_arity() {
        assert!(Command::Get.check_arity(0).is_ok());
        assert!(Command::Get.check_arity(1).is_err());
        assert!(Command::Set.check_arity(0).is_err());
        assert!(Command::Set.check_arity(1).is_ok());
        assert!(Command::Set.check_arity(3).is_ok());
        assert!(Command::Set.check_arity(4).is_err());
        assert!(Command::LPush.check_arity(1).is_ok());
        assert!(Command::LPush.check_arity(2).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::RPop.to_string(), "RPOP");
    }
}
