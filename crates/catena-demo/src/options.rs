use std::{error::Error, fmt::Display, str::FromStr};

use catena::Value;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub log: LevelFilter,
    /// Values `1..=count` are appended to the list.
    pub count: Value,
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log: LevelFilter::WARN,
            count: 5,
            color: true,
        }
    }
}

impl Options {
    pub fn from_args<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            options.update_with_arg(arg.as_ref())?;
        }
        Ok(options)
    }

    fn update_with_arg(&mut self, arg: &str) -> Result<(), OptionsError> {
        match arg.split_once('=') {
            Some(("--log", level)) => self.log = parse("--log", level)?,
            Some(("--count", count)) => {
                self.count = parse("--count", count)?;
                if self.count < 0 {
                    return Err(OptionsError::bad_value("--count", count));
                }
            }
            None if arg == "--color" => self.color = true,
            None if arg == "--no-color" => self.color = false,
            _ => return Err(OptionsError::Unknown(arg.to_owned())),
        }
        Ok(())
    }
}

fn parse<T: FromStr>(flag: &'static str, value: &str) -> Result<T, OptionsError> {
    value
        .parse()
        .map_err(|_| OptionsError::bad_value(flag, value))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    Unknown(String),
    BadValue { flag: &'static str, value: String },
}

impl OptionsError {
    fn bad_value(flag: &'static str, value: &str) -> Self {
        OptionsError::BadValue {
            flag,
            value: value.to_owned(),
        }
    }
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::Unknown(arg) => write!(f, "invalid argument: {arg}"),
            OptionsError::BadValue { flag, value } => {
                write!(f, "invalid value for {flag}: {value:?}")
            }
        }
    }
}

impl Error for OptionsError {}
