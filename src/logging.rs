use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::fmt;

const CONSOLE_APPENDER: &str = "console";
const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

#[derive(Debug)]
pub enum LoggingError {
    Config(ConfigErrors),
    AlreadyInitialised(SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid logging config: {}", err),
            Self::AlreadyInitialised(err) => write!(f, "logger already set: {}", err),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::AlreadyInitialised(err) => Some(err),
        }
    }
}

impl From<ConfigErrors> for LoggingError {
    fn from(err: ConfigErrors) -> Self {
        Self::Config(err)
    }
}

impl From<SetLoggerError> for LoggingError {
    fn from(err: SetLoggerError) -> Self {
        Self::AlreadyInitialised(err)
    }
}

fn console_config(level: LevelFilter) -> Result<Config, ConfigErrors> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)))
        .build(Root::builder().appender(CONSOLE_APPENDER).build(level))
}

/// Routes `log` records to stdout at `level` and above. Call once per process.
pub fn init_logging(level: LevelFilter) -> Result<log4rs::Handle, LoggingError> {
    Ok(log4rs::init_config(console_config(level)?)?)
}
