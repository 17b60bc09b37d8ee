//! Logger setup for the SCORMy shell.
//!
//! `SCORMY_LOG` picks where log lines go: `file` (`./scormy.log`),
//! `terminal`, or `both` (default). Only `scormy*` modules are recorded;
//! eframe/winit are chatty at debug level.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_DESTINATION_ENV: &str = "SCORMY_LOG";
const LOG_FILENAME: &str = "scormy.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    File,
    Terminal,
    #[default]
    Both,
}

impl LogDestination {
    pub fn from_env() -> Self {
        match std::env::var(LOG_DESTINATION_ENV) {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                eprintln!("Warning: unknown {LOG_DESTINATION_ENV}={value:?}, logging to both");
                Self::Both
            }),
            Err(_) => Self::default(),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "terminal" | "term" => Some(Self::Terminal),
            "both" | "" => Some(Self::Both),
            _ => None,
        }
    }

    fn wants_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    fn wants_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

/// Installs the global logger. Transitions log at debug, so debug builds
/// record the whole conversation.
pub fn initialize(destination: LogDestination) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("scormy")
        .build();

    let loggers = build_loggers(destination, level, &config, Path::new(LOG_FILENAME));
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    config: &Config,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(log_path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config.clone(), file)),
            Err(err) => eprintln!("Warning: Could not create log file at {log_path:?}: {err}"),
        }
    }
    loggers
}
