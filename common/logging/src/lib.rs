use serde::{Deserialize, Serialize};
use slog::{o, Drain, Level, Logger};
use slog_term::Decorator;
use sloggers::Build;
use std::io::{Result, Write};
use std::sync::Mutex;

pub const MAX_MESSAGE_WIDTH: usize = 40;

/// How the chain's log output is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` or `crit`.
    pub debug_level: String,
    /// Emit JSON records instead of aligned terminal output.
    pub json: bool,
    pub max_message_width: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            debug_level: "info".to_string(),
            json: false,
            max_message_width: MAX_MESSAGE_WIDTH,
        }
    }
}

fn parse_level(debug_level: &str) -> std::result::Result<Level, String> {
    match debug_level {
        "info" => Ok(Level::Info),
        "debug" => Ok(Level::Debug),
        "trace" => Ok(Level::Trace),
        "warn" => Ok(Level::Warning),
        "error" => Ok(Level::Error),
        "crit" => Ok(Level::Critical),
        unknown => Err(format!("Unknown debug-level: {}", unknown)),
    }
}

/// Build a logger writing to stderr.
pub fn build_logger(config: &LoggerConfig) -> std::result::Result<Logger, String> {
    let level = parse_level(&config.debug_level)?;

    if config.json {
        let severity = config
            .debug_level
            .parse::<sloggers::types::Severity>()
            .map_err(|e| format!("Unknown debug-level: {:?}", e))?;
        return sloggers::terminal::TerminalLoggerBuilder::new()
            .level(severity)
            .format(sloggers::types::Format::Json)
            .destination(sloggers::terminal::Destination::Stderr)
            .build()
            .map_err(|e| format!("Unable to build json logger: {:?}", e));
    }

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let decorator = AlignedTermDecorator::new(decorator, config.max_message_width);
    let drain = slog_term::FullFormat::new(decorator).build();
    let drain = Mutex::new(drain).fuse().filter_level(level).fuse();
    Ok(Logger::root(drain, o!()))
}

/// Pads log messages to `message_width` so that the key-value pairs of consecutive records line
/// up.
pub struct AlignedTermDecorator<D: Decorator> {
    wrapped: D,
    message_width: usize,
}

impl<D: Decorator> AlignedTermDecorator<D> {
    pub fn new(decorator: D, message_width: usize) -> Self {
        AlignedTermDecorator {
            wrapped: decorator,
            message_width,
        }
    }
}

impl<D: Decorator> Decorator for AlignedTermDecorator<D> {
    fn with_record<F>(
        &self,
        record: &slog::Record,
        logger_values: &slog::OwnedKVList,
        f: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut dyn slog_term::RecordDecorator) -> std::io::Result<()>,
    {
        self.wrapped.with_record(record, logger_values, |deco| {
            f(&mut AlignedRecordDecorator::new(deco, self.message_width))
        })
    }
}

struct AlignedRecordDecorator<'a> {
    wrapped: &'a mut dyn slog_term::RecordDecorator,
    message_count: usize,
    message_active: bool,
    ignore_comma: bool,
    message_width: usize,
}

impl<'a> AlignedRecordDecorator<'a> {
    fn new(
        decorator: &'a mut dyn slog_term::RecordDecorator,
        message_width: usize,
    ) -> AlignedRecordDecorator<'a> {
        AlignedRecordDecorator {
            wrapped: decorator,
            message_count: 0,
            ignore_comma: false,
            message_active: false,
            message_width,
        }
    }
}

impl<'a> Write for AlignedRecordDecorator<'a> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if self.ignore_comma {
            self.ignore_comma = false;
            Ok(buf.len())
        } else if self.message_active {
            self.wrapped.write(buf).map(|n| {
                self.message_count += n;
                n
            })
        } else {
            self.wrapped.write(buf)
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.wrapped.flush()
    }
}

impl<'a> slog_term::RecordDecorator for AlignedRecordDecorator<'a> {
    fn reset(&mut self) -> Result<()> {
        self.message_active = false;
        self.message_count = 0;
        self.ignore_comma = false;
        self.wrapped.reset()
    }

    fn start_whitespace(&mut self) -> Result<()> {
        self.wrapped.start_whitespace()
    }

    fn start_msg(&mut self) -> Result<()> {
        self.message_active = true;
        self.ignore_comma = false;
        self.wrapped.start_msg()
    }

    fn start_timestamp(&mut self) -> Result<()> {
        self.wrapped.start_timestamp()
    }

    fn start_level(&mut self) -> Result<()> {
        self.wrapped.start_level()
    }

    fn start_comma(&mut self) -> Result<()> {
        if self.message_active && self.message_count + 1 < self.message_width {
            self.ignore_comma = true;
        }
        self.wrapped.start_comma()
    }

    fn start_key(&mut self) -> Result<()> {
        if self.message_active && self.message_count + 1 < self.message_width {
            write!(
                self,
                "{}",
                " ".repeat(self.message_width - self.message_count)
            )?;
            self.message_active = false;
            self.message_count = 0;
            self.ignore_comma = false;
        }
        self.wrapped.start_key()
    }

    fn start_value(&mut self) -> Result<()> {
        self.wrapped.start_value()
    }

    fn start_separator(&mut self) -> Result<()> {
        self.wrapped.start_separator()
    }
}

/// Return a logger suitable for test usage.
///
/// By default no logs will be printed, but they can be enabled via the `test_logger` feature:
///
/// ```bash
/// $ cargo test -p beacon_chain --features 'logging/test_logger'
/// ```
pub fn test_logger() -> Logger {
    if cfg!(feature = "test_logger") {
        sloggers::terminal::TerminalLoggerBuilder::new()
            .level(sloggers::types::Severity::Debug)
            .build()
            .expect("Should build test_logger")
    } else {
        sloggers::null::NullLoggerBuilder
            .build()
            .expect("Should build null_logger")
    }
}
