#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

use std::{ffi::OsString, fmt, io::BufRead, process, str::FromStr};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub mod plot;

/// Exit status for command line usage errors
pub const USAGE_EXIT_CODE: i32 = 1;

/// LogLevel
///
/// Represents minimum level of messages that will be logged
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel {
    pub level: usize,
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel { level: 0 }),
            "warn" => Ok(LogLevel { level: 1 }),
            "info" => Ok(LogLevel { level: 2 }),
            "debug" => Ok(LogLevel { level: 3 }),
            "trace" => Ok(LogLevel { level: 4 }),
            "none" => Ok(LogLevel { level: 5 }),
            _ => Err("no match"),
        }
    }
}

impl LogLevel {
    pub fn is_none(&self) -> bool {
        self.level > 4
    }
    pub fn get_level(&self) -> usize {
        if self.level > 4 {
            0
        } else {
            self.level
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level_str = ["error", "warn", "info", "debug", "trace", "none"];
        if self.level < 6 {
            write!(f, "{}", level_str[self.level])
        } else {
            write!(f, "unknown")
        }
    }
}

/// Add the logging options shared by all of the tools to a command model
pub fn add_log_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("timestamp")
            .short('X')
            .long("timestamp")
            .value_parser(value_parser!(stderrlog::Timestamp))
            .value_name("GRANULARITY")
            .default_value("none")
            .help("Prepend log entries with a timestamp"),
    )
    .arg(
        Arg::new("loglevel")
            .short('l')
            .long("loglevel")
            .value_name("LOGLEVEL")
            .value_parser(value_parser!(LogLevel))
            .ignore_case(true)
            .default_value("warn")
            .help("Set log level"),
    )
    .arg(
        Arg::new("quiet")
            .action(ArgAction::SetTrue)
            .long("quiet")
            .conflicts_with("loglevel")
            .help("Silence all output"),
    )
}

/// Get matches for the process arguments.
///
/// Help and version requests exit with status 0 as usual, but usage errors
/// (missing or unknown arguments) exit with [`USAGE_EXIT_CODE`] after printing
/// the usage message to stderr.
pub fn parse_cli(cmd: Command) -> ArgMatches {
    parse_cli_from(cmd, std::env::args_os())
}

pub fn parse_cli_from<I, T>(cmd: Command, args: I) -> ArgMatches
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cmd.try_get_matches_from(args).unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            process::exit(USAGE_EXIT_CODE)
        } else {
            e.exit()
        }
    })
}

/// Initialize logging from command line arguments
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let verbose = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or(LogLevel { level: 1 });
    let quiet = verbose.is_none() || m.get_flag("quiet");
    let ts = m
        .get_one::<stderrlog::Timestamp>("timestamp")
        .copied()
        .unwrap_or(stderrlog::Timestamp::Off);

    stderrlog::new()
        .quiet(quiet)
        .verbosity(verbose.get_level())
        .timestamp(ts)
        .init()
        .map_err(|e| anyhow!("Could not initialize logging: {}", e))
}

/// Read in next line and split on tabs after trimming white space
pub fn get_next_line<'a, R: BufRead + ?Sized>(
    rdr: &mut R,
    buf: &'a mut String,
) -> anyhow::Result<Option<Vec<&'a str>>> {
    buf.clear();
    if rdr.read_line(buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf.trim().split('\t').collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_names() {
        assert_eq!(LogLevel::from_str("WARN"), Ok(LogLevel { level: 1 }));
        assert_eq!(LogLevel::from_str("trace").unwrap().get_level(), 4);
        let none = LogLevel::from_str("none").unwrap();
        assert!(none.is_none());
        assert_eq!(none.get_level(), 0);
        assert_eq!(none.to_string(), "none");
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn log_args_defaults() {
        let m = parse_cli_from(add_log_args(Command::new("test")), ["test"]);
        assert_eq!(
            m.get_one::<LogLevel>("loglevel").copied(),
            Some(LogLevel { level: 1 })
        );
        assert!(!m.get_flag("quiet"));
    }

    #[test]
    fn log_args_explicit_level() {
        let m = parse_cli_from(
            add_log_args(Command::new("test")),
            ["test", "--loglevel", "Debug"],
        );
        assert_eq!(
            m.get_one::<LogLevel>("loglevel").copied(),
            Some(LogLevel { level: 3 })
        );
    }

    #[test]
    fn next_line_splits_on_tabs() {
        let mut rdr = "a\tb\tc \n\nlast".as_bytes();
        let mut buf = String::new();
        assert_eq!(
            get_next_line(&mut rdr, &mut buf).unwrap(),
            Some(vec!["a", "b", "c"])
        );
        assert_eq!(get_next_line(&mut rdr, &mut buf).unwrap(), Some(vec![""]));
        assert_eq!(
            get_next_line(&mut rdr, &mut buf).unwrap(),
            Some(vec!["last"])
        );
        assert_eq!(get_next_line(&mut rdr, &mut buf).unwrap(), None);
    }
}
