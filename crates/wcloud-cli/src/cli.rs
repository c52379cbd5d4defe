#![forbid(unsafe_code)]

//! Command-line argument parsing for `wcloud`.
//!
//! Parses `--flag=value` args by hand. Supports environment variable
//! overrides via the `WCLOUD_*` prefix: env overrides defaults, flags
//! override env.

use std::path::PathBuf;
use std::str::FromStr;

use wcloud::layout::DEFAULT_MAX_WORDS;

use crate::error::{CliError, ParseFootprintError, ParseFormatError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
wcloud: animated word cloud from text

USAGE:
    wcloud [OPTIONS] [TEXT...]

    With TEXT, the words are one regenerate signal. Without, every stdin
    line is one regenerate signal. The final cloud is written once all
    transitions have settled.

OPTIONS:
    --out=PATH           Write output to PATH (default: stdout)
    --format=FMT         Output format: 'svg' (default) or 'json'
    --max-words=N        Number of words shown (default: 5)
    --footprint=KIND     Word size estimate: 'heuristic' (default) or 'measured'
    --transition-ms=N    Position and size transition time (default: 900)
    --frame-ms=N         Simulated time between signals (default: 1000)
    --trace-ops          Log every drawing instruction
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    WCLOUD_MAX_WORDS     Override --max-words
    WCLOUD_FOOTPRINT     Override --footprint
    WCLOUD_FORMAT        Override --format
    WCLOUD_FRAME_MS      Override --frame-ms
    WCLOUD_LOG           Log filter (default: warn)";

/// How word sizes are estimated for placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FootprintKind {
    #[default]
    Heuristic,
    Measured,
}

impl FromStr for FootprintKind {
    type Err = ParseFootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "measured" => Ok(Self::Measured),
            _ => Err(ParseFootprintError(s.to_string())),
        }
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Output file; `None` writes to stdout.
    pub out: Option<PathBuf>,
    pub format: OutputFormat,
    pub max_words: usize,
    pub footprint: FootprintKind,
    pub transition_ms: u64,
    /// Simulated milliseconds advanced before each regenerate signal.
    pub frame_ms: u64,
    pub trace_ops: bool,
    /// Positional words; empty means read stdin.
    pub text: Vec<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            out: None,
            format: OutputFormat::Svg,
            max_words: DEFAULT_MAX_WORDS,
            footprint: FootprintKind::Heuristic,
            transition_ms: 900,
            frame_ms: 1000,
            trace_ops: false,
            text: Vec::new(),
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, CliError> {
        Self::parse_from(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse `args` (without the program name), reading env vars via `env`.
    ///
    /// Invalid env values are ignored; invalid flag values are errors.
    pub fn parse_from<I, S, E>(args: I, env: E) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("WCLOUD_MAX_WORDS")
            && let Ok(n) = val.parse()
        {
            opts.max_words = n;
        }
        if let Some(val) = env("WCLOUD_FOOTPRINT")
            && let Ok(kind) = val.parse()
        {
            opts.footprint = kind;
        }
        if let Some(val) = env("WCLOUD_FORMAT")
            && let Ok(format) = val.parse()
        {
            opts.format = format;
        }
        if let Some(val) = env("WCLOUD_FRAME_MS")
            && let Ok(n) = val.parse()
        {
            opts.frame_ms = n;
        }

        // Parse command-line args (override env vars)
        let mut positional_only = false;
        for arg in args {
            let arg: String = arg.into();
            if positional_only || !arg.starts_with('-') || arg == "-" {
                opts.text.push(arg);
                continue;
            }
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--trace-ops" => opts.trace_ops = true,
                "--" => positional_only = true,
                other => {
                    if let Some(val) = other.strip_prefix("--out=") {
                        if val.is_empty() {
                            return Err(invalid("--out", val));
                        }
                        opts.out = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = val.parse().map_err(|_| invalid("--format", val))?;
                    } else if let Some(val) = other.strip_prefix("--max-words=") {
                        opts.max_words = val.parse().map_err(|_| invalid("--max-words", val))?;
                    } else if let Some(val) = other.strip_prefix("--footprint=") {
                        opts.footprint = val.parse().map_err(|_| invalid("--footprint", val))?;
                    } else if let Some(val) = other.strip_prefix("--transition-ms=") {
                        opts.transition_ms =
                            val.parse().map_err(|_| invalid("--transition-ms", val))?;
                    } else if let Some(val) = other.strip_prefix("--frame-ms=") {
                        opts.frame_ms = val.parse().map_err(|_| invalid("--frame-ms", val))?;
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

fn invalid(flag: &'static str, value: &str) -> CliError {
    CliError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(args: &[&str]) -> Opts {
        match Opts::parse_from(args.iter().copied(), no_env) {
            Ok(Command::Run(opts)) => opts,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.out, None);
        assert_eq!(opts.format, OutputFormat::Svg);
        assert_eq!(opts.max_words, 5);
        assert_eq!(opts.footprint, FootprintKind::Heuristic);
        assert_eq!(opts.transition_ms, 900);
        assert_eq!(opts.frame_ms, 1000);
        assert!(!opts.trace_ops);
    }

    #[test]
    fn flags_and_text() {
        let opts = run(&[
            "--out=cloud.json",
            "--format=json",
            "--max-words=7",
            "--footprint=measured",
            "--transition-ms=300",
            "--frame-ms=50",
            "--trace-ops",
            "hello",
            "world",
        ]);
        assert_eq!(opts.out, Some(PathBuf::from("cloud.json")));
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.max_words, 7);
        assert_eq!(opts.footprint, FootprintKind::Measured);
        assert_eq!(opts.transition_ms, 300);
        assert_eq!(opts.frame_ms, 50);
        assert!(opts.trace_ops);
        assert_eq!(opts.text, vec!["hello", "world"]);
    }

    #[test]
    fn double_dash_ends_flags() {
        let opts = run(&["--", "--not-a-flag"]);
        assert_eq!(opts.text, vec!["--not-a-flag"]);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(
            Opts::parse_from(["--max-words=3", "-h"], no_env).ok(),
            Some(Command::Help)
        );
        assert_eq!(Opts::parse_from(["--version"], no_env).ok(), Some(Command::Version));
    }

    #[test]
    fn unknown_argument() {
        let err = Opts::parse_from(["--bogus"], no_env).unwrap_err();
        assert!(matches!(err, CliError::UnknownArgument(ref a) if a == "--bogus"));
    }

    #[test]
    fn invalid_values() {
        for arg in ["--max-words=many", "--format=png", "--footprint=exact", "--frame-ms=-1"] {
            let err = Opts::parse_from([arg], no_env).unwrap_err();
            assert!(matches!(err, CliError::InvalidValue { .. }), "{arg}");
        }
    }

    #[test]
    fn env_overrides_defaults_and_flags_override_env() {
        let env = |key: &str| match key {
            "WCLOUD_MAX_WORDS" => Some("9".to_string()),
            "WCLOUD_FORMAT" => Some("json".to_string()),
            "WCLOUD_FOOTPRINT" => Some("Measured".to_string()),
            "WCLOUD_FRAME_MS" => Some("not a number".to_string()),
            _ => None,
        };
        let Ok(Command::Run(opts)) = Opts::parse_from(["--max-words=2"], env) else {
            panic!("expected run");
        };
        assert_eq!(opts.max_words, 2);
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.footprint, FootprintKind::Measured);
        assert_eq!(opts.frame_ms, 1000);
    }

    #[test]
    fn parse_enums() {
        assert_eq!("SVG".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert_eq!(
            "png".parse::<OutputFormat>(),
            Err(ParseFormatError("png".into()))
        );
        assert_eq!(" heuristic ".parse::<FootprintKind>(), Ok(FootprintKind::Heuristic));
        assert!("exact".parse::<FootprintKind>().is_err());
    }

    #[test]
    fn help_text_lists_flags() {
        for flag in ["--out", "--format", "--max-words", "--footprint", "--frame-ms"] {
            assert!(HELP_TEXT.contains(flag), "{flag}");
        }
        assert!(!VERSION.is_empty());
    }
}
