//! CLI argument definitions for `advising`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use advising::config::ConfigOverrides;
use advising::core::eligibility::StatusVocabulary;
use advising::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Status code vocabulary of the student records
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum VocabularyArg {
    /// Letter grades: a, b, c, d, p, s mean completed
    Grades,
    /// Only `c` means completed
    Simple,
}

impl From<VocabularyArg> for StatusVocabulary {
    fn from(arg: VocabularyArg) -> Self {
        match arg {
            VocabularyArg::Grades => Self::Grades,
            VocabularyArg::Simple => Self::Simple,
        }
    }
}

impl std::fmt::Display for VocabularyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", StatusVocabulary::from(*self))
    }
}

/// Flags shared by `check` and `sweep`
#[derive(Debug, Clone, Default, Args)]
pub struct EvalArgs {
    /// Treat these course codes as satisfied when checking requirements (what-if)
    #[arg(long, value_name = "CODE", num_args = 1..)]
    pub simulate: Vec<String>,

    /// Ignore the catalog's offered-this-semester flag
    #[arg(long)]
    pub ignore_offered: bool,

    /// Status code vocabulary (falls back to config `status_vocabulary`)
    #[arg(long, value_enum)]
    pub vocabulary: Option<VocabularyArg>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Check whether a student may take one course.
    Check {
        /// Path to the catalog CSV file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Path to the advising session TOML file
        #[arg(value_name = "SESSION")]
        session: PathBuf,

        /// Course code (e.g., "PBHL 305")
        #[arg(value_name = "COURSE")]
        course: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        eval: EvalArgs,
    },
    /// Evaluate every course in the catalog for a student.
    Sweep {
        /// Path to the catalog CSV file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Path to the advising session TOML file
        #[arg(value_name = "SESSION")]
        session: PathBuf,

        /// Only list courses the student is eligible for
        #[arg(long)]
        available: bool,

        /// Output format: text, markdown (md) or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Write the report to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the report into the configured reports directory
        #[arg(long, conflicts_with = "output")]
        save: bool,

        #[command(flatten)]
        eval: EvalArgs,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "advising",
    about = "Course eligibility checks for academic advising",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level for this run
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Evaluation flags of `check` and `sweep` override the `[eligibility]`
    /// section for this run only.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let eval = match &self.command {
            Command::Check { eval, .. } | Command::Sweep { eval, .. } => Some(eval),
            Command::Config { .. } => None,
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            status_vocabulary: eval.and_then(|e| e.vocabulary).map(|v| v.to_string()),
            ignore_offered: eval.filter(|e| e.ignore_offered).map(|_| true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_vocabulary_arg() {
        assert_eq!(StatusVocabulary::from(VocabularyArg::Simple), StatusVocabulary::Simple);
        assert_eq!(VocabularyArg::Grades.to_string(), "grades");
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.status_vocabulary.is_none());
        assert!(overrides.ignore_offered.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut args = cli(Command::Sweep {
            catalog: PathBuf::from("catalog.csv"),
            session: PathBuf::from("session.toml"),
            available: false,
            format: "text".to_string(),
            output: None,
            save: false,
            eval: EvalArgs {
                simulate: Vec::new(),
                ignore_offered: true,
                vocabulary: Some(VocabularyArg::Simple),
            },
        });
        args.config_level = Some(LogLevelArg::Debug);
        args.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        args.config_verbose = Some(true);
        args.reports_dir = Some(PathBuf::from("/output"));

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
        assert_eq!(overrides.status_vocabulary, Some("simple".to_string()));
        assert_eq!(overrides.ignore_offered, Some(true));
    }

    #[test]
    fn test_unset_eval_flags_do_not_override() {
        let args = cli(Command::Check {
            catalog: PathBuf::from("catalog.csv"),
            session: PathBuf::from("session.toml"),
            course: "PBHL 305".to_string(),
            json: false,
            eval: EvalArgs::default(),
        });

        let overrides = args.to_config_overrides();
        assert!(overrides.status_vocabulary.is_none());
        assert!(overrides.ignore_offered.is_none());
    }

    #[test]
    fn test_parse_sweep_command_line() {
        let args = Cli::try_parse_from([
            "advising",
            "--debug",
            "sweep",
            "catalog.csv",
            "session.toml",
            "--format",
            "md",
            "--simulate",
            "STAT 210",
            "PBHL 201",
            "--vocabulary",
            "simple",
        ])
        .expect("arguments parse");

        assert!(args.debug_flag);
        match args.command {
            Command::Sweep { format, eval, .. } => {
                assert_eq!(format, "md");
                assert_eq!(eval.simulate, vec!["STAT 210".to_string(), "PBHL 201".to_string()]);
                assert_eq!(eval.vocabulary, Some(VocabularyArg::Simple));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_save_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "advising", "sweep", "c.csv", "s.toml", "--save", "-o", "out.txt",
        ]);
        assert!(result.is_err());
    }
}
