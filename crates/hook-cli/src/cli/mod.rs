use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::{Commands, HookArgs};

/// Top-level CLI parser for the `hookctl` binary.
#[derive(Debug, Parser)]
#[command(name = "hookctl", version, about = "Install, inspect and test-run git hooks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only, hook output is suppressed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use hook_core::HookName;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_table_output() {
        let cli = Cli::try_parse_from(["hookctl", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["hookctl", "--format", "json", "--verbose", "install"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Install));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hookctl", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn hook_argument_parses_known_names() {
        let cli = Cli::try_parse_from(["hookctl", "test", "pre-push"]).expect("cli should parse");
        match cli.command {
            Commands::Test(args) => assert_eq!(args.hook, Some(HookName::PrePush)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hook_argument_is_optional() {
        let cli = Cli::try_parse_from(["hookctl", "print"]).expect("cli should parse");
        match cli.command {
            Commands::Print(args) => assert!(args.hook.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hook_argument_rejects_unknown_names() {
        let err = Cli::try_parse_from(["hookctl", "print", "post-commit"]).unwrap_err();
        assert!(err.to_string().contains("is not a git hook"));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["hookctl", "--project", "/tmp/demo", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
