use crate::constants::{verbosity, DEFAULT_TEMPLATE_REPO};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for stencil.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new project from a template collection.
    Init(InitArgs),
    /// List the templates available in a collection.
    List(ListArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Template collection directory or git repository URL.
    #[arg(short = 'r', long = "template-repo", default_value = DEFAULT_TEMPLATE_REPO)]
    pub template_repo: String,

    /// Select a template by name instead of prompting.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Parent directory for the generated project.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Allow writing into an existing project directory.
    #[arg(short, long)]
    pub force: bool,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Disable interactive prompts; missing answers become errors.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Template collection directory or git repository URL.
    #[arg(short = 'r', long = "template-repo", default_value = DEFAULT_TEMPLATE_REPO)]
    pub template_repo: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_init() {
        let cli = Cli::parse_from(["stencil", "init"]);
        let Some(Commands::Init(args)) = cli.command else {
            panic!("expected init subcommand");
        };
        assert_eq!(args.template_repo, DEFAULT_TEMPLATE_REPO);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.force);
        assert!(args.template.is_none());
    }

    #[test]
    fn parses_full_init_flags() {
        let cli = Cli::parse_from([
            "stencil",
            "init",
            "--template-repo",
            "/tmp/collection",
            "--template",
            "CLI Tool",
            "--output-dir",
            "projects",
            "--force",
            "-vvv",
            "--answers",
            "{\"ProjectName\":\"demo\"}",
            "--non-interactive",
        ]);
        let Some(Commands::Init(args)) = cli.command else {
            panic!("expected init subcommand");
        };
        assert_eq!(args.template_repo, "/tmp/collection");
        assert_eq!(args.template.as_deref(), Some("CLI Tool"));
        assert_eq!(args.output_dir, PathBuf::from("projects"));
        assert!(args.force);
        assert_eq!(args.verbose, 3);
        assert_eq!(args.answers.as_deref(), Some("{\"ProjectName\":\"demo\"}"));
        assert!(args.non_interactive);
    }

    #[test]
    fn parses_list() {
        let cli = Cli::parse_from(["stencil", "list", "-r", "/tmp/collection"]);
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(args.template_repo, "/tmp/collection");
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["stencil"]);
        assert!(cli.command.is_none());
    }
}
