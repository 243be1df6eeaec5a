//! # enumtag
//!
//! CLI tool for generating JSON encoding code for tagged Rust constants.
//!
//! ## Usage
//!
//! ```bash
//! # Generate src/paint/color_enum_encoding.rs and its test
//! enumtag --type Color --file src/paint/color.rs --package crate::paint
//!
//! # Same, with the file and package from the environment
//! ENUMTAG_FILE=src/paint/color.rs ENUMTAG_PACKAGE=crate::paint enumtag -t Color
//!
//! # Preview the generated code
//! enumtag --type Color --dry-run
//!
//! # Verify the generated files are up to date
//! enumtag --type Color --check
//!
//! # Initialize configuration
//! enumtag init
//! ```

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use enumtag_cli::{
    config::{CliArgs, ConfigManager, Invocation, CONFIG_FILENAME, FILE_ENV, PACKAGE_ENV},
    error::CliError,
    logging,
    writer::{WriteMode, WriteResult},
};

#[derive(Parser)]
#[command(name = "enumtag")]
#[command(author, version, about = "Generate JSON encoding code for tagged Rust constants", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new enumtag configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Type to generate the JSON encoding for
    #[arg(short = 't', long = "type")]
    type_name: Option<String>,

    /// Source file declaring the tagged values
    #[arg(short, long, env = FILE_ENV)]
    file: Option<PathBuf>,

    /// Module path the generated code imports the type and values from
    #[arg(short, long, env = PACKAGE_ENV)]
    package: Option<String>,

    /// Preview generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Verify generated files are up to date without writing them
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Commands::Init { output, force }) => cmd_init(output, force),
        None => cmd_generate(cli.generate),
    }
}

/// Generate command implementation.
fn cmd_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = ConfigManager::load(args.config.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            type_name: args.type_name,
            file: args.file,
            package: args.package,
            dry_run: args.dry_run.then_some(true),
        },
    );

    let invocation = Invocation::resolve(&config)?;

    let mode = if args.check {
        WriteMode::Check
    } else if config.output.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    println!(
        "{} {} from {}",
        "Generating JSON encoding for".cyan(),
        invocation.type_name.green(),
        invocation.file.display()
    );

    let results = enumtag_cli::run(&invocation, mode)?;
    for result in &results {
        report(result);
    }

    if mode == WriteMode::Check {
        enumtag_cli::ensure_up_to_date(&results)?;
        println!("{} Generated files are up-to-date", "✓".green());
    }

    Ok(())
}

fn report(result: &WriteResult) {
    match result {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
        WriteResult::Checked {
            path,
            up_to_date: true,
        } => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
        }
        WriteResult::Checked {
            path,
            up_to_date: false,
        } => {
            println!("{} {} is out of date", "✗".red(), path.display());
        }
    }
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
