//! Command-line interface implementation for autoreadme.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{BUNDLED_TEMPLATES_DIR, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for autoreadme.
#[derive(Parser, Debug)]
#[command(author, version, about = "autoreadme: generate a README from your project's metadata", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a README for the project
    Generate(GenerateArgs),
    /// Print the detected project metadata as JSON
    Scan(ScanArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Template name: node, python, default or any <name>.hbs in the templates directory.
    /// "default" picks the template matching the detected project type.
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Output file, relative to the current directory unless absolute
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Project directory to scan
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Directory containing the <name>.hbs templates.
    /// Templates use MiniJinja syntax ({{ name }}, {% if %}, {% for %}), not Handlebars block helpers
    #[arg(long, value_name = "DIR", default_value = BUNDLED_TEMPLATES_DIR)]
    pub templates_dir: PathBuf,

    /// Print the rendered README instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScanArgs {
    /// Project directory to scan
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Generate(args) => args.verbose,
            Commands::Scan(args) => args.verbose,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
