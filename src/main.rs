//! autoreadme's main application entry point.
//! Handles command-line argument parsing and dispatches to the scan and
//! generate commands.

use autoreadme::{
    cli::{get_args, Args, Commands},
    error::{default_error_handler, Result},
    generator::{generate_readme, write_output},
    logger::init_logger,
    scanner::scan,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.command.verbose());

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Scans the project root
/// 2. Selects and renders the template
/// 3. Writes the output file, or prints it on `--dry-run`
fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Generate(args) => {
            let readme = generate_readme(&args.root, &args.template, &args.templates_dir)?;
            if args.dry_run {
                print!("{}", readme);
            } else {
                let written = write_output(&readme, &args.out)?;
                println!("README generated: '{}'", written.display());
            }
        }
        Commands::Scan(args) => {
            let info = scan(&args.root)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }
    Ok(())
}
