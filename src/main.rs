use call_center::cli::commands;
use call_center::cli::{Cli, Commands};
use call_center::config;
use call_center::logging::init_logging;
use call_center::CallCenterError;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {e}");
        // Continue without logging rather than refusing to run
    }

    let overrides = build_cli_overrides(&cli);
    let json = cli.json;

    let result = match cli.command {
        Commands::Init => commands::init::execute(json, &overrides),
        Commands::Add(args) => commands::add::execute(&args, json, &overrides),
        Commands::List(args) => commands::list::execute(&args, json, &overrides),
        Commands::Show { id } => commands::show::execute(id, json, &overrides),
        Commands::Edit(args) => commands::edit::execute(&args, json, &overrides),
        Commands::Close { ids } => commands::close::execute(&ids, json, &overrides),
        Commands::Customers => commands::customers::execute(json, &overrides),
        Commands::Dates { customer } => {
            commands::customers::execute_dates(&customer, json, &overrides)
        }
        Commands::Report(args) => commands::report::execute(&args, json, &overrides),
    };

    if let Err(e) = result {
        handle_error(&e);
    }
}

/// Print a human-readable error with an optional hint, then exit nonzero.
fn handle_error(err: &CallCenterError) -> ! {
    eprintln!("Error: {err}");
    if let Some(hint) = err.suggestion() {
        eprintln!("Hint: {hint}");
    }
    std::process::exit(err.exit_code());
}

fn build_cli_overrides(cli: &Cli) -> config::CliOverrides {
    config::CliOverrides {
        db: cli.db.clone(),
        json: Some(cli.json),
        lock_timeout: cli.lock_timeout,
    }
}
