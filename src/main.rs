use clap::Parser;
use crmtidy::application::{classify_file, reconcile_file, ClassifyOptions, ReconcileOptions};
use crmtidy::cli::{format_report, Cli, Commands, OutputArgs};
use crmtidy::error::{Result, TidyError};
use crmtidy::infrastructure::{load_rule_book, CsvFormat};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Classify {
            path,
            file,
            rules,
            output,
        } => {
            let input = path
                .or(file)
                .ok_or_else(|| TidyError::Config("No input file given".to_string()))?;
            let rules = load_rule_book(rules.as_deref())?;

            println!("--- Running: Classify from Tags on file: {} ---", input.display());

            let options = ClassifyOptions {
                input,
                output: output.output.clone(),
                format: csv_format(&output)?,
                dry_run: output.dry_run,
            };
            let report = classify_file(&options, &rules)?;
            println!("{}", format_report(&report, "Cleaned"));
            Ok(())
        }
        Commands::Reconcile {
            master,
            target,
            output,
        } => {
            println!("--- Running: Reconcile from Master ---");

            let options = ReconcileOptions {
                master,
                target,
                output: output.output.clone(),
                format: csv_format(&output)?,
                dry_run: output.dry_run,
            };
            let report = reconcile_file(&options)?;
            println!("{}", format_report(&report, "Enriched"));
            Ok(())
        }
    }
}

fn csv_format(args: &OutputArgs) -> Result<CsvFormat> {
    Ok(CsvFormat::with_delimiter(CsvFormat::parse_delimiter(
        &args.delimiter,
    )?))
}
