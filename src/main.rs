use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use colored::Colorize;
use oracle::utils::logger;
use oracle::{CliConfig, Command, LocalStorage, NoProgress, OracleEngine, OracleError, Outcome, SpinnerProgress};

#[tokio::main]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => reject_arguments(e),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let command = Command::from(config.command.clone());
    let outcome = if config.no_progress {
        OracleEngine::new(&config, LocalStorage::new(), NoProgress).run(command).await
    } else {
        OracleEngine::new(&config, LocalStorage::new(), SpinnerProgress::new()).run(command).await
    };

    match outcome {
        Ok(outcome) => report_outcome(&outcome),
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            report_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn report_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Written(paths) => {
            for (index, path) in paths.iter().enumerate() {
                let label = if index == 0 { "Results saved to" } else { "Summary report saved to" };
                println!("{}", format!("{} {}", label, path.display().to_string().bold()).green());
            }
        }
        Outcome::Purged(_) => println!("{}", "Results folder has been deleted.".green()),
        Outcome::NothingToPurge(_) => {
            println!("{}", "Results folder does not exist. Nothing to delete.".yellow())
        }
    }
}

fn report_error(e: &OracleError) {
    eprintln!("{} {}", "An error occurred:".red(), e.user_friendly_message());
    if let Some(hint) = e.hint() {
        eprintln!("{}", hint.yellow());
    }
}

/// Unknown subcommands become `InvalidOperation`; help and version output pass through.
fn reject_arguments(e: clap::Error) -> ! {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        ErrorKind::InvalidSubcommand => {
            let command = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(command)) => command.clone(),
                _ => String::new(),
            };
            report_error(&OracleError::InvalidOperation { command });
            std::process::exit(1);
        }
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
