use std::process;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use check_pve::application::probe::Check;
use check_pve::domain::aggregate::select_worst;
use check_pve::domain::value_objects::check_state::CheckState;
use check_pve::infrastructure::api::client::PveClient;
use check_pve::presentation::cli::app::Cli;
use check_pve::presentation::report;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    // diagnostics go to stderr; stdout is reserved for the plugin line(s)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let check = match cli.to_check() {
        Ok(check) => check,
        Err(err) => {
            let message = format!("{err} for '{}' subcommand!", cli.subcommand_name());
            Cli::command()
                .error(clap::error::ErrorKind::ValueValidation, message)
                .exit();
        }
    };

    let state = run(&cli, &check).await;
    process::exit(state.exit_code());
}

/// One request/evaluate/print cycle. Every transport or auth fault becomes
/// a single UNKNOWN line instead of propagating.
async fn run(cli: &Cli, check: &Check) -> CheckState {
    let mut client = match PveClient::new(cli.hostname.clone(), cli.api_port, cli.insecure) {
        Ok(client) => client,
        Err(err) => {
            report::print_unknown(&err.to_string());
            return CheckState::Unknown;
        }
    };
    if let Err(err) = client.authenticate(&cli.credentials()).await {
        report::print_unknown(&err.to_string());
        return CheckState::Unknown;
    }
    let findings = match check.run(&client, &cli.nodename).await {
        Ok(findings) => findings,
        Err(err) => {
            report::print_unknown(&err.to_string());
            return CheckState::Unknown;
        }
    };
    let (state, winners) = select_worst(findings);
    report::print_report(&winners);
    state
}
