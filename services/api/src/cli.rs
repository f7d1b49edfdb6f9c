use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_advise, run_rank, AdviseArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use travel_planner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Travel Planner",
    about = "Rank trip destinations against your preferences and travel history",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked destinations for the saved preferences plus any overrides
    Rank(RankArgs),
    /// Check whether each trip is long enough for its flight
    Advise(AdviseArgs),
    /// Walk through a sample planning session against the bundled catalog
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the destination catalog path
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Persist planner state to this JSON file instead of memory
    #[arg(long)]
    pub(crate) state: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rank(args) => run_rank(args),
        Command::Advise(args) => run_advise(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use travel_planner::planner::Month;

    #[test]
    fn rank_flags_parse() {
        let cli = Cli::try_parse_from([
            "travel-planner",
            "rank",
            "--month",
            "apr",
            "--airport",
            "lhr",
            "--limit",
            "3",
            "--format",
            "csv",
        ])
        .expect("valid arguments");

        match cli.command {
            Some(Command::Rank(args)) => {
                assert_eq!(args.month, Some(Month::Apr));
                assert_eq!(args.airport.map(|code| code.0), Some("LHR".to_string()));
                assert_eq!(args.limit, Some(3));
                assert_eq!(args.format, OutputFormat::Csv);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn advise_needs_both_duration_and_flight_hours() {
        let cli = Cli::try_parse_from([
            "travel-planner",
            "advise",
            "--duration",
            "5",
            "--flight-hours",
            "10",
        ])
        .expect("valid arguments");
        match cli.command {
            Some(Command::Advise(args)) => {
                assert_eq!(args.duration, Some(5));
                assert_eq!(args.flight_hours, Some(10.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["travel-planner", "advise", "--duration", "5"]).is_err());
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(Cli::try_parse_from(["travel-planner", "rank", "--month", "smarch"]).is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["travel-planner"]).expect("no arguments");
        assert!(cli.command.is_none());
    }
}
