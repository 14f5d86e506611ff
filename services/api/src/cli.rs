use crate::report::{run_score, run_tables, ScoreArgs, TablesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crs_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CRS Calculator",
    about = "Score Comprehensive Ranking System profiles over HTTP or from the command line",
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
    /// Score an applicant profile stored as JSON
    Score(ScoreArgs),
    /// Print the accepted band tokens and CLB levels for each language test
    Tables(TablesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Tables(args) => run_tables(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crs_engine::scoring::LanguageTest;

    #[test]
    fn defaults_to_serve_when_no_command_given() {
        let cli = Cli::try_parse_from(["crs-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "crs-api",
            "score",
            "--input",
            "profile.json",
            "--assessed-on",
            "2025-03-15",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.input.to_str(), Some("profile.json"));
                assert_eq!(
                    args.assessed_on.map(|date| date.to_string()),
                    Some("2025-03-15".to_string())
                );
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tables_accepts_test_names() {
        let cli = Cli::try_parse_from(["crs-api", "tables", "--test", "PTE-Core"]).expect("parses");

        match cli.command {
            Some(Command::Tables(args)) => assert_eq!(args.test, Some(LanguageTest::PteCore)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tables_rejects_unknown_tests() {
        assert!(Cli::try_parse_from(["crs-api", "tables", "--test", "toefl"]).is_err());
        assert!(Cli::try_parse_from(["crs-api", "tables", "--test", "na"]).is_err());
    }
}
