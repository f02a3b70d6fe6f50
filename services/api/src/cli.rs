use crate::commands::{run_analyze, run_report, AnalyzeArgs, ReportArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use db_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Database Decision Advisor",
    about = "Compare MySQL, PostgreSQL, and MongoDB against your application requirements",
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
    /// Score the candidates and print the recommendation
    Analyze(AnalyzeArgs),
    /// Produce the plain-text analysis report, optionally with a CSV score breakdown
    Report(ReportArgs),
    /// Walk through the reference scenarios
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_requirements() {
        let cli = Cli::try_parse_from([
            "db-advisor-api",
            "analyze",
            "--app-type",
            "real-time",
            "--data-structure",
            "unstructured",
            "--scalability",
            "high",
            "--transactions",
            "low",
            "--schema-flexibility",
            "yes",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert!(args.json);
                assert_eq!(args.requirements.app_type.as_deref(), Some("real-time"));
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn report_output_and_save_conflict() {
        let err = Cli::try_parse_from([
            "db-advisor-api",
            "report",
            "--output",
            "report.txt",
            "--save",
        ])
        .expect_err("flags conflict");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["db-advisor-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
