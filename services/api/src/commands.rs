use crate::infra::{cli_engine, print_result};
use clap::Args;
use db_advisor::advisor::report::{render_text_report, write_score_csv};
use db_advisor::advisor::router::run_analysis;
use db_advisor::advisor::AnalysisRequest;
use db_advisor::config::AppConfig;
use db_advisor::error::AppError;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

/// The five requirement answers. Values are validated by the engine so that
/// the CLI reports the same errors as the HTTP API.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct RequirementArgs {
    /// Web, Analytics, or Real-time
    #[arg(long)]
    pub(crate) app_type: Option<String>,
    /// Structured, Semi-structured, or Unstructured
    #[arg(long)]
    pub(crate) data_structure: Option<String>,
    /// Low, Medium, or High
    #[arg(long)]
    pub(crate) scalability: Option<String>,
    /// Low or High
    #[arg(long)]
    pub(crate) transactions: Option<String>,
    /// Yes or No
    #[arg(long)]
    pub(crate) schema_flexibility: Option<String>,
}

impl From<RequirementArgs> for AnalysisRequest {
    fn from(args: RequirementArgs) -> Self {
        Self {
            app_type: args.app_type,
            data_structure: args.data_structure,
            scalability: args.scalability,
            transactions: args.transactions,
            schema_flexibility: args.schema_flexibility,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    #[command(flatten)]
    pub(crate) requirements: RequirementArgs,
    /// Print the full analysis as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) requirements: RequirementArgs,
    /// Write the report to this file instead of stdout
    #[arg(long, conflicts_with = "save")]
    pub(crate) output: Option<PathBuf>,
    /// Write the report to the configured APP_REPORT_PATH
    #[arg(long)]
    pub(crate) save: bool,
    /// Also export the per-criterion score breakdown as CSV
    #[arg(long)]
    pub(crate) scores_csv: Option<PathBuf>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs { requirements, json } = args;
    let (_, engine) = cli_engine()?;

    let result = run_analysis(&engine, &requirements.into())?;
    if json {
        let body = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print_result(&result);
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        requirements,
        output,
        save,
        scores_csv,
    } = args;
    let (config, engine) = cli_engine()?;

    let result = run_analysis(&engine, &requirements.into())?;
    let report = render_text_report(&result);

    match destination(output, save, &config) {
        Some(path) => {
            std::fs::write(&path, format!("{report}\n"))?;
            info!(path = %path.display(), "report written");
            println!("Report written to {}", path.display());
        }
        None => println!("{report}"),
    }

    if let Some(path) = scores_csv {
        let file = BufWriter::new(File::create(&path)?);
        write_score_csv(&result, file)?;
        info!(path = %path.display(), "score breakdown written");
    }

    Ok(())
}

fn destination(output: Option<PathBuf>, save: bool, config: &AppConfig) -> Option<PathBuf> {
    output.or_else(|| save.then(|| config.report.output_path.clone()))
}
