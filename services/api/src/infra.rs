use db_advisor::advisor::{AnalysisResult, DecisionEngine};
use db_advisor::config::AppConfig;
use db_advisor::error::AppError;
use db_advisor::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration and logging for one-shot CLI commands.
pub(crate) fn cli_engine() -> Result<(AppConfig, DecisionEngine), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok((config, DecisionEngine::new()))
}

pub(crate) fn print_result(result: &AnalysisResult) {
    let recommendation = &result.recommendation;
    println!(
        "Recommended: {} ({} confidence)",
        recommendation.database,
        recommendation.confidence.label()
    );
    for reason in &recommendation.reasoning {
        println!("  • {reason}");
    }

    println!("\nScores:");
    for (rank, profile) in result.profiles.iter().enumerate() {
        println!(
            "  {}. {} [{}]: {}",
            rank + 1,
            profile.name,
            profile.db_type,
            profile.score
        );
    }

    if !result.tradeoffs.is_empty() {
        println!("\nTrade-offs:");
        for tradeoff in &result.tradeoffs {
            println!("  - {}: {}", tradeoff.title, tradeoff.description);
        }
    }

    if !result.alternatives.is_empty() {
        println!("\nAlternatives:");
        for alternative in &result.alternatives {
            println!("  - {}: {}", alternative.database, alternative.reason);
        }
    }
}
