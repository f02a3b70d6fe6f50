//! Plain-text and CSV renderings of an [`AnalysisResult`].

use std::io;

use serde::Serialize;

use super::AnalysisResult;

const RULE_WIDTH: usize = 70;

/// Renders the export report with fixed section headers. Output depends only
/// on the result, so identical analyses produce identical reports.
pub fn render_text_report(result: &AnalysisResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push("DATABASE DECISION ASSISTANT - ANALYSIS REPORT".to_string());
    lines.push(heavy.clone());
    lines.push(String::new());

    lines.push("USER REQUIREMENTS:".to_string());
    lines.push(light.clone());
    for (criterion, selected) in result.input.selections() {
        lines.push(format!("{}: {}", criterion.label(), selected));
    }
    lines.push(String::new());

    let recommendation = &result.recommendation;
    lines.push("RECOMMENDATION:".to_string());
    lines.push(light.clone());
    lines.push(format!("Database: {}", recommendation.database));
    lines.push(format!("Confidence: {}", recommendation.confidence.label()));
    lines.push(String::new());
    lines.push("Reasoning:".to_string());
    for reason in &recommendation.reasoning {
        lines.push(format!("  • {reason}"));
    }
    lines.push(String::new());

    lines.push("DATABASE COMPARISON:".to_string());
    lines.push(light.clone());
    for profile in &result.profiles {
        lines.push(format!("\n{} (Score: {})", profile.name, profile.score));
        lines.push(format!("Type: {}", profile.db_type));
        lines.push("\nPros:".to_string());
        for pro in profile.pros {
            lines.push(format!("  ✓ {pro}"));
        }
        lines.push("\nCons:".to_string());
        for con in profile.cons {
            lines.push(format!("  ✗ {con}"));
        }
        lines.push(String::new());
    }

    if !result.tradeoffs.is_empty() {
        lines.push("KEY TRADE-OFFS:".to_string());
        lines.push(light.clone());
        for tradeoff in &result.tradeoffs {
            lines.push(format!("\n{}", tradeoff.title));
            lines.push(format!("  {}", tradeoff.description));
        }
        lines.push(String::new());
    }

    if !result.alternatives.is_empty() {
        lines.push("ALTERNATIVE DATABASES:".to_string());
        lines.push(light);
        for alternative in &result.alternatives {
            lines.push(format!("\n{}", alternative.database));
            lines.push(format!("  {}", alternative.reason));
        }
        lines.push(String::new());
    }

    lines.push(heavy.clone());
    lines.push("End of Report".to_string());
    lines.push(heavy);

    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct ScoreRow<'a> {
    criterion: &'a str,
    selected: &'a str,
    mysql: Option<u8>,
    postgresql: Option<u8>,
    mongodb: Option<u8>,
}

/// Writes the per-criterion breakdown followed by a `Total` row. Skipped
/// criteria keep their row with empty score cells.
pub fn write_score_csv<W: io::Write>(result: &AnalysisResult, writer: W) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);

    for component in &result.breakdown {
        csv.serialize(ScoreRow {
            criterion: component.criterion.label(),
            selected: component.selected,
            mysql: component.scores.map(|scores| scores.mysql),
            postgresql: component.scores.map(|scores| scores.postgresql),
            mongodb: component.scores.map(|scores| scores.mongodb),
        })?;
    }

    csv.serialize(ScoreRow {
        criterion: "Total",
        selected: "",
        mysql: Some(result.scores.mysql),
        postgresql: Some(result.scores.postgresql),
        mongodb: Some(result.scores.mongodb),
    })?;

    csv.flush()?;
    Ok(())
}

pub fn score_csv(result: &AnalysisResult) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_score_csv(result, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
