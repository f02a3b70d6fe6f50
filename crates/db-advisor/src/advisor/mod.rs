//! Rule-based comparison of MySQL, PostgreSQL, and MongoDB.
//!
//! [`DecisionEngine`] turns five categorical requirements into scores, a
//! ranking, a reasoned recommendation, trade-offs, and out-of-set
//! alternatives. The engine only reads static tables, so one instance can be
//! shared freely across callers.

mod catalog;
mod criteria;
mod ranking;
mod recommendation;
pub mod report;
pub mod router;
mod rules;
mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{profiles, Candidate, Profile};
pub use criteria::{
    criteria_catalog, AnalysisInput, AnalysisRequest, ApplicationType, Criterion,
    CriterionOptions, CriterionValue, DataStructure, Scalability, SchemaFlexibility,
    Transactions, ValidationError,
};
pub use ranking::RankedProfile;
pub use recommendation::{Confidence, Recommendation, CLOSE_MARGIN};
pub use router::advisor_router;
pub use rules::{Alternative, Tradeoff};
pub use scoring::{CandidateScores, ScoreBreakdown, ScoreComponent, ScoreMatrix, ScoringTables};

use serde::Serialize;

/// Stateless engine applying the scoring tables and rule sets to requirements.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    tables: ScoringTables,
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    pub fn calculate_scores(&self, input: &AnalysisInput) -> ScoreBreakdown {
        scoring::calculate_scores(&self.tables, input)
    }

    pub fn rank_profiles(&self, scores: &CandidateScores) -> Vec<RankedProfile> {
        ranking::rank_profiles(scores).into()
    }

    pub fn identify_tradeoffs(&self, input: &AnalysisInput) -> Vec<Tradeoff> {
        rules::identify_tradeoffs(input)
    }

    /// Returns `None` only for an empty ranking.
    pub fn generate_recommendation(
        &self,
        ranked: &[RankedProfile],
        input: &AnalysisInput,
    ) -> Option<Recommendation> {
        let (top, rest) = ranked.split_first()?;
        Some(recommendation::generate_recommendation(
            top,
            rest.first(),
            input,
        ))
    }

    pub fn suggest_alternatives(&self, input: &AnalysisInput) -> Vec<Alternative> {
        rules::suggest_alternatives(input)
    }

    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let breakdown = self.calculate_scores(input);
        let [top, runner_up, third] = ranking::rank_profiles(&breakdown.totals);
        let tradeoffs = self.identify_tradeoffs(input);
        let recommendation = recommendation::generate_recommendation(&top, Some(&runner_up), input);
        let alternatives = self.suggest_alternatives(input);
        let skipped_criteria = breakdown.skipped();

        AnalysisResult {
            input: *input,
            scores: breakdown.totals,
            profiles: vec![top, runner_up, third],
            tradeoffs,
            recommendation,
            alternatives,
            breakdown: breakdown.components,
            skipped_criteria,
        }
    }

    /// Validates a raw request before any scoring happens.
    pub fn analyze_request(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, ValidationError> {
        let input = request.validate()?;
        Ok(self.analyze(&input))
    }
}

/// Complete output of one analysis, ready for rendering or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub input: AnalysisInput,
    pub scores: CandidateScores,
    pub profiles: Vec<RankedProfile>,
    pub tradeoffs: Vec<Tradeoff>,
    pub recommendation: Recommendation,
    pub alternatives: Vec<Alternative>,
    pub breakdown: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_criteria: Vec<Criterion>,
}

impl AnalysisResult {
    pub fn runner_up(&self) -> Option<&RankedProfile> {
        self.profiles.get(1)
    }

    /// One-line summary for logs and CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{} recommended with {} confidence (MySQL {}, PostgreSQL {}, MongoDB {})",
            self.recommendation.database,
            self.recommendation.confidence.label(),
            self.scores.mysql,
            self.scores.postgresql,
            self.scores.mongodb
        )
    }
}
