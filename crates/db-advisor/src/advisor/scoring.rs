use std::marker::PhantomData;

use serde::Serialize;

use super::catalog::Candidate;
use super::criteria::{
    AnalysisInput, ApplicationType, Criterion, CriterionValue, DataStructure, Scalability,
    SchemaFlexibility, Transactions,
};

/// Per-candidate integers, used both for a single matrix row and for totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateScores {
    pub mysql: u8,
    pub postgresql: u8,
    pub mongodb: u8,
}

impl CandidateScores {
    pub const fn new(mysql: u8, postgresql: u8, mongodb: u8) -> Self {
        Self {
            mysql,
            postgresql,
            mongodb,
        }
    }

    pub const fn get(&self, candidate: Candidate) -> u8 {
        match candidate {
            Candidate::MySql => self.mysql,
            Candidate::PostgreSql => self.postgresql,
            Candidate::MongoDb => self.mongodb,
        }
    }

    /// Totals saturate at `u8::MAX` so caller-supplied tables cannot overflow.
    fn add(&mut self, row: CandidateScores) {
        self.mysql = self.mysql.saturating_add(row.mysql);
        self.postgresql = self.postgresql.saturating_add(row.postgresql);
        self.mongodb = self.mongodb.saturating_add(row.mongodb);
    }
}

/// Score rows for one criterion, indexed by the value's ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreMatrix<V, const N: usize> {
    rows: [Option<CandidateScores>; N],
    _values: PhantomData<V>,
}

impl<V: CriterionValue, const N: usize> ScoreMatrix<V, N> {
    pub const fn new(rows: [Option<CandidateScores>; N]) -> Self {
        Self {
            rows,
            _values: PhantomData,
        }
    }

    pub fn lookup(&self, value: V) -> Option<CandidateScores> {
        self.rows.get(value.ordinal()).copied().flatten()
    }

    /// Drops the row for `value`, leaving the criterion to contribute nothing.
    #[cfg(test)]
    pub(crate) fn without(mut self, value: V) -> Self {
        if let Some(row) = self.rows.get_mut(value.ordinal()) {
            *row = None;
        }
        self
    }
}

const fn row(mysql: u8, postgresql: u8, mongodb: u8) -> Option<CandidateScores> {
    Some(CandidateScores::new(mysql, postgresql, mongodb))
}

/// One matrix per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringTables {
    pub application_type: ScoreMatrix<ApplicationType, 3>,
    pub data_structure: ScoreMatrix<DataStructure, 3>,
    pub scalability: ScoreMatrix<Scalability, 3>,
    pub transactions: ScoreMatrix<Transactions, 2>,
    pub schema_flexibility: ScoreMatrix<SchemaFlexibility, 2>,
}

impl ScoringTables {
    pub const fn standard() -> Self {
        Self {
            // Web, Analytics, Real-time
            application_type: ScoreMatrix::new([row(3, 3, 2), row(2, 4, 1), row(2, 2, 4)]),
            // Structured, Semi-structured, Unstructured
            data_structure: ScoreMatrix::new([row(4, 4, 1), row(2, 3, 4), row(1, 2, 4)]),
            // Low, Medium, High
            scalability: ScoreMatrix::new([row(3, 3, 2), row(3, 3, 3), row(2, 2, 4)]),
            // Low, High
            transactions: ScoreMatrix::new([row(2, 2, 3), row(4, 4, 2)]),
            // Yes, No
            schema_flexibility: ScoreMatrix::new([row(1, 2, 4), row(4, 4, 2)]),
        }
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Contribution of one criterion to every candidate's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub criterion: Criterion,
    pub selected: &'static str,
    /// `None` when the matrix had no row for the selected value.
    pub scores: Option<CandidateScores>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub totals: CandidateScores,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn skipped(&self) -> Vec<Criterion> {
        self.components
            .iter()
            .filter(|component| component.scores.is_none())
            .map(|component| component.criterion)
            .collect()
    }
}

pub(crate) fn calculate_scores(tables: &ScoringTables, input: &AnalysisInput) -> ScoreBreakdown {
    let lookups = [
        component(&tables.application_type, input.app_type),
        component(&tables.data_structure, input.data_structure),
        component(&tables.scalability, input.scalability),
        component(&tables.transactions, input.transactions),
        component(&tables.schema_flexibility, input.schema_flexibility),
    ];

    let mut totals = CandidateScores::default();
    for row in lookups.iter().filter_map(|component| component.scores) {
        totals.add(row);
    }

    ScoreBreakdown {
        totals,
        components: lookups.into(),
    }
}

fn component<V: CriterionValue, const N: usize>(
    matrix: &ScoreMatrix<V, N>,
    value: V,
) -> ScoreComponent {
    ScoreComponent {
        criterion: V::CRITERION,
        selected: value.label(),
        scores: matrix.lookup(value),
    }
}
