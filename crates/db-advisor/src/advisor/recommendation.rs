use serde::Serialize;

use super::catalog::Candidate;
use super::criteria::{
    AnalysisInput, ApplicationType, DataStructure, Scalability, SchemaFlexibility, Transactions,
};
use super::ranking::RankedProfile;

/// A runner-up within this many points earns a closeness note.
pub const CLOSE_MARGIN: i16 = 2;
/// Gap treated as decisive when there is no runner-up to compare with.
const UNCONTESTED_GAP: i16 = 5;

/// How clearly the leading candidate beats the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn from_gap(gap: i16) -> Self {
        if gap > 3 {
            Confidence::High
        } else if gap > 1 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub candidate: Candidate,
    pub database: &'static str,
    pub confidence: Confidence,
    pub reasoning: Vec<String>,
}

/// Input predicate gating one reasoning sentence.
#[derive(Debug, Clone, Copy)]
enum Condition {
    AppType(ApplicationType),
    Data(DataStructure),
    Scale(Scalability),
    ScaleNot(Scalability),
    Tx(Transactions),
    Schema(SchemaFlexibility),
}

impl Condition {
    fn holds(self, input: &AnalysisInput) -> bool {
        match self {
            Condition::AppType(value) => input.app_type == value,
            Condition::Data(value) => input.data_structure == value,
            Condition::Scale(value) => input.scalability == value,
            Condition::ScaleNot(value) => input.scalability != value,
            Condition::Tx(value) => input.transactions == value,
            Condition::Schema(value) => input.schema_flexibility == value,
        }
    }
}

struct Reasoning {
    opening: &'static str,
    conditional: &'static [(Condition, &'static str)],
}

static MYSQL_REASONING: Reasoning = Reasoning {
    opening: "MySQL is recommended for your traditional web application needs with structured data.",
    conditional: &[
        (
            Condition::Tx(Transactions::High),
            "Strong ACID compliance meets your transaction requirements.",
        ),
        (
            Condition::ScaleNot(Scalability::High),
            "Vertical scaling is sufficient for your scalability needs.",
        ),
        (
            Condition::AppType(ApplicationType::Web),
            "Proven track record for web applications with excellent community support.",
        ),
    ],
};

static POSTGRESQL_REASONING: Reasoning = Reasoning {
    opening: "PostgreSQL offers the best balance of advanced features for your requirements.",
    conditional: &[
        (
            Condition::AppType(ApplicationType::Analytics),
            "Superior query optimization and window functions support complex analytics workloads.",
        ),
        (
            Condition::Data(DataStructure::SemiStructured),
            "Excellent JSONB support handles semi-structured data efficiently while maintaining relational integrity.",
        ),
        (
            Condition::Tx(Transactions::High),
            "Industry-leading ACID compliance and advanced transaction isolation ensures data integrity.",
        ),
        (
            Condition::Schema(SchemaFlexibility::Yes),
            "JSONB and extension support provide flexibility while maintaining SQL capabilities.",
        ),
    ],
};

static MONGODB_REASONING: Reasoning = Reasoning {
    opening: "MongoDB is the best choice for your scalability and flexibility needs.",
    conditional: &[
        (
            Condition::Scale(Scalability::High),
            "Built-in sharding provides excellent horizontal scalability without complex configuration.",
        ),
        (
            Condition::Schema(SchemaFlexibility::Yes),
            "Schema-less design allows rapid iteration and accommodates evolving data models.",
        ),
        (
            Condition::AppType(ApplicationType::RealTime),
            "Optimized for high-throughput real-time applications with low-latency operations.",
        ),
        (
            Condition::Data(DataStructure::Unstructured),
            "Document model naturally fits unstructured and hierarchical data.",
        ),
    ],
};

fn reasoning_for(candidate: Candidate) -> &'static Reasoning {
    match candidate {
        Candidate::MySql => &MYSQL_REASONING,
        Candidate::PostgreSql => &POSTGRESQL_REASONING,
        Candidate::MongoDb => &MONGODB_REASONING,
    }
}

pub(crate) fn generate_recommendation(
    top: &RankedProfile,
    runner_up: Option<&RankedProfile>,
    input: &AnalysisInput,
) -> Recommendation {
    let table = reasoning_for(top.candidate);
    let mut reasoning = vec![table.opening.to_string()];
    reasoning.extend(
        table
            .conditional
            .iter()
            .filter(|(condition, _)| condition.holds(input))
            .map(|(_, sentence)| sentence.to_string()),
    );

    let gap = runner_up
        .map(|runner| i16::from(top.score) - i16::from(runner.score))
        .unwrap_or(UNCONTESTED_GAP);

    if let Some(runner) = runner_up {
        if gap <= CLOSE_MARGIN {
            reasoning.push(format!(
                "Note: {} scored closely ({} vs {}). Consider evaluating both options based on team expertise.",
                runner.name, runner.score, top.score
            ));
        }
    }

    Recommendation {
        candidate: top.candidate,
        database: top.name,
        confidence: Confidence::from_gap(gap),
        reasoning,
    }
}
