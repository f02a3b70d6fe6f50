use serde::Serialize;

use super::criteria::{
    AnalysisInput, ApplicationType, DataStructure, Scalability, SchemaFlexibility, Transactions,
};

/// Tension between candidates that the requested combination brings out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tradeoff {
    pub title: &'static str,
    pub description: &'static str,
}

/// A system outside the compared three that may fit a specialised workload better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternative {
    pub database: &'static str,
    pub reason: &'static str,
}

struct Rule<T> {
    applies: fn(&AnalysisInput) -> bool,
    emits: T,
}

const TRADEOFF_RULES: [Rule<Tradeoff>; 5] = [
    Rule {
        applies: structured_but_flexible,
        emits: Tradeoff {
            title: "Schema Rigidity vs Flexibility",
            description: "You want structured data but also schema flexibility. \
                SQL databases enforce schemas strongly, while MongoDB offers \
                flexibility but sacrifices relational integrity.",
        },
    },
    Rule {
        applies: scale_with_strong_transactions,
        emits: Tradeoff {
            title: "Consistency vs Scalability (CAP Theorem)",
            description: "High scalability often requires eventual consistency (MongoDB), \
                but high transaction requirements need strong ACID guarantees \
                (PostgreSQL/MySQL). This is a fundamental distributed systems trade-off.",
        },
    },
    Rule {
        applies: analytics_at_scale,
        emits: Tradeoff {
            title: "SQL vs NoSQL for Analytics",
            description: "SQL databases excel at complex queries and joins, but NoSQL scales \
                better horizontally. Consider PostgreSQL with read replicas or \
                specialized analytics databases like ClickHouse.",
        },
    },
    Rule {
        applies: unstructured_with_strong_transactions,
        emits: Tradeoff {
            title: "Document Flexibility vs Transaction Integrity",
            description: "MongoDB handles unstructured data well but has limited multi-document \
                transaction support. PostgreSQL JSONB offers a middle ground with \
                strong transactions and flexible document storage.",
        },
    },
    Rule {
        applies: web_application,
        emits: Tradeoff {
            title: "Read Optimization vs Write Optimization",
            description: "MySQL excels at read-heavy workloads, MongoDB at write-heavy ones. \
                PostgreSQL balances both. Consider your read/write ratio.",
        },
    },
];

const ALTERNATIVE_RULES: [Rule<Alternative>; 5] = [
    Rule {
        applies: analytics_at_scale,
        emits: Alternative {
            database: "ClickHouse or Apache Druid",
            reason: "Columnar databases optimized for massive-scale analytics and \
                OLAP queries with superior compression and query performance.",
        },
    },
    Rule {
        applies: realtime_unstructured,
        emits: Alternative {
            database: "Redis or Apache Kafka",
            reason: "In-memory data stores and streaming platforms optimized for \
                real-time data processing and sub-millisecond latency.",
        },
    },
    Rule {
        applies: scale_with_strong_transactions,
        emits: Alternative {
            database: "CockroachDB or Google Spanner",
            reason: "Distributed SQL databases offering both horizontal scalability and \
                strong consistency (bypassing CAP theorem limitations).",
        },
    },
    Rule {
        applies: unstructured_analytics,
        emits: Alternative {
            database: "Elasticsearch",
            reason: "Excellent for full-text search, log analytics, and unstructured \
                data exploration with powerful aggregation capabilities.",
        },
    },
    Rule {
        applies: realtime_application,
        emits: Alternative {
            database: "TimescaleDB or InfluxDB",
            reason: "Specialized time-series databases for IoT, monitoring, and \
                event-driven applications requiring time-based queries.",
        },
    },
];

fn structured_but_flexible(input: &AnalysisInput) -> bool {
    input.data_structure == DataStructure::Structured
        && input.schema_flexibility == SchemaFlexibility::Yes
}

fn scale_with_strong_transactions(input: &AnalysisInput) -> bool {
    input.scalability == Scalability::High && input.transactions == Transactions::High
}

fn analytics_at_scale(input: &AnalysisInput) -> bool {
    input.app_type == ApplicationType::Analytics && input.scalability == Scalability::High
}

fn unstructured_with_strong_transactions(input: &AnalysisInput) -> bool {
    input.data_structure == DataStructure::Unstructured
        && input.transactions == Transactions::High
}

fn web_application(input: &AnalysisInput) -> bool {
    input.app_type == ApplicationType::Web
}

fn realtime_unstructured(input: &AnalysisInput) -> bool {
    input.app_type == ApplicationType::RealTime
        && input.data_structure == DataStructure::Unstructured
}

fn unstructured_analytics(input: &AnalysisInput) -> bool {
    input.data_structure == DataStructure::Unstructured
        && input.app_type == ApplicationType::Analytics
}

fn realtime_application(input: &AnalysisInput) -> bool {
    input.app_type == ApplicationType::RealTime
}

fn fire<T: Clone>(rules: &[Rule<T>], input: &AnalysisInput) -> Vec<T> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.emits.clone())
        .collect()
}

pub(crate) fn identify_tradeoffs(input: &AnalysisInput) -> Vec<Tradeoff> {
    fire(&TRADEOFF_RULES, input)
}

pub(crate) fn suggest_alternatives(input: &AnalysisInput) -> Vec<Alternative> {
    fire(&ALTERNATIVE_RULES, input)
}
