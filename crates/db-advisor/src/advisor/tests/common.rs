use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::advisor::{
    AnalysisInput, AnalysisRequest, ApplicationType, DataStructure, DecisionEngine, Scalability,
    SchemaFlexibility, Transactions,
};

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new()
}

pub(super) fn input(
    app_type: ApplicationType,
    data_structure: DataStructure,
    scalability: Scalability,
    transactions: Transactions,
    schema_flexibility: SchemaFlexibility,
) -> AnalysisInput {
    AnalysisInput {
        app_type,
        data_structure,
        scalability,
        transactions,
        schema_flexibility,
    }
}

/// Web, Structured, Low, High, No: MySQL and PostgreSQL tie at 18.
pub(super) fn web_structured() -> AnalysisInput {
    input(
        ApplicationType::Web,
        DataStructure::Structured,
        Scalability::Low,
        Transactions::High,
        SchemaFlexibility::No,
    )
}

/// Analytics, Semi-structured, High, High, Yes: PostgreSQL and MongoDB tie at 15.
pub(super) fn analytics_at_scale() -> AnalysisInput {
    input(
        ApplicationType::Analytics,
        DataStructure::SemiStructured,
        Scalability::High,
        Transactions::High,
        SchemaFlexibility::Yes,
    )
}

/// Real-time, Unstructured, High, Low, Yes: MongoDB wins outright.
pub(super) fn realtime_unstructured() -> AnalysisInput {
    input(
        ApplicationType::RealTime,
        DataStructure::Unstructured,
        Scalability::High,
        Transactions::Low,
        SchemaFlexibility::Yes,
    )
}

/// Quiet baseline that fires no trade-off or alternative rule.
pub(super) fn baseline() -> AnalysisInput {
    input(
        ApplicationType::Analytics,
        DataStructure::Structured,
        Scalability::Medium,
        Transactions::Low,
        SchemaFlexibility::No,
    )
}

pub(super) fn request(input: AnalysisInput) -> AnalysisRequest {
    AnalysisRequest::from(input)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
