use crate::infra::print_result;
use clap::Args;
use db_advisor::advisor::{
    AnalysisInput, ApplicationType, CriterionValue, DataStructure, DecisionEngine, Scalability,
    SchemaFlexibility, Transactions,
};
use db_advisor::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only print the one-line summary for each scenario.
    #[arg(long)]
    pub(crate) brief: bool,
}

pub(crate) fn scenarios() -> [(&'static str, AnalysisInput); 3] {
    [
        (
            "Traditional web application",
            AnalysisInput {
                app_type: ApplicationType::Web,
                data_structure: DataStructure::Structured,
                scalability: Scalability::Low,
                transactions: Transactions::High,
                schema_flexibility: SchemaFlexibility::No,
            },
        ),
        (
            "Analytics over semi-structured data at scale",
            AnalysisInput {
                app_type: ApplicationType::Analytics,
                data_structure: DataStructure::SemiStructured,
                scalability: Scalability::High,
                transactions: Transactions::High,
                schema_flexibility: SchemaFlexibility::Yes,
            },
        ),
        (
            "Real-time event ingestion",
            AnalysisInput {
                app_type: ApplicationType::RealTime,
                data_structure: DataStructure::Unstructured,
                scalability: Scalability::High,
                transactions: Transactions::Low,
                schema_flexibility: SchemaFlexibility::Yes,
            },
        ),
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = DecisionEngine::new();

    println!("Database decision advisor demo");
    for (title, input) in scenarios() {
        let result = engine.analyze(&input);
        let selections: Vec<String> = input
            .selections()
            .iter()
            .map(|(criterion, selected)| format!("{criterion}={selected}"))
            .collect();

        println!("\n== {title}");
        println!("   {}", selections.join(", "));
        if args.brief {
            println!("   {}", result.summary());
        } else {
            print_result(&result);
        }
    }

    let valid = AnalysisInput::all().count();
    println!(
        "\n{valid} requirement combinations are valid; e.g. application type accepts {}.",
        ApplicationType::ALL
            .iter()
            .map(|value| value.label())
            .collect::<Vec<_>>()
            .join(" / ")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use db_advisor::advisor::Candidate;

    #[test]
    fn demo_scenarios_cover_each_candidate() {
        let engine = DecisionEngine::new();
        let winners: Vec<_> = scenarios()
            .iter()
            .map(|(_, input)| engine.analyze(input).recommendation.candidate)
            .collect();
        assert_eq!(
            winners,
            [Candidate::MySql, Candidate::PostgreSql, Candidate::MongoDb]
        );
    }
}
