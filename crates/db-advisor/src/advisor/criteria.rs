use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five requirement axes a caller must answer before an analysis can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    ApplicationType,
    DataStructure,
    Scalability,
    Transactions,
    SchemaFlexibility,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::ApplicationType,
        Criterion::DataStructure,
        Criterion::Scalability,
        Criterion::Transactions,
        Criterion::SchemaFlexibility,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::ApplicationType => "Application Type",
            Criterion::DataStructure => "Data Structure",
            Criterion::Scalability => "Scalability",
            Criterion::Transactions => "Transactions",
            Criterion::SchemaFlexibility => "Schema Flexibility",
        }
    }

    /// Field name used by request payloads.
    pub const fn field(self) -> &'static str {
        match self {
            Criterion::ApplicationType => "app_type",
            Criterion::DataStructure => "data_structure",
            Criterion::Scalability => "scalability",
            Criterion::Transactions => "transactions",
            Criterion::SchemaFlexibility => "schema_flexibility",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Criterion::ApplicationType => ApplicationType::LABELS,
            Criterion::DataStructure => DataStructure::LABELS,
            Criterion::Scalability => Scalability::LABELS,
            Criterion::Transactions => Transactions::LABELS,
            Criterion::SchemaFlexibility => SchemaFlexibility::LABELS,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single categorical answer on one criterion axis.
pub trait CriterionValue: Copy + Sized + 'static {
    const CRITERION: Criterion;
    const ALL: &'static [Self];

    /// Position of the value in its axis; score matrices are indexed by it.
    fn ordinal(self) -> usize;

    fn label(self) -> &'static str;

    fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = raw.map(str::trim).filter(|value| !value.is_empty());
        let Some(raw) = raw else {
            return Err(ValidationError::Missing {
                criterion: Self::CRITERION,
            });
        };

        let wanted = normalize(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|value| normalize(value.label()) == wanted)
            .ok_or_else(|| ValidationError::Unrecognized {
                criterion: Self::CRITERION,
                value: raw.to_string(),
                expected: Self::CRITERION.options().join(", "),
            })
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! criterion_value {
    ($name:ident, $criterion:expr, [$($variant:ident => $label:literal),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const LABELS: &'static [&'static str] = &[$($label),+];
        }

        impl CriterionValue for $name {
            const CRITERION: Criterion = $criterion;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn ordinal(self) -> usize {
                self as usize
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(CriterionValue::label(*self))
            }
        }
    };
}

criterion_value!(ApplicationType, Criterion::ApplicationType, [
    Web => "Web",
    Analytics => "Analytics",
    RealTime => "Real-time",
]);

criterion_value!(DataStructure, Criterion::DataStructure, [
    Structured => "Structured",
    SemiStructured => "Semi-structured",
    Unstructured => "Unstructured",
]);

criterion_value!(Scalability, Criterion::Scalability, [
    Low => "Low",
    Medium => "Medium",
    High => "High",
]);

criterion_value!(Transactions, Criterion::Transactions, [
    Low => "Low",
    High => "High",
]);

criterion_value!(SchemaFlexibility, Criterion::SchemaFlexibility, [
    Yes => "Yes",
    No => "No",
]);

/// Validated requirements for a single analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub app_type: ApplicationType,
    pub data_structure: DataStructure,
    pub scalability: Scalability,
    pub transactions: Transactions,
    pub schema_flexibility: SchemaFlexibility,
}

impl AnalysisInput {
    /// Every valid combination of requirements, in declaration order.
    pub fn all() -> impl Iterator<Item = AnalysisInput> {
        ApplicationType::ALL.iter().flat_map(|&app_type| {
            DataStructure::ALL.iter().flat_map(move |&data_structure| {
                Scalability::ALL.iter().flat_map(move |&scalability| {
                    Transactions::ALL.iter().flat_map(move |&transactions| {
                        SchemaFlexibility::ALL
                            .iter()
                            .map(move |&schema_flexibility| AnalysisInput {
                                app_type,
                                data_structure,
                                scalability,
                                transactions,
                                schema_flexibility,
                            })
                    })
                })
            })
        })
    }

    /// Selected labels paired with their criterion, in criterion order.
    pub fn selections(&self) -> [(Criterion, &'static str); 5] {
        [
            (Criterion::ApplicationType, self.app_type.label()),
            (Criterion::DataStructure, self.data_structure.label()),
            (Criterion::Scalability, self.scalability.label()),
            (Criterion::Transactions, self.transactions.label()),
            (Criterion::SchemaFlexibility, self.schema_flexibility.label()),
        ]
    }
}

/// Unvalidated requirements as supplied by a form, CLI, or JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub app_type: Option<String>,
    #[serde(default)]
    pub data_structure: Option<String>,
    #[serde(default)]
    pub scalability: Option<String>,
    #[serde(default)]
    pub transactions: Option<String>,
    #[serde(default)]
    pub schema_flexibility: Option<String>,
}

impl AnalysisRequest {
    /// Checks the fields in criterion order and stops at the first bad one.
    pub fn validate(&self) -> Result<AnalysisInput, ValidationError> {
        Ok(AnalysisInput {
            app_type: ApplicationType::parse(self.app_type.as_deref())?,
            data_structure: DataStructure::parse(self.data_structure.as_deref())?,
            scalability: Scalability::parse(self.scalability.as_deref())?,
            transactions: Transactions::parse(self.transactions.as_deref())?,
            schema_flexibility: SchemaFlexibility::parse(self.schema_flexibility.as_deref())?,
        })
    }
}

impl From<AnalysisInput> for AnalysisRequest {
    fn from(input: AnalysisInput) -> Self {
        Self {
            app_type: Some(input.app_type.label().to_string()),
            data_structure: Some(input.data_structure.label().to_string()),
            scalability: Some(input.scalability.label().to_string()),
            transactions: Some(input.transactions.label().to_string()),
            schema_flexibility: Some(input.schema_flexibility.label().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing value for {criterion}")]
    Missing { criterion: Criterion },
    #[error("unrecognized value '{value}' for {criterion} (expected one of: {expected})")]
    Unrecognized {
        criterion: Criterion,
        value: String,
        expected: String,
    },
}

impl ValidationError {
    pub const fn criterion(&self) -> Criterion {
        match self {
            ValidationError::Missing { criterion }
            | ValidationError::Unrecognized { criterion, .. } => *criterion,
        }
    }
}

/// Accepted labels for one criterion, as exposed to form builders.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionOptions {
    pub criterion: Criterion,
    pub label: &'static str,
    pub field: &'static str,
    pub options: &'static [&'static str],
}

pub fn criteria_catalog() -> Vec<CriterionOptions> {
    Criterion::ALL
        .iter()
        .map(|&criterion| CriterionOptions {
            criterion,
            label: criterion.label(),
            field: criterion.field(),
            options: criterion.options(),
        })
        .collect()
}
