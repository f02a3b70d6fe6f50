use std::fmt;

use serde::{Deserialize, Serialize};

/// The three database systems every analysis compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candidate {
    MySql,
    PostgreSql,
    MongoDb,
}

impl Candidate {
    /// Priority order, also used to break score ties.
    pub const ALL: [Candidate; 3] = [Candidate::MySql, Candidate::PostgreSql, Candidate::MongoDb];

    pub const fn name(self) -> &'static str {
        match self {
            Candidate::MySql => "MySQL",
            Candidate::PostgreSql => "PostgreSQL",
            Candidate::MongoDb => "MongoDB",
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            Candidate::MySql => &MYSQL,
            Candidate::PostgreSql => &POSTGRESQL,
            Candidate::MongoDb => &MONGODB,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of a candidate shown next to its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub db_type: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

static MYSQL: Profile = Profile {
    name: "MySQL",
    db_type: "Relational (SQL)",
    pros: &[
        "Mature and widely adopted with extensive community support",
        "Excellent for structured data with ACID compliance",
        "Strong performance for read-heavy workloads",
        "Easy to learn and widely supported by hosting providers",
        "Great for traditional web applications",
    ],
    cons: &[
        "Limited support for complex analytics queries",
        "Horizontal scaling requires additional complexity (sharding)",
        "Less flexible with schema changes",
        "JSON support is basic compared to PostgreSQL",
        "Advanced features lag behind PostgreSQL",
    ],
};

static POSTGRESQL: Profile = Profile {
    name: "PostgreSQL",
    db_type: "Relational (SQL)",
    pros: &[
        "Most advanced open-source relational database",
        "Excellent for complex queries and analytics",
        "Superior JSON/JSONB support for semi-structured data",
        "Strong extensibility with custom functions and data types",
        "Best-in-class data integrity and ACID compliance",
    ],
    cons: &[
        "Slightly steeper learning curve than MySQL",
        "Higher memory consumption",
        "Horizontal scaling still requires effort",
        "Can be overkill for simple applications",
        "Configuration complexity for optimization",
    ],
};

static MONGODB: Profile = Profile {
    name: "MongoDB",
    db_type: "NoSQL (Document)",
    pros: &[
        "Excellent horizontal scalability (built-in sharding)",
        "Schema flexibility for evolving data models",
        "High performance for real-time applications",
        "Natural fit for JSON/document-based data",
        "Easy to get started with minimal setup",
    ],
    cons: &[
        "Eventual consistency can complicate transactions",
        "No built-in joins (requires application-level logic)",
        "Higher storage overhead",
        "Not ideal for complex relational data",
        "ACID transactions only within single documents by default",
    ],
};

/// Profiles in priority order.
pub fn profiles() -> impl Iterator<Item = (Candidate, &'static Profile)> {
    Candidate::ALL
        .into_iter()
        .map(|candidate| (candidate, candidate.profile()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_names_match_candidates() {
        for (candidate, profile) in profiles() {
            assert_eq!(profile.name, candidate.name());
            assert_eq!(profile.pros.len(), 5);
            assert_eq!(profile.cons.len(), 5);
        }
    }

    #[test]
    fn candidates_serialize_as_lowercase_keys() {
        let keys: Vec<_> = Candidate::ALL
            .iter()
            .map(|candidate| serde_json::to_value(candidate).expect("serializes"))
            .collect();
        assert_eq!(keys, ["mysql", "postgresql", "mongodb"]);
    }
}
