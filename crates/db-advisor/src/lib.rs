//! Database decision advisor.
//!
//! Scores MySQL, PostgreSQL, and MongoDB against five categorical
//! requirements and explains the ranking. The [`advisor`] module holds the
//! engine; the remaining modules carry the configuration, logging, and error
//! plumbing shared by the HTTP service and CLI.

pub mod advisor;
pub mod config;
pub mod error;
pub mod telemetry;
