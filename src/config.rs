use crate::error::DocsieveError;
use docsieve_xpath::CompiledQuery;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Whether queries are compiled once when they are set, instead of on
    /// every `is_valid` / `evaluate` call.
    ///
    /// - **true**: Compilation cost is paid once per query set. Best when the
    ///   same set is evaluated against many documents.
    /// - **false**: Nothing is retained between calls.
    ///
    /// Defaults to `true`.
    pub cache_compiled: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            cache_compiled: true,
        }
    }
}

/// A query set as read from a JSON file.
///
/// Accepts either a bare array of query strings or an object of the form
/// `{"queries": [...], "config": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySet {
    pub queries: Vec<String>,
    pub config: EvaluatorConfig,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QueryFile {
    List(Vec<String>),
    Full {
        queries: Vec<String>,
        #[serde(default)]
        config: EvaluatorConfig,
    },
}

impl QuerySet {
    pub fn from_json(json: &str) -> Result<Self, DocsieveError> {
        let set = match serde_json::from_str(json)? {
            QueryFile::List(queries) => QuerySet {
                queries,
                config: EvaluatorConfig::default(),
            },
            QueryFile::Full { queries, config } => QuerySet { queries, config },
        };
        Ok(set)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocsieveError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Fails with the first query that does not compile.
    pub fn validate(&self) -> Result<(), DocsieveError> {
        for query in &self.queries {
            CompiledQuery::parse(query)?;
        }
        Ok(())
    }
}
