//! Evaluates an ordered set of queries against documents in one pass.

use crate::config::EvaluatorConfig;
use docsieve_xpath::{CompiledQuery, DocumentNode, compile, evaluate};

/// Holds an ordered list of raw queries and evaluates all of them against a
/// document.
///
/// Malformed queries and out-of-range indexes never raise: they report `false`.
#[derive(Debug, Clone, Default)]
pub struct BatchEvaluator {
    config: EvaluatorConfig,
    queries: Option<Vec<String>>,
    /// Compiled form of each query, same order, when caching is enabled.
    compiled: Vec<Option<CompiledQuery>>,
}

impl BatchEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Replaces the held queries and drops anything compiled from the
    /// previous set.
    pub fn set_queries<I, S>(&mut self, queries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queries: Vec<String> = queries.into_iter().map(Into::into).collect();
        self.compiled.clear();

        if self.config.cache_compiled {
            self.compiled = queries.iter().map(|q| compile(q)).collect();
            log::debug!(
                "Compiled {}/{} queries",
                self.compiled.iter().flatten().count(),
                queries.len()
            );
        }
        self.queries = Some(queries);
    }

    /// The held queries, or an empty slice if none were set.
    pub fn queries(&self) -> &[String] {
        self.queries.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.queries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries().is_empty()
    }

    /// Whether the query at `index` compiles. False for indexes outside
    /// `[0, len)` and when no queries are set.
    pub fn is_valid(&self, index: isize) -> bool {
        let Ok(index) = usize::try_from(index) else {
            return false;
        };
        let Some(query) = self.queries().get(index) else {
            return false;
        };
        match self.compiled.get(index) {
            Some(cached) => cached.is_some(),
            None => docsieve_xpath::is_valid(query),
        }
    }

    /// Matches every query against the document rooted at `root`. The `i`th
    /// entry is true iff the `i`th query is valid and matches. Empty when no
    /// queries are set.
    pub fn evaluate<'a, N>(&self, root: N) -> Vec<bool>
    where
        N: DocumentNode<'a>,
    {
        let results: Vec<bool> = if self.config.cache_compiled {
            self.compiled
                .iter()
                .map(|query| query.as_ref().is_some_and(|q| evaluate(root, q)))
                .collect()
        } else {
            self.queries()
                .iter()
                .map(|query| compile(query).is_some_and(|q| evaluate(root, &q)))
                .collect()
        };

        log::debug!(
            "Evaluated {} queries: {} matched",
            results.len(),
            results.iter().filter(|&&matched| matched).count()
        );
        results
    }

    /// Evaluates the held queries against each document in turn.
    pub fn evaluate_documents<'a, N, I>(&self, roots: I) -> Vec<Vec<bool>>
    where
        N: DocumentNode<'a>,
        I: IntoIterator<Item = N>,
    {
        roots.into_iter().map(|root| self.evaluate(root)).collect()
    }
}
