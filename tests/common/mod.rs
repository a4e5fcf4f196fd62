pub mod fixtures;

use docsieve::{BatchEvaluator, XmlDocument};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Evaluate a single query against an XML string
pub fn matches_xml(xml: &str, query: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let doc = XmlDocument::parse(xml)?;
    let mut evaluator = BatchEvaluator::new();
    evaluator.set_queries([query]);
    Ok(evaluator.evaluate(doc.root_node())[0])
}
