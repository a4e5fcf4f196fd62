use docsieve::{
    BatchEvaluator, CompiledQuery, DocType, DocsieveError, QuerySet, XmlDocument, read_document,
};
use std::env;
use std::path::Path;

/// A simple CLI to check which queries of a query file match a document.
fn main() -> Result<(), DocsieveError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprint!("{}", usage(&args));
        std::process::exit(1);
    }

    let query_path = &args[1];
    let document_path = Path::new(&args[2]);

    log::info!("Loading queries from {}", query_path);
    let query_set = QuerySet::from_file(query_path)?;

    let doc_type = match args.get(3) {
        Some(mime) => DocType::from_mime(Some(mime)),
        None => DocType::from_path(document_path),
    };
    match doc_type {
        DocType::Html => log::info!("HTML input must be well-formed XHTML"),
        DocType::Unknown => log::warn!("Unknown document type, parsing as XML"),
        DocType::Xml | DocType::Rss => {}
    }

    log::info!("Loading document from {}", document_path.display());
    let text = read_document(document_path)?;
    let document = XmlDocument::parse(&text)?;

    let mut evaluator = BatchEvaluator::with_config(query_set.config);
    evaluator.set_queries(query_set.queries.iter().cloned());
    let results = evaluator.evaluate(document.root_node());

    for (query, matched) in query_set.queries.iter().zip(results) {
        match CompiledQuery::parse(query) {
            Ok(_) if matched => println!("MATCH    {}", query),
            Ok(_) => println!("NO MATCH {}", query),
            Err(e) => println!("INVALID  {} ({})", query, e),
        }
    }
    Ok(())
}

fn usage(args: &[String]) -> String {
    let program = args.first().map_or("docsieve", String::as_str);
    format!(
        "Evaluates a set of XPath queries against an XML document.\n\n\
         Usage: {program} <path/to/queries.json> <path/to/document.xml> [content-type]\n\n\
         The query file is a JSON array of query strings, or an object\n\
         with \"queries\" and an optional \"config\".\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_without_program_name() {
        assert!(usage(&[]).contains("Usage: docsieve <path/to/queries.json>"));
        assert!(usage(&["/usr/bin/sieve".to_string()]).contains("Usage: /usr/bin/sieve "));
    }
}
