//! An implementation of the `DocumentNode` trait for the `roxmltree` crate.

use super::DocumentError;
use docsieve_xpath::DocumentNode;
use std::fmt::{Debug, Formatter};

/// A wrapper around a `roxmltree::Document` that acts as the entry point
/// for matching queries against an XML document.
pub struct XmlDocument<'a> {
    doc: roxmltree::Document<'a>,
}

impl<'a> XmlDocument<'a> {
    /// Parses an XML string into a navigable document.
    pub fn parse(text: &'a str) -> Result<Self, DocumentError> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(XmlDocument { doc })
    }

    /// Returns the document root, the unnamed parent of the document element.
    /// Queries start here: `/html` is matched against its children.
    pub fn root_node(&'a self) -> XmlNode<'a> {
        XmlNode(self.doc.root())
    }
}

/// A node of a parsed XML document.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct XmlNode<'a>(roxmltree::Node<'a, 'a>);

impl<'a> XmlNode<'a> {
    pub fn inner(&self) -> roxmltree::Node<'a, 'a> {
        self.0
    }
}

impl<'a> Debug for XmlNode<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'a> DocumentNode<'a> for XmlNode<'a> {
    fn name(&self) -> Option<&'a str> {
        self.0.is_element().then(|| self.0.tag_name().name())
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(self.0.children().map(XmlNode))
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.0.attribute(name)
    }

    fn first_text(&self) -> Option<&'a str> {
        self.0
            .children()
            .find(|child| child.is_text())
            .and_then(|child| child.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0"?>
<html><body id="main"><p>Hello<b>bold</b>World</p><br/></body></html>"#;

    #[test]
    fn test_root_node_is_unnamed() {
        let doc = XmlDocument::parse(XML).unwrap();
        let root = doc.root_node();
        assert_eq!(root.name(), None);
        let names: Vec<_> = root.children().filter_map(|n| n.name()).collect();
        assert_eq!(names, vec!["html"]);
    }

    #[test]
    fn test_node_primitives() {
        let doc = XmlDocument::parse(XML).unwrap();
        let html = doc.root_node().children().find(|n| n.name() == Some("html")).unwrap();
        let body = html.children().next().unwrap();
        assert_eq!(body.name(), Some("body"));
        assert_eq!(body.attribute("id"), Some("main"));
        assert_eq!(body.attribute("class"), None);
        assert_eq!(body.first_text(), None);

        let p = body.children().next().unwrap();
        assert_eq!(p.first_text(), Some("Hello"));
        let child_names: Vec<_> = p.children().map(|n| n.name()).collect();
        assert_eq!(child_names, vec![None, Some("b"), None]);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            XmlDocument::parse("<a><b></a>"),
            Err(DocumentError::Xml(_))
        ));
    }
}
