//! Defines the abstraction for the read-only document tree the matcher walks.

/// The contract for a node in a read-only, hierarchical document.
///
/// The matcher is written exclusively against this trait, so any DOM
/// (a parsed XML document, a cleaned-up HTML tree, an in-memory mock) can be
/// queried by implementing these four primitives. Nodes are never mutated.
///
/// `'a` is the lifetime of the underlying document.
pub trait DocumentNode<'a>: std::fmt::Debug + Clone + Copy {
    /// The element name (e.g., `body`). Returns `None` for nodes without a
    /// name, such as the document root or text nodes. Such nodes never match a
    /// name in a query.
    fn name(&self) -> Option<&'a str>;

    /// An iterator over the child nodes, in document order.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// The value of the first text-type child, if any. Later text children
    /// are not consulted.
    fn first_text(&self) -> Option<&'a str>;
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;

    // --- Mock Implementation for TDD ---

    #[derive(Debug, Clone, Default)]
    struct MockNodeData<'a> {
        name: Option<&'a str>,
        text: Option<&'a str>,
        children: Vec<usize>,
        attributes: Vec<(&'a str, &'a str)>,
    }

    /// An in-memory document. Node `0` is the unnamed document root.
    #[derive(Debug)]
    pub struct MockTree<'a> {
        nodes: Vec<MockNodeData<'a>>,
    }

    /// A lightweight handle into a [`MockTree`].
    #[derive(Debug, Clone, Copy)]
    pub struct MockNode<'a> {
        pub id: usize,
        pub tree: &'a MockTree<'a>,
    }

    impl<'a> PartialEq for MockNode<'a> {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }
    impl<'a> Eq for MockNode<'a> {}

    impl<'a> Default for MockTree<'a> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<'a> MockTree<'a> {
        pub fn new() -> Self {
            Self {
                nodes: vec![MockNodeData::default()],
            }
        }

        pub fn root(&'a self) -> MockNode<'a> {
            MockNode { id: 0, tree: self }
        }

        /// Appends an element under `parent` and returns its id.
        pub fn element(&mut self, parent: usize, name: &'a str, attributes: &[(&'a str, &'a str)]) -> usize {
            self.push(
                parent,
                MockNodeData {
                    name: Some(name),
                    attributes: attributes.to_vec(),
                    ..Default::default()
                },
            )
        }

        /// Appends a text node under `parent` and returns its id.
        pub fn text(&mut self, parent: usize, value: &'a str) -> usize {
            self.push(
                parent,
                MockNodeData {
                    text: Some(value),
                    ..Default::default()
                },
            )
        }

        fn push(&mut self, parent: usize, data: MockNodeData<'a>) -> usize {
            let id = self.nodes.len();
            self.nodes.push(data);
            self.nodes[parent].children.push(id);
            id
        }
    }

    impl<'a> DocumentNode<'a> for MockNode<'a> {
        fn name(&self) -> Option<&'a str> {
            self.tree.nodes[self.id].name
        }

        fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree; // Re-borrow to help the lifetime checker
            Box::new(
                tree.nodes[self.id]
                    .children
                    .iter()
                    .map(move |&id| MockNode { id, tree }),
            )
        }

        fn attribute(&self, name: &str) -> Option<&'a str> {
            self.tree.nodes[self.id]
                .attributes
                .iter()
                .find(|(key, _)| *key == name)
                .map(|&(_, value)| value)
        }

        fn first_text(&self) -> Option<&'a str> {
            let tree = self.tree;
            tree.nodes[self.id]
                .children
                .iter()
                .find_map(|&id| tree.nodes[id].text)
        }
    }

    /// Creates a mock document with two top-level elements:
    /// ```text
    /// (root)                                  id 0
    ///   <a>                                   id 1
    ///     <b att="123">                       id 2
    ///       <c>string with quote in c</c>     id 3, text 4
    ///     </b>
    ///   </a>
    ///   <d>                                   id 5
    ///     <e>                                 id 6
    ///       <f>                               id 7
    ///         <foo>some thing</foo>           id 8, text 9
    ///         <bar>else</bar>                 id 10, text 11
    ///       </f>
    ///     </e>
    ///   </d>
    /// ```
    pub fn create_test_tree<'a>() -> MockTree<'a> {
        let mut tree = MockTree::new();
        let a = tree.element(0, "a", &[]);
        let b = tree.element(a, "b", &[("att", "123")]);
        let c = tree.element(b, "c", &[]);
        tree.text(c, "string with quote in c");

        let d = tree.element(0, "d", &[]);
        let e = tree.element(d, "e", &[]);
        let f = tree.element(e, "f", &[]);
        let foo = tree.element(f, "foo", &[]);
        tree.text(foo, "some thing");
        let bar = tree.element(f, "bar", &[]);
        tree.text(bar, "else");
        tree
    }

}
