/// A node of the generic tagged parse tree produced by the parser.
///
/// The tree deliberately mirrors the output of a grammar-driven parser
/// generator: every node carries a `tag` naming the grammar rule that
/// produced it, the matched `contents` for leaf rules, and an ordered list
/// of child nodes for grouping rules. Purely syntactic matches (the
/// brackets of an expression, the anchors around the whole program) appear
/// as ordinary children so that the reader decides what is meaningful.
///
/// Significant tags:
/// - a tag containing `"number"` or `"symbol"` marks a leaf with `contents`,
/// - a tag containing `"sexpr"` or `"qexpr"` marks a grouping node,
/// - the literal tag `">"` marks the program root (grouped like an sexpr),
/// - the exact tag `"regex"` marks an input anchor with no content,
/// - the tag `"char"` marks a bracket literal (`(`, `)`, `{` or `}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The grammar rule that produced this node.
    pub tag:      String,
    /// The matched source text for leaf nodes; empty for grouping nodes.
    pub contents: String,
    /// Child nodes in source order, including bracket and anchor children.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty grouping node with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag:      tag.to_string(),
               contents: String::new(),
               children: Vec::new(), }
    }

    /// Creates a leaf node holding matched source text.
    #[must_use]
    pub fn leaf(tag: &str, contents: &str) -> Self {
        Self { tag:      tag.to_string(),
               contents: contents.to_string(),
               children: Vec::new(), }
    }

    /// Creates a bracket child (`(`, `)`, `{` or `}`).
    #[must_use]
    pub fn bracket(contents: &str) -> Self {
        Self::leaf("char", contents)
    }

    /// Creates an input anchor child, as emitted at the edges of the root.
    #[must_use]
    pub fn anchor() -> Self {
        Self::leaf("regex", "")
    }
}
