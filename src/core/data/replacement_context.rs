/// Syntactic position of a matched phrase, which decides the replacement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplacementContext {
    /// Rendered text between two markup delimiters: `>phrase<`
    TextNode,
    /// A string literal: `"phrase"` or `'phrase'`
    QuotedLiteral,
}
