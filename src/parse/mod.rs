pub mod adapter;
pub mod language;
pub mod source;

use thiserror::Error;

use crate::ast::Node;
use language::Language;
use source::SourceFile;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the {language} grammar: {message}")]
    Language { language: Language, message: String },
    #[error("the {language} parser returned no tree")]
    Aborted { language: Language },
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

/// Parse a source file with the grammar for `language` and lower it into an
/// owned [`Node`] tree.
///
/// A tree with any `ERROR` or `MISSING` node is rejected as a whole; the
/// engine never walks a partially recovered tree.
pub fn parse_source(source: &SourceFile, language: Language) -> Result<Node, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|e| ParseError::Language {
            language,
            message: e.to_string(),
        })?;
    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or(ParseError::Aborted { language })?;

    let root = tree.root_node();
    if let Some(error) = adapter::first_error(root) {
        let (line, column) = source.offset_to_line_col(error.start_byte());
        return Err(ParseError::Syntax { line, column });
    }
    Ok(adapter::lower(root))
}
