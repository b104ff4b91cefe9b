//! JSX / TSX parser using tree-sitter

use std::path::Path;
use tree_sitter::{Node, Parser, Point};

use super::utils::{point_to_line_column, LangType};
use super::TextRun;
use crate::syntax::{MarkupKind, ParseError, ParseResult};

/// Parse JSX or TSX source and collect its text runs
pub fn parse_markup<'src>(
    path: &Path,
    content: &'src str,
    lang: LangType,
) -> ParseResult<Vec<TextRun<'src>>> {
    let mut parser = Parser::new();
    parser.set_language(&lang.language()).map_err(|e| ParseError::LanguageError {
        path: path.to_path_buf(),
        message: format!("Failed to set {lang:?} language: {e}"),
    })?;

    let tree = parser.parse(content, None).ok_or_else(|| ParseError::NoTree {
        path: path.to_path_buf(),
    })?;

    let root = tree.root_node();

    if root.has_error() {
        let node = first_error(root);
        let (line, column) = point_to_line_column(content, node.start_byte(), node.start_position());

        return Err(ParseError::SyntaxError {
            path: path.to_path_buf(),
            line,
            column,
        });
    }

    Ok(collect_text_runs(root, content))
}

/// Walk down to the first ERROR or MISSING node
fn first_error(root: Node<'_>) -> Node<'_> {
    let mut node = root;

    loop {
        if node.is_error() || node.is_missing() {
            return node;
        }

        let mut cursor = node.walk();
        let next = node.children(&mut cursor).find(Node::has_error);

        match next {
            Some(child) => node = child,
            None => return node,
        }
    }
}

/// Pre-order walk over the whole tree, collecting text runs of every element
fn collect_text_runs<'src>(root: Node<'_>, content: &'src str) -> Vec<TextRun<'src>> {
    let mut runs = Vec::new();
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();

        if MarkupKind::of(node.kind()) == MarkupKind::Element {
            push_element_runs(node, content, &mut runs);
        }

        if cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }

            if !cursor.goto_parent() {
                return runs;
            }
        }
    }
}

/// A run is the raw source between two consecutive non-text children.
///
/// Tree-sitter splits text at newlines and entities, so runs are cut from
/// the source between tags and expression containers instead of being
/// taken from individual `jsx_text` nodes.
fn push_element_runs<'src>(element: Node<'_>, content: &'src str, runs: &mut Vec<TextRun<'src>>) {
    let mut boundary: Option<(usize, Point)> = None;
    let mut cursor = element.walk();

    for child in element.children(&mut cursor) {
        match MarkupKind::of(child.kind()) {
            MarkupKind::Text => {}
            MarkupKind::Element
            | MarkupKind::SelfClosingElement
            | MarkupKind::OpeningTag
            | MarkupKind::ClosingTag
            | MarkupKind::Attribute
            | MarkupKind::ExpressionContainer
            | MarkupKind::Code => {
                if let Some((start, point)) = boundary {
                    push_run(content, start, child.start_byte(), point, runs);
                }
                boundary = Some((child.end_byte(), child.end_position()));
            }
        }
    }
}

fn push_run<'src>(
    content: &'src str,
    start: usize,
    end: usize,
    point: Point,
    runs: &mut Vec<TextRun<'src>>,
) {
    let Some(value) = content.get(start..end).filter(|v| !v.is_empty()) else {
        return;
    };

    let (start_line, start_column) = point_to_line_column(content, start, point);

    runs.push(TextRun {
        value,
        start_line,
        start_column,
        start_offset: start,
    });
}
