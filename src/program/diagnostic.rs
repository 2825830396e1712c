//! Compiler diagnostics
//!
//! A diagnostic carries a message chain: a head message plus nested detail
//! messages. Flattening renders the chain as plain text, each nesting level
//! indented by two spaces on its own line.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Suggestion => write!(f, "suggestion"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A message and the detail messages nested under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessageChain {
    pub message_text: String,
    pub next: Vec<DiagnosticMessageChain>,
}

impl DiagnosticMessageChain {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self {
            message_text: message_text.into(),
            next: Vec::new(),
        }
    }

    pub fn with_next(mut self, next: DiagnosticMessageChain) -> Self {
        self.next.push(next);
        self
    }

    /// Render the chain as plain text, joining levels with `new_line`
    pub fn flatten(&self, new_line: &str) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out, new_line, 0);
        out
    }

    fn flatten_into(&self, out: &mut String, new_line: &str, indent: usize) {
        if indent > 0 {
            out.push_str(new_line);
            out.push_str(&"  ".repeat(indent));
        }
        out.push_str(&self.message_text);
        for child in &self.next {
            child.flatten_into(out, new_line, indent + 1);
        }
    }
}

/// A compiler-reported message tied to a source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    /// 1-based line
    pub line: u32,
    /// 0-based column
    pub column: u32,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message: DiagnosticMessageChain,
}

impl Diagnostic {
    pub fn error(
        file: PathBuf,
        position: tree_sitter::Point,
        code: u32,
        message: DiagnosticMessageChain,
    ) -> Self {
        Self {
            file,
            line: position.row as u32 + 1,
            column: position.column as u32,
            category: DiagnosticCategory::Error,
            code,
            message,
        }
    }

    pub fn flatten_message_text(&self, new_line: &str) -> String {
        self.message.flatten(new_line)
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}): {} TS{}: {}",
            self.file.display(),
            self.line,
            self.column + 1,
            self.category,
            self.code,
            self.flatten_message_text("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_single_message() {
        let chain = DiagnosticMessageChain::new("Cannot find name 'Foo'.");
        assert_eq!(chain.flatten("\n"), "Cannot find name 'Foo'.");
    }

    #[test]
    fn test_flatten_nested_chain_indents_each_level() {
        let chain = DiagnosticMessageChain::new("Duplicate identifier 'A'.").with_next(
            DiagnosticMessageChain::new("'A' was also declared here.")
                .with_next(DiagnosticMessageChain::new("at a.ts:3")),
        );

        assert_eq!(
            chain.flatten("\n"),
            "Duplicate identifier 'A'.\n  'A' was also declared here.\n    at a.ts:3"
        );
    }

    #[test]
    fn test_display_includes_location_and_code() {
        let diagnostic = Diagnostic::error(
            PathBuf::from("src/a.ts"),
            tree_sitter::Point { row: 4, column: 2 },
            2304,
            DiagnosticMessageChain::new("Cannot find name 'Foo'."),
        );

        assert_eq!(diagnostic.line, 5);
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.to_string(),
            "src/a.ts(5,3): error TS2304: Cannot find name 'Foo'."
        );
    }
}
