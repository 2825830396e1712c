//! Language Support - Shared tree-sitter language configuration
//!
//! ALL grammar selection for compilation units goes through this module.
//! Only the TypeScript family is supported: plain `.ts` sources (including
//! `.d.ts` declaration files) and `.tsx` sources.

use anyhow::Result;
use std::path::Path;

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: typescript, tsx",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "ts" => Some("typescript"),
        "tsx" => Some("tsx"),
        _ => None,
    }
}

/// Detect language from a file path's extension
pub fn detect_language_from_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}

/// AST node kinds that declare a named type
///
/// Used by the checker to collect declared names and by the schema extractor
/// to pick which nodes become type descriptions.
pub fn get_type_declaration_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "typescript" | "tsx" => vec![
            "interface_declaration",
            "type_alias_declaration",
            "class_declaration",
            "abstract_class_declaration",
            "enum_declaration",
        ],
        _ => vec![],
    }
}

/// AST node kinds that represent import statements
pub fn get_import_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "typescript" | "tsx" => vec!["import_statement"],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_typescript_family() {
        assert_eq!(detect_language_from_extension("ts"), Some("typescript"));
        assert_eq!(detect_language_from_extension("tsx"), Some("tsx"));
        assert_eq!(detect_language_from_extension("js"), None);
        assert_eq!(detect_language_from_extension("mts"), None);
        assert_eq!(detect_language_from_extension("cts"), None);
        assert_eq!(
            detect_language_from_path(Path::new("types/index.d.ts")),
            Some("typescript")
        );
        assert_eq!(detect_language_from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_grammar_lookup() {
        assert!(get_tree_sitter_language("typescript").is_ok());
        assert!(get_tree_sitter_language("tsx").is_ok());

        let err = get_tree_sitter_language("python").unwrap_err();
        assert!(err.to_string().contains("Unsupported language"));
    }
}
