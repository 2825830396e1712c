// Parserr's Utilities Module
//
// Common helpers shared by the path resolver and the schema extractor.

use std::path::Path;

/// File utilities
pub mod file_utils {
    use super::*;

    /// Check if a file has a TypeScript source extension
    pub fn is_supported_file(path: &Path) -> bool {
        crate::language::detect_language_from_path(path).is_some()
    }

    /// Directories never searched for sources
    pub fn is_excluded_dir(path: &Path) -> bool {
        path.components()
            .any(|component| component.as_os_str() == "node_modules")
    }
}

/// Path normalization utilities (lexical, Unix-style rendering)
pub mod paths;
