//! Compilation units
//!
//! A [`CompilationUnit`] is the parsed, checked form of one resolved file set.
//! It is built fresh for every run with fixed compiler options and carries the
//! pre-emission diagnostics computed while building it.

mod checker;
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticCategory, DiagnosticMessageChain};

use crate::error::BuildError;
use crate::language::{detect_language_from_path, get_tree_sitter_language};
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// Language level the unit is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptTarget {
    Es2016,
}

/// Module format the unit is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    CommonJs,
}

/// Compiler options applied to every unit. Not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    pub target: ScriptTarget,
    pub module: ModuleKind,
}

impl CompilerOptions {
    pub const FIXED: CompilerOptions = CompilerOptions {
        target: ScriptTarget::Es2016,
        module: ModuleKind::CommonJs,
    };
}

/// One parsed source file of a unit
pub struct SourceFile {
    pub path: PathBuf,
    pub language: &'static str,
    pub content: String,
    pub tree: Tree,
}

impl SourceFile {
    /// Text of a node in this file
    pub fn node_text(&self, node: &tree_sitter::Node) -> &str {
        self.content
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("language", &self.language)
            .field("bytes", &self.content.len())
            .finish()
    }
}

/// The checked, in-memory representation of a resolved file set
#[derive(Debug)]
pub struct CompilationUnit {
    options: CompilerOptions,
    files: Vec<SourceFile>,
    diagnostics: Vec<Diagnostic>,
}

impl CompilationUnit {
    /// Read, parse and check every path, in order
    ///
    /// Any unreadable or unparseable file fails the whole build.
    pub fn build(paths: &[PathBuf]) -> Result<Self, BuildError> {
        let options = CompilerOptions::FIXED;
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            files.push(parse_source_file(path)?);
        }

        let diagnostics = checker::check(&files);

        debug!(
            "Built compilation unit: {} files, {} diagnostics ({:?}, {:?})",
            files.len(),
            diagnostics.len(),
            options.target,
            options.module
        );

        Ok(Self {
            options,
            files,
            diagnostics,
        })
    }

    pub fn options(&self) -> CompilerOptions {
        self.options
    }

    pub fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn root_file_names(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|file| file.path.as_path())
    }

    /// Diagnostics from parsing and checking, in file order
    pub fn pre_emit_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

fn parse_source_file(path: &Path) -> Result<SourceFile, BuildError> {
    let language =
        detect_language_from_path(path).ok_or_else(|| BuildError::UnsupportedFile(path.into()))?;

    let content = std::fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.into(),
        source,
    })?;

    let mut parser = Parser::new();
    let tree_sitter_language =
        get_tree_sitter_language(language).map_err(|e| BuildError::Language(e.to_string()))?;
    parser.set_language(&tree_sitter_language).map_err(|e| {
        BuildError::Language(format!(
            "Failed to set parser language for {}: {}",
            language, e
        ))
    })?;

    let tree = parser
        .parse(&content, None)
        .ok_or_else(|| BuildError::Parse(path.into()))?;

    Ok(SourceFile {
        path: path.into(),
        language,
        content,
        tree,
    })
}
