//! TypeScript type description extractor with modular architecture
//!
//! - **declarations**: tree walk and routing by node kind
//! - **interfaces**: interface, type alias and enum extraction
//! - **classes**: class extraction with heritage clauses
//! - **members**: property, method and index signature extraction
//! - **helpers**: modifiers, annotations and type parameter lists

mod classes;
mod declarations;
mod helpers;
mod interfaces;
mod members;

use crate::extractors::base::{BaseExtractor, TypeDescription};
use crate::program::SourceFile;

/// Extracts the type descriptions of one source file
pub struct TypeScriptExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> TypeScriptExtractor<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            base: BaseExtractor::new(file),
        }
    }

    /// All type declarations of the file, in declaration order
    pub fn extract_descriptions(&self) -> Vec<TypeDescription> {
        let file = self.base.file;
        declarations::extract_descriptions(self, &file.tree)
    }

    pub(crate) fn base(&self) -> &BaseExtractor<'a> {
        &self.base
    }
}
