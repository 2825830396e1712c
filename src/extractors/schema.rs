//! Default schema extractor
//!
//! Walks every source file of the session's compilation unit in order. Results
//! are cached per file, keyed by path and content hash, until `clean` is called.

use super::base::TypeDescription;
use super::typescript::TypeScriptExtractor;
use super::SchemaExtractor;
use crate::session::Session;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

type CacheKey = (PathBuf, blake3::Hash);

#[derive(Debug, Default)]
pub struct TypeScriptSchemaExtractor {
    cache: HashMap<CacheKey, Vec<TypeDescription>>,
}

impl TypeScriptSchemaExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files with cached results
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}

impl SchemaExtractor for TypeScriptSchemaExtractor {
    fn get_schema_description(&mut self, session: &Session) -> anyhow::Result<Vec<TypeDescription>> {
        let unit = session
            .get_unit()
            .ok_or_else(|| anyhow::anyhow!("No compilation unit is registered in the session"))?;

        let mut descriptions = Vec::new();
        for file in unit.source_files() {
            let key = (file.path.clone(), blake3::hash(file.content.as_bytes()));
            let file_descriptions = self
                .cache
                .entry(key)
                .or_insert_with(|| TypeScriptExtractor::new(file).extract_descriptions());

            debug!(
                "Extracted {} type descriptions from {}",
                file_descriptions.len(),
                file.path.display()
            );
            descriptions.extend(file_descriptions.iter().cloned());
        }

        Ok(descriptions)
    }

    fn clean(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::CompilationUnit;
    use std::fs;

    #[test]
    fn test_requires_a_registered_unit() {
        let mut extractor = TypeScriptSchemaExtractor::new();
        let err = extractor
            .get_schema_description(&Session::new())
            .unwrap_err();
        assert!(err.to_string().contains("No compilation unit"));
    }

    #[test]
    fn test_descriptions_follow_file_order_then_declaration_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.ts");
        let a = dir.path().join("a.ts");
        fs::write(&b, "interface B1 {}\ninterface B2 {}\n").unwrap();
        fs::write(&a, "type A1 = string;\n").unwrap();

        let mut session = Session::new();
        session.set_unit(CompilationUnit::build(&[b, a]).unwrap());
        let mut extractor = TypeScriptSchemaExtractor::new();

        let names: Vec<String> = extractor
            .get_schema_description(&session)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();

        assert_eq!(names, vec!["B1", "B2", "A1"]);
        assert_eq!(extractor.cached_files(), 2);
    }

    #[test]
    fn test_clean_empties_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, "interface A {}\n").unwrap();

        let mut session = Session::new();
        session.set_unit(CompilationUnit::build(&[path]).unwrap());
        let mut extractor = TypeScriptSchemaExtractor::new();

        let first = extractor.get_schema_description(&session).unwrap();
        let second = extractor.get_schema_description(&session).unwrap();
        assert_eq!(first, second);
        assert_eq!(extractor.cached_files(), 1);

        extractor.clean();
        assert_eq!(extractor.cached_files(), 0);
    }
}
