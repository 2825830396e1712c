//! Orchestrator: one extraction run from options to type descriptions
//!
//! A run installs the options into a [`Session`], resolves the file set,
//! builds and registers the compilation unit, traps its diagnostics, and asks
//! the extractor for descriptions. The session and the extractor cache are
//! torn down by a scope guard, so they are reset on every exit path.

use crate::config::ParserOptions;
use crate::diagnostics::{trap_diagnostics, DiagnosticSink, TracingSink};
use crate::error::{ParserError, Result};
use crate::extractors::{SchemaExtractor, TypeDescription, TypeScriptSchemaExtractor};
use crate::program::CompilationUnit;
use crate::resolver::{resolve_file_paths, FsPathResolver, PathResolver};
use crate::session::Session;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Entry point for extraction runs
///
/// Collaborators are substitutable; the defaults are [`FsPathResolver`],
/// [`TypeScriptSchemaExtractor`] and [`TracingSink`].
pub struct Parser {
    resolver: Arc<dyn PathResolver>,
    extractor: Box<dyn SchemaExtractor>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(FsPathResolver::new()),
            extractor: Box::new(TypeScriptSchemaExtractor::new()),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn PathResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_extractor(mut self, extractor: Box<dyn SchemaExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run one extraction with a fresh session
    pub async fn parse(&mut self, options: ParserOptions) -> Result<Vec<TypeDescription>> {
        let mut session = Session::new();
        self.parse_in(&mut session, options).await
    }

    /// Run one extraction against a caller-owned session
    ///
    /// The session is empty again when this returns, whether the run
    /// succeeded or not.
    pub async fn parse_in(
        &mut self,
        session: &mut Session,
        options: ParserOptions,
    ) -> Result<Vec<TypeDescription>> {
        let start_time = Instant::now();
        let mut scope = RunScope {
            session,
            extractor: self.extractor.as_mut(),
        };

        scope.session.set_config(options.clone());

        let paths = resolve_file_paths(&options, self.resolver.as_ref()).await?;
        debug!("Resolved {} source files", paths.len());

        scope.session.set_unit(CompilationUnit::build(&paths)?);

        let diagnostic_count = scope
            .session
            .get_unit()
            .map(|unit| trap_diagnostics(unit, self.sink.as_ref()))
            .unwrap_or(0);

        let descriptions = scope
            .extractor
            .get_schema_description(scope.session)
            .map_err(ParserError::Extract)?;

        drop(scope);

        info!(
            "Extracted {} type descriptions from {} files ({} diagnostics) in {}ms",
            descriptions.len(),
            paths.len(),
            diagnostic_count,
            start_time.elapsed().as_millis()
        );

        Ok(descriptions)
    }
}

/// Resets run state when dropped: extractor cache first, then the session
struct RunScope<'a> {
    session: &'a mut Session,
    extractor: &'a mut dyn SchemaExtractor,
}

impl Drop for RunScope<'_> {
    fn drop(&mut self) {
        self.extractor.clean();
        self.session.clear();
        debug!("Run state cleared");
    }
}

/// Run one extraction with the default collaborators
pub async fn parse(options: ParserOptions) -> Result<Vec<TypeDescription>> {
    Parser::new().parse(options).await
}
