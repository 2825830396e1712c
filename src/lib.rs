// Parserr Core - tree-sitter powered TypeScript schema extraction
//
// One run: options -> path resolution -> compilation unit -> diagnostics ->
// type descriptions. Run state lives in an explicit Session that is cleared
// on every exit path.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extractors;
pub mod language;
pub mod parser;
pub mod program;
pub mod resolver;
pub mod session;

// Parserr-specific utilities
pub mod utils;

pub use config::{ConfigKey, ConfigValue, ParserOptions};
pub use diagnostics::{CollectingSink, DiagnosticSink, StderrSink, TracingSink};
pub use error::{BuildError, ConfigurationError, ParserError};
pub use extractors::{SchemaExtractor, TypeDescription, TypeKind, TypeScriptSchemaExtractor};
pub use parser::{parse, Parser};
pub use program::{CompilationUnit, Diagnostic};
pub use resolver::{FsPathResolver, PathResolver};
pub use session::Session;
