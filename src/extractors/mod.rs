//! Schema extractors
//!
//! An extractor turns the compilation unit registered in a [`Session`] into an
//! ordered sequence of [`TypeDescription`]s.
//!
//! - `base/` - output types and the shared BaseExtractor helpers
//! - `typescript/` - per-file TypeScript declaration walk
//! - `schema.rs` - the default, unit-wide extractor with its per-file cache

pub mod base;
pub mod schema;
pub mod typescript;

use crate::session::Session;

// Re-export the public API
pub use base::{
    EnumVariant, MemberDescription, MemberKind, TypeDescription, TypeKind, TypeParameter,
    Visibility,
};
pub use schema::TypeScriptSchemaExtractor;

/// Produces type descriptions from the unit registered in a session
pub trait SchemaExtractor: Send {
    /// Descriptions for the unit currently in `session`, in file then
    /// declaration order. Fails when no unit is registered.
    fn get_schema_description(&mut self, session: &Session) -> anyhow::Result<Vec<TypeDescription>>;

    /// Drop any extractor-local cache so the next run starts clean
    fn clean(&mut self);
}
