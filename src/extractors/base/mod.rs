// Base extractor types and helpers
//
// - types.rs: output data structures (TypeDescription, MemberDescription, ...)
// - extractor.rs: BaseExtractor (node text, doc comments, description creation)
// - tree_methods.rs: tree navigation helpers

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    EnumVariant, MemberDescription, MemberKind, TypeDescription, TypeKind, TypeParameter,
    Visibility,
};
