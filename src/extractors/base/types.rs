// Type description data structures
//
// The output unit of a run. Field names serialize in camelCase so the JSON
// shape matches what TypeScript tooling consumers expect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One extracted schema record describing a declared type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescription {
    /// MD5 of `file:name:line:column`
    pub id: String,
    /// Type name as declared
    pub name: String,
    pub kind: TypeKind,
    /// Declaring file, Unix-style
    pub file_path: String,
    /// Start line number (1-based)
    pub start_line: u32,
    /// End line number (1-based)
    pub end_line: u32,
    /// Declared via `export` (directly or as `export default`)
    pub exported: bool,
    /// Dotted path of enclosing namespaces, if any
    pub namespace: Option<String>,
    /// Text of the preceding `/** */` block, markers stripped
    pub doc_comment: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    /// Interface `extends` list, or the class superclass
    pub extends: Vec<String>,
    /// Class `implements` list
    pub implements: Vec<String>,
    pub members: Vec<MemberDescription>,
    /// Right-hand side of a type alias
    pub alias_of: Option<String>,
    /// Enum members in declaration order
    pub variants: Vec<EnumVariant>,
    pub is_abstract: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Interface,
    TypeAlias,
    Class,
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::TypeAlias => write!(f, "type_alias"),
            TypeKind::Class => write!(f, "class"),
            TypeKind::Enum => write!(f, "enum"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    pub constraint: Option<String>,
    pub default: Option<String>,
}

/// A property, method or index signature of an interface, object type or class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescription {
    pub name: String,
    pub kind: MemberKind,
    /// Annotated type for properties; `(params): return` for methods
    pub type_text: Option<String>,
    pub optional: bool,
    pub readonly: bool,
    pub is_static: bool,
    pub visibility: Option<Visibility>,
    pub doc_comment: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Method,
    IndexSignature,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn from_modifier(text: &str) -> Option<Self> {
        match text.trim() {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            "protected" => Some(Visibility::Protected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumVariant {
    pub name: String,
    /// Initializer text, when the member has one
    pub value: Option<String>,
}
