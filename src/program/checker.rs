//! Pre-emission checks over a parsed file set
//!
//! Three passes per file: syntax errors reported by the grammar, duplicate
//! top-level declarations, and type references that resolve to nothing in the
//! unit. Name resolution is unit-wide (a name declared in any file resolves in
//! every file).

use super::{Diagnostic, DiagnosticMessageChain, SourceFile};
use crate::language::{get_import_node_kinds, get_type_declaration_node_kinds};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tree_sitter::Node;

const CODE_TOKEN_EXPECTED: u32 = 1005;
const CODE_DECLARATION_EXPECTED: u32 = 1128;
const CODE_DUPLICATE_IDENTIFIER: u32 = 2300;
const CODE_CANNOT_FIND_NAME: u32 = 2304;

/// Types provided by the ES2016 standard library and the default DOM library
static GLOBAL_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // es5
        "Array", "ReadonlyArray", "ArrayLike", "ConcatArray", "TemplateStringsArray",
        "Object", "Function", "CallableFunction", "NewableFunction", "IArguments", "String",
        "Number", "Boolean", "Symbol", "Date", "RegExp", "RegExpMatchArray", "RegExpExecArray",
        "Error", "ErrorConstructor", "EvalError", "RangeError", "ReferenceError", "SyntaxError",
        "TypeError", "URIError", "JSON", "Math", "PropertyKey", "PropertyDescriptor",
        "PropertyDescriptorMap", "TypedPropertyDescriptor", "ThisParameterType",
        "OmitThisParameter", "ThisType", "ClassDecorator", "PropertyDecorator",
        "MethodDecorator", "ParameterDecorator", "PromiseLike", "Promise",
        "PromiseConstructorLike", "ArrayBuffer", "ArrayBufferLike", "ArrayBufferView",
        "DataView", "Int8Array", "Uint8Array", "Uint8ClampedArray", "Int16Array",
        "Uint16Array", "Int32Array", "Uint32Array", "Float32Array", "Float64Array",
        "ObjectConstructor", "FunctionConstructor", "ArrayConstructor", "StringConstructor",
        "NumberConstructor", "BooleanConstructor", "DateConstructor", "RegExpConstructor",
        "PromiseConstructor", "Partial", "Required", "Readonly", "Pick", "Omit", "Record",
        "Exclude", "Extract", "NonNullable", "Parameters", "ConstructorParameters",
        "ReturnType", "InstanceType", "Awaited", "Uppercase", "Lowercase", "Capitalize",
        "Uncapitalize", "NoInfer",
        // es2015 and es2016
        "Map", "ReadonlyMap", "MapConstructor", "WeakMap", "Set", "ReadonlySet",
        "SetConstructor", "WeakSet", "Iterable", "Iterator", "IterableIterator",
        "IteratorResult", "IteratorYieldResult", "IteratorReturnResult", "Generator",
        "GeneratorFunction", "SymbolConstructor", "ProxyHandler", "ProxyConstructor",
        "Reflect",
        // dom
        "Window", "Document", "Node", "NodeList", "NodeListOf", "Element", "Event",
        "EventTarget", "EventListener", "EventListenerOrEventListenerObject",
        "AddEventListenerOptions", "Text", "Comment", "DocumentFragment", "ShadowRoot",
        "Attr", "Location", "History", "Navigator", "Storage", "Console", "Blob", "File",
        "FileList", "FileReader", "FormData", "Headers", "Request", "RequestInit",
        "Response", "ResponseInit", "URL", "URLSearchParams", "AbortController",
        "AbortSignal", "WebSocket", "Worker", "MessagePort", "MessageChannel", "Image",
        "ImageData", "Screen", "Selection", "Range", "MutationObserver", "MutationRecord",
        "IntersectionObserver", "ResizeObserver", "Performance", "Crypto", "TextEncoder",
        "TextDecoder", "ReadableStream", "WritableStream", "TransformStream", "Touch",
        "TouchList", "DataTransfer", "DOMRect", "DOMTokenList", "DOMParser",
        "CanvasRenderingContext2D", "XMLHttpRequest", "HTMLCollection",
        "HTMLCollectionOf", "Animation", "Notification", "BroadcastChannel",
    ]
    .into_iter()
    .collect()
});

/// DOM interface families too large to list: `HTML*`, `SVG*`, `CSS*`, and the
/// `*Event`/`*EventInit`/`*Element` types.
const DOM_PREFIXES: &[&str] = &["HTML", "SVG", "CSS", "DOM", "IDB", "RTC", "WebGL", "Media"];
const DOM_SUFFIXES: &[&str] = &["Event", "EventInit", "EventMap", "Element"];

fn is_global_type(name: &str) -> bool {
    if GLOBAL_TYPES.contains(name) {
        return true;
    }

    let in_family = |prefix: &str| {
        name.strip_prefix(prefix).is_some_and(|rest| {
            rest.is_empty() || rest.starts_with(|c: char| c.is_ascii_uppercase())
        })
    };
    DOM_PREFIXES.iter().any(|&prefix| in_family(prefix))
        || DOM_SUFFIXES
            .iter()
            .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
}

pub(super) fn check(files: &[SourceFile]) -> Vec<Diagnostic> {
    let declared = collect_declared_names(files);
    let mut diagnostics = Vec::new();

    for file in files {
        let mut file_diagnostics = Vec::new();
        let root = file.tree.root_node();

        report_syntax_errors(file, root, &mut file_diagnostics);
        report_duplicate_declarations(file, &mut file_diagnostics);

        let locals = collect_file_local_names(file);
        let mut scope = Vec::new();
        report_unresolved_types(
            file,
            root,
            &declared,
            &locals,
            &mut scope,
            &mut file_diagnostics,
        );

        file_diagnostics.sort_by_key(|d| (d.line, d.column));
        diagnostics.extend(file_diagnostics);
    }

    diagnostics
}

/// Names of every type declared anywhere in the unit, including namespaces
fn collect_declared_names(files: &[SourceFile]) -> HashSet<String> {
    let mut names = HashSet::new();

    for file in files {
        let kinds = get_type_declaration_node_kinds(file.language);
        walk(file.tree.root_node(), &mut |node| {
            let is_declaration =
                kinds.contains(&node.kind()) || matches!(node.kind(), "internal_module" | "module");
            if is_declaration {
                if let Some(name) = node.child_by_field_name("name") {
                    names.insert(file.node_text(&name).to_string());
                }
            }
        });
    }

    names
}

/// Imported bindings and names bound inside type expressions (`infer U`, `[K in ...]`)
fn collect_file_local_names(file: &SourceFile) -> HashSet<String> {
    let import_kinds = get_import_node_kinds(file.language);
    let mut names = HashSet::new();

    walk(file.tree.root_node(), &mut |node| {
        if import_kinds.contains(&node.kind()) {
            walk(node, &mut |inner| {
                if matches!(inner.kind(), "identifier" | "type_identifier") {
                    names.insert(file.node_text(&inner).to_string());
                }
            });
        } else if node.kind() == "mapped_type_clause" {
            if let Some(name) = node.child_by_field_name("name") {
                names.insert(file.node_text(&name).to_string());
            }
        } else if node.kind() == "infer_type" {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "type_identifier" {
                    names.insert(file.node_text(&child).to_string());
                }
            }
        }
    });

    names
}

fn report_syntax_errors(file: &SourceFile, node: Node, diagnostics: &mut Vec<Diagnostic>) {
    if node.is_error() {
        diagnostics.push(Diagnostic::error(
            file.path.clone(),
            node.start_position(),
            CODE_DECLARATION_EXPECTED,
            DiagnosticMessageChain::new("Declaration or statement expected."),
        ));
        return;
    }

    if node.is_missing() {
        diagnostics.push(Diagnostic::error(
            file.path.clone(),
            node.start_position(),
            CODE_TOKEN_EXPECTED,
            DiagnosticMessageChain::new(format!("'{}' expected.", node.kind())),
        ));
        return;
    }

    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        report_syntax_errors(file, child, diagnostics);
    }
}

/// Declaration spaces a top-level name can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclarationSpace {
    Class,
    Interface,
    TypeAlias,
}

impl DeclarationSpace {
    fn of(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" | "abstract_class_declaration" => Some(Self::Class),
            "interface_declaration" => Some(Self::Interface),
            "type_alias_declaration" => Some(Self::TypeAlias),
            _ => None,
        }
    }

    /// Interfaces merge with interfaces and classes; nothing merges with a type alias
    fn conflicts_with(self, other: Self) -> bool {
        match (self, other) {
            (Self::TypeAlias, _) | (_, Self::TypeAlias) => true,
            (Self::Class, Self::Class) => true,
            _ => false,
        }
    }
}

/// Top-level names that may not be declared twice in one file
fn report_duplicate_declarations(file: &SourceFile, diagnostics: &mut Vec<Diagnostic>) {
    let root = file.tree.root_node();
    let mut seen: HashMap<String, Vec<(DeclarationSpace, u32)>> = HashMap::new();

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        let Some(declaration) = unwrap_declaration(child) else {
            continue;
        };
        let Some(space) = DeclarationSpace::of(declaration.kind()) else {
            continue;
        };
        let Some(name_node) = declaration.child_by_field_name("name") else {
            continue;
        };
        let name = file.node_text(&name_node).to_string();
        let line = name_node.start_position().row as u32 + 1;

        let earlier = seen.entry(name.clone()).or_default();
        let clash = earlier
            .iter()
            .find(|(previous, _)| previous.conflicts_with(space))
            .map(|(_, first_line)| *first_line);

        if let Some(first_line) = clash {
            let message = DiagnosticMessageChain::new(format!("Duplicate identifier '{}'.", name))
                .with_next(DiagnosticMessageChain::new(format!(
                    "'{}' was also declared at line {}.",
                    name, first_line
                )));
            diagnostics.push(Diagnostic::error(
                file.path.clone(),
                name_node.start_position(),
                CODE_DUPLICATE_IDENTIFIER,
                message,
            ));
        } else {
            earlier.push((space, line));
        }
    }
}

/// The declaration under `export` and `declare` wrappers
fn unwrap_declaration(node: Node) -> Option<Node> {
    let mut current = node;
    loop {
        match current.kind() {
            "export_statement" => current = current.child_by_field_name("declaration")?,
            "ambient_declaration" => current = current.named_child(0)?,
            _ => return Some(current),
        }
    }
}

fn report_unresolved_types(
    file: &SourceFile,
    node: Node,
    declared: &HashSet<String>,
    locals: &HashSet<String>,
    scope: &mut Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let scope_len = scope.len();

    if let Some(params) = node.child_by_field_name("type_parameters") {
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if let Some(name) = param.child_by_field_name("name") {
                scope.push(file.node_text(&name).to_string());
            }
        }
    }

    if node.kind() == "type_identifier" && is_type_reference(&node) {
        let name = file.node_text(&node);
        let resolved = declared.contains(name)
            || locals.contains(name)
            || scope.iter().any(|bound| bound == name)
            || is_global_type(name);

        if !resolved {
            diagnostics.push(Diagnostic::error(
                file.path.clone(),
                node.start_position(),
                CODE_CANNOT_FIND_NAME,
                DiagnosticMessageChain::new(format!("Cannot find name '{}'.", name)),
            ));
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        report_unresolved_types(file, child, declared, locals, scope, diagnostics);
    }

    scope.truncate(scope_len);
}

/// Qualified names (`ns.Type`) resolve through their namespace, not globally
fn is_type_reference(node: &Node) -> bool {
    !matches!(
        node.parent().map(|parent| parent.kind()),
        Some("nested_type_identifier") | Some("ERROR")
    )
}

fn walk<'a, F>(node: Node<'a>, visitor: &mut F)
where
    F: FnMut(Node<'a>),
{
    visitor(node);

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, visitor);
    }
}
