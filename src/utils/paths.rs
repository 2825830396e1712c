// Path normalization utilities
//
// Inputs may be relative, contain `.`/`..` segments, or point at files that do
// not exist yet (the build reports those). Normalization is therefore purely
// lexical: no canonicalize(), no symlink resolution.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Resolve `.` and `..` components without touching the filesystem
///
/// A `..` that would climb above the root is dropped, matching how the
/// filesystem treats `/..`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {} // Skip "."
            Component::ParentDir => {
                // Relative paths keep leading ".." segments
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Join `input` onto `base` (unless already absolute) and normalize
pub fn resolve_input(input: &str, base: &Path) -> PathBuf {
    let candidate = Path::new(input);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base.join(candidate)
    };
    normalize_lexically(&joined)
}

/// Render a path with `/` separators regardless of platform
pub fn to_unix_style(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_dot_segments() {
        let path = Path::new("/home/murphy/project/./src/../lib/types.ts");
        assert_eq!(
            normalize_lexically(path),
            PathBuf::from("/home/murphy/project/lib/types.ts")
        );
    }

    #[test]
    fn test_normalize_does_not_climb_above_root() {
        assert_eq!(
            normalize_lexically(Path::new("/../etc/a.ts")),
            PathBuf::from("/etc/a.ts")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent_segments_of_relative_paths() {
        assert_eq!(
            normalize_lexically(Path::new("../shared/./a.ts")),
            PathBuf::from("../shared/a.ts")
        );
    }

    #[test]
    fn test_resolve_input_joins_relative_onto_base() {
        let base = Path::new("/home/murphy/project");
        assert_eq!(
            resolve_input("src/a.ts", base),
            PathBuf::from("/home/murphy/project/src/a.ts")
        );
        assert_eq!(
            resolve_input("./src/../a.ts", base),
            PathBuf::from("/home/murphy/project/a.ts")
        );
    }

    #[test]
    fn test_resolve_input_keeps_absolute_inputs() {
        let base = Path::new("/home/murphy/project");
        assert_eq!(
            resolve_input("/opt/types/index.d.ts", base),
            PathBuf::from("/opt/types/index.d.ts")
        );
    }

    #[test]
    fn test_unix_style_rendering() {
        let rendered = to_unix_style(Path::new("/home/murphy/project/src/a.ts"));
        assert_eq!(rendered, "/home/murphy/project/src/a.ts");
        assert!(!rendered.contains('\\'));
    }
}
